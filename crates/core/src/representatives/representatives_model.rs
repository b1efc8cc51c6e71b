//! Sales representative domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a sales representative.
///
/// Eligibility is an explicit attribute rather than a role lookup: only
/// representatives with `is_eligible` set participate in the new-company
/// rotation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesRep {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_eligible: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SalesRep {
    /// Full display name, used in notifications and operator logs.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Input model for registering a new sales representative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesRep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_eligible: bool,
}

impl NewSalesRep {
    /// Validates the new representative data.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Representative name cannot be empty".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "'{}' is not a valid email address",
                self.email
            ))));
        }
        Ok(())
    }
}

/// Input model for updating an existing representative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepUpdate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_eligible: bool,
}

impl SalesRepUpdate {
    /// Validates the representative update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Representative ID is required for updates".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        Ok(())
    }
}

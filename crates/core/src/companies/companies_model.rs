//! Company domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a shipper company.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub contact_email: String,
}

impl NewCompany {
    /// Validates the new company data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Company name cannot be empty".to_string(),
            )));
        }
        if self.contact_email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "contactEmail".to_string(),
            )));
        }
        Ok(())
    }
}

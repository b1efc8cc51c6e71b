//! Assignment domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a company-to-representative assignment.
///
/// One record per company, append-only. `seq` is taken from the rotation
/// cursor version at assignment time, so the history orders deterministically
/// without wall-clock tie-breaking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAssignment {
    pub id: String,
    pub company_id: String,
    pub sales_rep_id: String,
    pub seq: i64,
    pub assigned_at: NaiveDateTime,
}

/// Input model for recording a new assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub company_id: String,
    pub sales_rep_id: String,
}

/// Durable pointer to the last-assigned representative.
///
/// A single row; `version` increases by one on every successful assignment
/// and doubles as the optimistic-lock token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RotationCursor {
    pub last_rep_id: Option<String>,
    pub version: i64,
    pub updated_at: NaiveDateTime,
}

/// Conditional cursor update, applied only when the stored version still
/// matches `expected_version`.
#[derive(Debug, Clone)]
pub struct CursorAdvance {
    pub expected_version: i64,
    pub rep_id: String,
}

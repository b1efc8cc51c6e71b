//! Database models for assignments and the rotation cursor.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use freightline_core::assignments::{CompanyAssignment, RotationCursor};

/// Database model for company assignments
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::company_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyAssignmentDB {
    pub id: String,
    pub company_id: String,
    pub sales_rep_id: String,
    pub seq: i64,
    pub assigned_at: NaiveDateTime,
}

/// Database model for the singleton rotation cursor row
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::rotation_cursor)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RotationCursorDB {
    pub id: String,
    pub last_rep_id: Option<String>,
    pub version: i64,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<CompanyAssignmentDB> for CompanyAssignment {
    fn from(db: CompanyAssignmentDB) -> Self {
        Self {
            id: db.id,
            company_id: db.company_id,
            sales_rep_id: db.sales_rep_id,
            seq: db.seq,
            assigned_at: db.assigned_at,
        }
    }
}

impl From<RotationCursorDB> for RotationCursor {
    fn from(db: RotationCursorDB) -> Self {
        Self {
            last_rep_id: db.last_rep_id,
            version: db.version,
            updated_at: db.updated_at,
        }
    }
}

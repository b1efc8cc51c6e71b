//! Database model for sales representatives.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use freightline_core::representatives::{NewSalesRep, SalesRep, SalesRepUpdate};

/// Database model for sales representatives
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::sales_reps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SalesRepDB {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_eligible: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<SalesRepDB> for SalesRep {
    fn from(db: SalesRepDB) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            is_eligible: db.is_eligible,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewSalesRep> for SalesRepDB {
    fn from(domain: NewSalesRep) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            is_eligible: domain.is_eligible,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<SalesRepUpdate> for SalesRepDB {
    fn from(domain: SalesRepUpdate) -> Self {
        Self {
            id: domain.id,
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            is_eligible: domain.is_eligible,
            created_at: NaiveDateTime::default(), // Filled from the existing record
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

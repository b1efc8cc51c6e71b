//! Database model for companies.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use freightline_core::companies::{Company, NewCompany};

/// Database model for shipper companies
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyDB {
    pub id: String,
    pub name: String,
    pub contact_email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<CompanyDB> for Company {
    fn from(db: CompanyDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            contact_email: db.contact_email,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCompany> for CompanyDB {
    fn from(domain: NewCompany) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            contact_email: domain.contact_email,
            created_at: now,
            updated_at: now,
        }
    }
}

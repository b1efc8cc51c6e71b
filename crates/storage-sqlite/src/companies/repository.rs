use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::companies;
use crate::schema::companies::dsl::*;

use freightline_core::companies::{Company, CompanyRepositoryTrait, NewCompany};
use freightline_core::Result;

use super::model::CompanyDB;

/// Repository for managing company data in the database
pub struct CompanyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CompanyRepositoryTrait for CompanyRepository {
    async fn create(&self, new_company: NewCompany) -> Result<Company> {
        self.writer
            .exec(move |conn| {
                let mut company_db: CompanyDB = new_company.into();
                if company_db.id.is_empty() {
                    company_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(companies::table)
                    .values(&company_db)
                    .execute(conn)
                    .into_core()?;

                Ok(company_db.into())
            })
            .await
    }

    /// Retrieves a company by its ID
    fn get_by_id(&self, company_id: &str) -> Result<Company> {
        let mut conn = get_connection(&self.pool)?;

        let company = companies
            .select(CompanyDB::as_select())
            .find(company_id)
            .first::<CompanyDB>(&mut conn)
            .into_core()?;

        Ok(company.into())
    }

    /// Lists companies, newest first
    fn list(&self) -> Result<Vec<Company>> {
        let mut conn = get_connection(&self.pool)?;

        let results = companies
            .select(CompanyDB::as_select())
            .order(created_at.desc())
            .load::<CompanyDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Company::from).collect())
    }
}

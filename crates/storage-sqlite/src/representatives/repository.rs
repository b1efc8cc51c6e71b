use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::sales_reps;
use crate::schema::sales_reps::dsl::*;

use freightline_core::representatives::{
    NewSalesRep, SalesRep, SalesRepRepositoryTrait, SalesRepUpdate,
};
use freightline_core::Result;

use super::model::SalesRepDB;

/// Repository for managing sales representative data in the database
pub struct SalesRepRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SalesRepRepository {
    /// Creates a new SalesRepRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SalesRepRepositoryTrait for SalesRepRepository {
    async fn create(&self, new_rep: NewSalesRep) -> Result<SalesRep> {
        self.writer
            .exec(move |conn| {
                let mut rep_db: SalesRepDB = new_rep.into();
                if rep_db.id.is_empty() {
                    rep_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(sales_reps::table)
                    .values(&rep_db)
                    .execute(conn)
                    .into_core()?;

                Ok(rep_db.into())
            })
            .await
    }

    async fn update(&self, rep_update: SalesRepUpdate) -> Result<SalesRep> {
        self.writer
            .exec(move |conn| {
                let mut rep_db: SalesRepDB = rep_update.into();

                let existing = sales_reps
                    .select(SalesRepDB::as_select())
                    .find(&rep_db.id)
                    .first::<SalesRepDB>(conn)
                    .into_core()?;

                rep_db.created_at = existing.created_at;
                rep_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(sales_reps.find(&rep_db.id))
                    .set(&rep_db)
                    .execute(conn)
                    .into_core()?;

                Ok(rep_db.into())
            })
            .await
    }

    /// Retrieves a representative by its ID
    fn get_by_id(&self, rep_id: &str) -> Result<SalesRep> {
        let mut conn = get_connection(&self.pool)?;

        let rep = sales_reps
            .select(SalesRepDB::as_select())
            .find(rep_id)
            .first::<SalesRepDB>(&mut conn)
            .into_core()?;

        Ok(rep.into())
    }

    /// Lists representatives, ordered by id so callers observe a stable
    /// rotation order
    fn list(&self, is_eligible_filter: Option<bool>) -> Result<Vec<SalesRep>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = sales_reps::table.into_boxed();

        if let Some(eligible) = is_eligible_filter {
            query = query.filter(is_eligible.eq(eligible));
        }

        let results = query
            .select(SalesRepDB::as_select())
            .order(id.asc())
            .load::<SalesRepDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(SalesRep::from).collect())
    }
}

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{company_assignments, rotation_cursor};

use freightline_core::assignments::{
    AssignmentError, AssignmentRepositoryTrait, CompanyAssignment, CursorAdvance, NewAssignment,
    RotationCursor,
};
use freightline_core::constants::ROTATION_CURSOR_ID;
use freightline_core::Result;

use super::model::{CompanyAssignmentDB, RotationCursorDB};

/// Repository for the assignment log and the rotation cursor.
///
/// All mutations go through the single-writer handle; the cursor advance is
/// additionally guarded by an optimistic version check so that multiple
/// processes sharing the database file cannot both take the same turn.
pub struct AssignmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssignmentRepository {
    /// Creates a new AssignmentRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AssignmentRepositoryTrait for AssignmentRepository {
    /// Reads the rotation cursor. The row is seeded by the migrations.
    fn get_cursor(&self) -> Result<RotationCursor> {
        let mut conn = get_connection(&self.pool)?;

        let cursor = rotation_cursor::table
            .select(RotationCursorDB::as_select())
            .find(ROTATION_CURSOR_ID)
            .first::<RotationCursorDB>(&mut conn)
            .into_core()?;

        Ok(cursor.into())
    }

    fn get_by_company_id(&self, company_id: &str) -> Result<Option<CompanyAssignment>> {
        let mut conn = get_connection(&self.pool)?;

        let assignment = company_assignments::table
            .filter(company_assignments::company_id.eq(company_id))
            .select(CompanyAssignmentDB::as_select())
            .first::<CompanyAssignmentDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(assignment.map(CompanyAssignment::from))
    }

    /// Lists assignments in reverse assignment order
    fn list(&self, sales_rep_filter: Option<&str>) -> Result<Vec<CompanyAssignment>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = company_assignments::table.into_boxed();

        if let Some(rep_id) = sales_rep_filter {
            query = query.filter(company_assignments::sales_rep_id.eq(rep_id.to_string()));
        }

        let results = query
            .select(CompanyAssignmentDB::as_select())
            .order(company_assignments::seq.desc())
            .load::<CompanyAssignmentDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(CompanyAssignment::from).collect())
    }

    /// Advances the cursor and inserts the assignment in one transaction.
    ///
    /// The conditional update is the linearization point: it only matches
    /// while the cursor version the caller read is still current, so of two
    /// racing invocations exactly one commits and the other sees
    /// `RotationConflict` and re-reads.
    async fn record(
        &self,
        new_assignment: NewAssignment,
        cursor: CursorAdvance,
    ) -> Result<CompanyAssignment> {
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();
                let next_version = cursor.expected_version + 1;

                let matched = diesel::update(
                    rotation_cursor::table
                        .find(ROTATION_CURSOR_ID)
                        .filter(rotation_cursor::version.eq(cursor.expected_version)),
                )
                .set((
                    rotation_cursor::last_rep_id.eq(Some(cursor.rep_id.clone())),
                    rotation_cursor::version.eq(next_version),
                    rotation_cursor::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;

                if matched == 0 {
                    return Err(AssignmentError::RotationConflict.into());
                }

                let assignment_db = CompanyAssignmentDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    company_id: new_assignment.company_id,
                    sales_rep_id: new_assignment.sales_rep_id,
                    seq: next_version,
                    assigned_at: now,
                };

                diesel::insert_into(company_assignments::table)
                    .values(&assignment_db)
                    .execute(conn)
                    .into_core()?;

                Ok(assignment_db.into())
            })
            .await
    }
}

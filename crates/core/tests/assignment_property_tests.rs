//! Property-based integration tests for the rotation balancer.
//!
//! These tests verify that the fairness and rotation properties hold across
//! all valid pool sizes and call counts, using the `proptest` crate for
//! random test case generation.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use freightline_core::assignments::{
    AssignmentError, AssignmentRepositoryTrait, AssignmentService, AssignmentServiceTrait,
    CompanyAssignment, CursorAdvance, NewAssignment, RotationCursor,
};
use freightline_core::companies::{Company, CompanyRepositoryTrait, NewCompany};
use freightline_core::errors::{DatabaseError, Result};
use freightline_core::representatives::{
    NewSalesRep, SalesRep, SalesRepRepositoryTrait, SalesRepUpdate,
};

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// Minimal in-memory persistence shared by all three repository traits.
#[derive(Clone, Default)]
struct InMemory {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    reps: Vec<SalesRep>,
    companies: Vec<Company>,
    assignments: Vec<CompanyAssignment>,
    cursor_last: Option<String>,
    cursor_version: i64,
}

impl InMemory {
    fn with_pool(rep_ids: &[String]) -> Self {
        let mem = Self::default();
        {
            let mut inner = mem.inner.lock().unwrap();
            for id in rep_ids {
                inner.reps.push(SalesRep {
                    id: id.clone(),
                    first_name: id.clone(),
                    last_name: "Rep".to_string(),
                    email: format!("{id}@freightline.test"),
                    is_eligible: true,
                    created_at: now(),
                    updated_at: now(),
                });
            }
        }
        mem
    }

    fn add_company(&self, id: &str) {
        self.inner.lock().unwrap().companies.push(Company {
            id: id.to_string(),
            name: id.to_string(),
            contact_email: format!("ops@{id}.test"),
            created_at: now(),
            updated_at: now(),
        });
    }
}

#[async_trait]
impl SalesRepRepositoryTrait for InMemory {
    async fn create(&self, _new_rep: NewSalesRep) -> Result<SalesRep> {
        unimplemented!("not exercised by these tests")
    }

    async fn update(&self, _rep_update: SalesRepUpdate) -> Result<SalesRep> {
        unimplemented!("not exercised by these tests")
    }

    fn get_by_id(&self, rep_id: &str) -> Result<SalesRep> {
        self.inner
            .lock()
            .unwrap()
            .reps
            .iter()
            .find(|r| r.id == rep_id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(rep_id.to_string()).into())
    }

    fn list(&self, is_eligible_filter: Option<bool>) -> Result<Vec<SalesRep>> {
        let mut reps = self.inner.lock().unwrap().reps.clone();
        if let Some(eligible) = is_eligible_filter {
            reps.retain(|r| r.is_eligible == eligible);
        }
        // Fetch order deliberately scrambled relative to insertion.
        reps.reverse();
        Ok(reps)
    }
}

#[async_trait]
impl CompanyRepositoryTrait for InMemory {
    async fn create(&self, _new_company: NewCompany) -> Result<Company> {
        unimplemented!("not exercised by these tests")
    }

    fn get_by_id(&self, company_id: &str) -> Result<Company> {
        self.inner
            .lock()
            .unwrap()
            .companies
            .iter()
            .find(|c| c.id == company_id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(company_id.to_string()).into())
    }

    fn list(&self) -> Result<Vec<Company>> {
        Ok(self.inner.lock().unwrap().companies.clone())
    }
}

#[async_trait]
impl AssignmentRepositoryTrait for InMemory {
    fn get_cursor(&self) -> Result<RotationCursor> {
        let inner = self.inner.lock().unwrap();
        Ok(RotationCursor {
            last_rep_id: inner.cursor_last.clone(),
            version: inner.cursor_version,
            updated_at: now(),
        })
    }

    fn get_by_company_id(&self, company_id: &str) -> Result<Option<CompanyAssignment>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .assignments
            .iter()
            .find(|a| a.company_id == company_id)
            .cloned())
    }

    fn list(&self, sales_rep_filter: Option<&str>) -> Result<Vec<CompanyAssignment>> {
        let mut assignments = self.inner.lock().unwrap().assignments.clone();
        if let Some(rep_id) = sales_rep_filter {
            assignments.retain(|a| a.sales_rep_id == rep_id);
        }
        assignments.sort_by(|a, b| b.seq.cmp(&a.seq));
        Ok(assignments)
    }

    async fn record(
        &self,
        new_assignment: NewAssignment,
        cursor: CursorAdvance,
    ) -> Result<CompanyAssignment> {
        let mut inner = self.inner.lock().unwrap();
        if inner.cursor_version != cursor.expected_version {
            return Err(AssignmentError::RotationConflict.into());
        }
        if inner
            .assignments
            .iter()
            .any(|a| a.company_id == new_assignment.company_id)
        {
            return Err(
                DatabaseError::UniqueViolation(new_assignment.company_id.clone()).into(),
            );
        }
        inner.cursor_version += 1;
        inner.cursor_last = Some(cursor.rep_id);
        let assignment = CompanyAssignment {
            id: format!("assignment-{}", inner.cursor_version),
            company_id: new_assignment.company_id,
            sales_rep_id: new_assignment.sales_rep_id,
            seq: inner.cursor_version,
            assigned_at: now(),
        };
        inner.assignments.push(assignment.clone());
        Ok(assignment)
    }
}

/// Runs N sequential assigns over a pool of the given rep ids and returns the
/// picked rep id per call, in order.
fn run_rotation(rep_ids: &[String], calls: usize) -> Vec<String> {
    let mem = InMemory::with_pool(rep_ids);
    let service = AssignmentService::new(
        Arc::new(mem.clone()),
        Arc::new(mem.clone()),
        Arc::new(mem.clone()),
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("tokio runtime");

    let mut picked = Vec::with_capacity(calls);
    for i in 0..calls {
        let company_id = format!("company-{i:03}");
        mem.add_company(&company_id);
        let assignment = rt
            .block_on(service.assign(&company_id))
            .expect("assignment should succeed");
        picked.push(assignment.sales_rep_id);
    }
    picked
}

/// Generates a pool of distinct rep ids whose sorted order is the insertion
/// order.
fn arb_pool() -> impl Strategy<Value = Vec<String>> {
    (1usize..=6).prop_map(|k| (0..k).map(|i| format!("rep-{i:02}")).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each representative receives between floor(N/K) and ceil(N/K)
    /// assignments over any sequential run.
    #[test]
    fn prop_rotation_is_fair(
        rep_ids in arb_pool(),
        calls in 0usize..40,
    ) {
        let picked = run_rotation(&rep_ids, calls);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for rep_id in &picked {
            *counts.entry(rep_id.as_str()).or_insert(0) += 1;
        }

        let k = rep_ids.len();
        let floor = calls / k;
        let ceil = calls.div_ceil(k);
        for rep_id in &rep_ids {
            let count = counts.get(rep_id.as_str()).copied().unwrap_or(0);
            prop_assert!(
                (floor..=ceil).contains(&count),
                "rep {} received {} assignments, expected between {} and {}",
                rep_id, count, floor, ceil
            );
        }
    }

    /// The assignment sequence is a pure rotation starting at the first
    /// representative in stable id order.
    #[test]
    fn prop_sequence_is_a_fixed_rotation(
        rep_ids in arb_pool(),
        calls in 0usize..40,
    ) {
        let picked = run_rotation(&rep_ids, calls);

        let mut sorted = rep_ids.clone();
        sorted.sort();
        for (i, rep_id) in picked.iter().enumerate() {
            prop_assert_eq!(rep_id, &sorted[i % sorted.len()]);
        }
    }

    /// Re-invoking the balancer for every already-assigned company never
    /// creates a second record.
    #[test]
    fn prop_reassignment_is_idempotent(
        rep_ids in arb_pool(),
        calls in 1usize..20,
    ) {
        let mem = InMemory::with_pool(&rep_ids);
        let service = AssignmentService::new(
            Arc::new(mem.clone()),
            Arc::new(mem.clone()),
            Arc::new(mem.clone()),
        );
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime");

        for i in 0..calls {
            let company_id = format!("company-{i:03}");
            mem.add_company(&company_id);
            rt.block_on(service.assign(&company_id)).expect("first assign");
        }
        for i in 0..calls {
            let company_id = format!("company-{i:03}");
            let err = rt.block_on(service.assign(&company_id)).unwrap_err();
            let is_already_assigned = matches!(
                err,
                freightline_core::Error::Assignment(AssignmentError::AlreadyAssigned { .. })
            );
            prop_assert!(is_already_assigned);
        }

        prop_assert_eq!(mem.inner.lock().unwrap().assignments.len(), calls);
    }
}

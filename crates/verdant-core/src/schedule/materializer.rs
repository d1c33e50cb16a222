//! Creates the job for one plan occurrence, or notices it already exists.

use jiff::Timestamp;

use super::GenerationStore;
use crate::{
    error::{OfficeError, Result},
    models::{Job, JobStatus, NewJob, ServicePlan},
};

/// What happened to a single occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialization {
    /// A new job was stored
    Created(Job),
    /// A job for this plan and start was already stored
    AlreadyPresent,
}

/// The job a plan produces for the given start instant.
pub fn job_for_occurrence(plan: &ServicePlan, scheduled_start: Timestamp) -> NewJob {
    NewJob {
        client_id: plan.client_id,
        address_id: plan.address_id,
        service_plan_id: Some(plan.id),
        title: plan.title.clone(),
        notes: plan.notes.clone(),
        status: JobStatus::Scheduled,
        scheduled_start: Some(scheduled_start),
        scheduled_end: None,
        estimated_price_cents: plan.price_per_visit_cents,
    }
}

/// Store the job for one occurrence.
///
/// # Errors
///
/// Any store failure other than the duplicate signal is returned unchanged.
pub fn materialize<S>(
    store: &mut S,
    plan: &ServicePlan,
    scheduled_start: Timestamp,
) -> Result<Materialization>
where
    S: GenerationStore + ?Sized,
{
    match store.insert_job(&job_for_occurrence(plan, scheduled_start)) {
        Ok(job) => Ok(Materialization::Created(job)),
        Err(OfficeError::DuplicateJob { .. }) => Ok(Materialization::AlreadyPresent),
        Err(e) => Err(e),
    }
}

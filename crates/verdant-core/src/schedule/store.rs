//! The persistence boundary of the job generation engine.

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{Job, NewJob, ServicePlan},
};

/// Storage operations the orchestrator and materializer depend on.
///
/// [`Database`](crate::db::Database) is the production implementation.
pub trait GenerationStore {
    /// Whether a plan with this id exists, in any status.
    fn plan_exists(&self, id: u64) -> Result<bool>;

    /// Plans eligible for generation, optionally narrowed to one id.
    fn active_plans(&self, only: Option<u64>) -> Result<Vec<ServicePlan>>;

    /// Insert a job. A job already present for the same plan and scheduled
    /// start must be reported as `OfficeError::DuplicateJob`.
    fn insert_job(&mut self, job: &NewJob) -> Result<Job>;

    /// Move the plan's watermark forward to `until`; never backwards.
    fn advance_watermark(&mut self, plan_id: u64, until: Timestamp) -> Result<()>;
}

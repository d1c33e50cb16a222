//! SQLite implementation of the generation engine's store.

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{Job, NewJob, PlanFilter, ServicePlan},
    schedule::GenerationStore,
};

impl GenerationStore for super::Database {
    fn plan_exists(&self, id: u64) -> Result<bool> {
        super::Database::plan_exists(self, id)
    }

    fn active_plans(&self, only: Option<u64>) -> Result<Vec<ServicePlan>> {
        self.list_plans(&PlanFilter::active(only))
    }

    fn insert_job(&mut self, job: &NewJob) -> Result<Job> {
        super::Database::insert_job(self, job)
    }

    fn advance_watermark(&mut self, plan_id: u64, until: Timestamp) -> Result<()> {
        super::Database::advance_watermark(self, plan_id, until)
    }
}

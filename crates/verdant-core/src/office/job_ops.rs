//! Job operations for the Office.

use super::Office;
use crate::{
    error::{OfficeError, Result},
    models::{Job, JobFilter},
    params::{CreateJob, Id, ListJobs, SetJobStatus, UpdateJob},
};

impl Office {
    /// Enters a one-off job by hand. It is scheduled if it has a start and a
    /// draft otherwise.
    pub async fn add_job(&self, params: &CreateJob) -> Result<Job> {
        let params = params.clone();
        self.with_database(move |db| db.create_job(&params)).await
    }

    /// Retrieves a job by its ID.
    pub async fn show_job(&self, params: &Id) -> Result<Option<Job>> {
        let id = params.id;
        self.with_database(move |db| db.get_job(id)).await
    }

    /// Lists jobs in schedule order.
    pub async fn list_jobs(&self, params: &ListJobs) -> Result<Vec<Job>> {
        let filter = JobFilter::from(params);
        self.with_database(move |db| db.list_jobs(&filter)).await
    }

    /// Edits a job and returns it as it was before alongside the stored
    /// result.
    ///
    /// # Errors
    ///
    /// * `OfficeError::JobNotFound` - the job doesn't exist
    /// * `OfficeError::DuplicateJob` - a generated job was moved onto a start
    ///   its plan already has a job for
    pub async fn update_job(&self, params: &UpdateJob) -> Result<(Job, Job)> {
        let params = params.clone();
        self.with_database(move |db| {
            let before = db
                .get_job(params.id)?
                .ok_or(OfficeError::JobNotFound { id: params.id })?;
            let after = db
                .update_job(&params)?
                .ok_or(OfficeError::JobNotFound { id: params.id })?;
            Ok((before, after))
        })
        .await
    }

    /// Moves a job to another status.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::JobNotFound` if the job doesn't exist
    pub async fn set_job_status(&self, params: &SetJobStatus) -> Result<Job> {
        let SetJobStatus { id, status } = *params;
        self.with_database(move |db| {
            db.set_job_status(id, status)?
                .ok_or(OfficeError::JobNotFound { id })
        })
        .await
    }
}

//! Job generation trigger for the Office.

use jiff::Timestamp;

use super::Office;
use crate::{error::Result, models::GenerationSummary, params::GenerateJobs, schedule};

impl Office {
    /// Generates upcoming jobs from active service plans, as of now.
    ///
    /// Safe to call repeatedly: occurrences that already have a job are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::PlanNotFound` if the request names an unknown plan
    pub async fn generate_upcoming_jobs(&self, params: &GenerateJobs) -> Result<GenerationSummary> {
        self.generate_upcoming_jobs_at(params, Timestamp::now()).await
    }

    /// Runs a generation request given as JSON, e.g. `{"planId": 3}`.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::Serialization` if the body is not a valid request
    pub async fn generate_upcoming_jobs_from_json(&self, body: &str) -> Result<GenerationSummary> {
        let request: GenerateJobs = serde_json::from_str(body)?;
        self.generate_upcoming_jobs(&request).await
    }

    /// Same as [`Office::generate_upcoming_jobs`] with an explicit clock.
    pub async fn generate_upcoming_jobs_at(
        &self,
        params: &GenerateJobs,
        now: Timestamp,
    ) -> Result<GenerationSummary> {
        let request = params.clone();
        self.with_database(move |db| schedule::generate_upcoming_jobs(db, &request, now))
            .await
    }
}

//! Office operations that return display-ready wrapper types.

use super::Office;
use crate::{
    display::{Clients, CreateResult, Jobs, LocalDateTime, ServicePlans, UpdateResult},
    error::{OfficeError, Result},
    models::{Job, ServicePlan},
    params::{
        CreateJob, CreateServicePlan, Id, ListJobs, ListPlans, SetJobStatus, SetPlanStatus,
        UpdateJob, UpdateServicePlan,
    },
};

impl Office {
    /// Creates a plan and wraps it for confirmation output.
    pub async fn create_plan_result(
        &self,
        params: &CreateServicePlan,
    ) -> Result<CreateResult<ServicePlan>> {
        self.create_plan(params).await.map(CreateResult::new)
    }

    /// Updates a plan and reports which fields changed.
    ///
    /// ```rust,no_run
    /// # use verdant_core::{params::UpdateServicePlan, models::Frequency, OfficeBuilder};
    /// # async {
    /// let office = OfficeBuilder::new().build().await?;
    /// let params = UpdateServicePlan {
    ///     id: 1,
    ///     address_id: None,
    ///     title: "Biweekly mow".to_string(),
    ///     notes: None,
    ///     frequency: Frequency::Biweekly,
    ///     status: None,
    ///     start_date: jiff::civil::date(2025, 3, 5),
    ///     end_date: None,
    ///     day_of_week: Some(1),
    ///     day_of_month: None,
    ///     price_per_visit: None,
    /// };
    /// let result = office.update_plan_result(&params).await?;
    /// println!("{result}");
    /// # Result::<(), verdant_core::OfficeError>::Ok(())
    /// # };
    /// ```
    pub async fn update_plan_result(
        &self,
        params: &UpdateServicePlan,
    ) -> Result<UpdateResult<ServicePlan>> {
        let (before, after) = self.update_plan(params).await?;
        let changes = plan_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Moves a plan to a new status and reports the transition.
    pub async fn set_plan_status_result(
        &self,
        params: &SetPlanStatus,
    ) -> Result<UpdateResult<ServicePlan>> {
        let before = self
            .show_plan(&Id { id: params.id })
            .await?
            .ok_or(OfficeError::PlanNotFound { id: params.id })?;
        let after = self.set_plan_status(params).await?;
        let changes = plan_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Lists plans wrapped for display.
    pub async fn list_plans_display(&self, params: &ListPlans) -> Result<ServicePlans> {
        self.list_plans(params).await.map(ServicePlans)
    }

    /// Adds a manual job and wraps it for confirmation output.
    pub async fn add_job_result(&self, params: &CreateJob) -> Result<CreateResult<Job>> {
        self.add_job(params).await.map(CreateResult::new)
    }

    /// Moves a job to a new status and reports the transition.
    pub async fn set_job_status_result(&self, params: &SetJobStatus) -> Result<UpdateResult<Job>> {
        let before = self
            .show_job(&Id { id: params.id })
            .await?
            .ok_or(OfficeError::JobNotFound { id: params.id })?;
        let after = self.set_job_status(params).await?;
        let changes = job_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Edits a job and reports which fields changed.
    pub async fn update_job_result(&self, params: &UpdateJob) -> Result<UpdateResult<Job>> {
        let (before, after) = self.update_job(params).await?;
        let changes = job_changes(&before, &after);
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Lists jobs wrapped for display.
    pub async fn list_jobs_display(&self, params: &ListJobs) -> Result<Jobs> {
        self.list_jobs(params).await.map(Jobs)
    }

    /// Lists clients wrapped for display.
    pub async fn list_clients_display(&self) -> Result<Clients> {
        self.list_clients().await.map(Clients)
    }
}

/// Human-readable list of the edits between two versions of a plan.
pub fn plan_changes(before: &ServicePlan, after: &ServicePlan) -> Vec<String> {
    let mut changes = Vec::new();

    if before.title != after.title {
        changes.push(format!("Title: {} → {}", before.title, after.title));
    }
    if before.notes != after.notes {
        changes.push("Updated notes".to_string());
    }
    if before.address_id != after.address_id {
        changes.push("Changed service address".to_string());
    }
    if before.frequency != after.frequency {
        changes.push(format!("Frequency: {} → {}", before.frequency, after.frequency));
    }
    if before.status != after.status {
        changes.push(format!("Status: {} → {}", before.status, after.status));
    }
    if before.start_date != after.start_date {
        changes.push(format!("Start date: {} → {}", before.start_date, after.start_date));
    }
    if before.end_date != after.end_date {
        changes.push(match after.end_date {
            Some(end) => format!("End date set to {end}"),
            None => "Removed end date".to_string(),
        });
    }
    if before.day_of_week != after.day_of_week || before.day_of_month != after.day_of_month {
        changes.push("Changed visit day".to_string());
    }
    if before.price_per_visit_cents != after.price_per_visit_cents {
        changes.push(match after.price_per_visit_cents {
            Some(price) => format!("Price per visit set to {price}"),
            None => "Removed price per visit".to_string(),
        });
    }

    changes
}

/// Human-readable list of the edits between two versions of a job.
pub fn job_changes(before: &Job, after: &Job) -> Vec<String> {
    let mut changes = Vec::new();

    if before.title != after.title {
        changes.push(format!("Title: {} → {}", before.title, after.title));
    }
    if before.notes != after.notes {
        changes.push("Updated notes".to_string());
    }
    if before.address_id != after.address_id {
        changes.push("Changed service address".to_string());
    }
    if before.status != after.status {
        changes.push(format!("Status: {} → {}", before.status, after.status));
    }
    if before.scheduled_start != after.scheduled_start {
        changes.push(match &after.scheduled_start {
            Some(start) => format!("Rescheduled to {}", LocalDateTime(start)),
            None => "Removed from the schedule".to_string(),
        });
    }
    if before.scheduled_end != after.scheduled_end {
        changes.push(match &after.scheduled_end {
            Some(end) => format!("End set to {}", LocalDateTime(end)),
            None => "Removed end time".to_string(),
        });
    }
    if before.estimated_price_cents != after.estimated_price_cents {
        changes.push(match after.estimated_price_cents {
            Some(price) => format!("Estimate set to {price}"),
            None => "Removed estimate".to_string(),
        });
    }
    if before.actual_price_cents != after.actual_price_cents {
        changes.push(match after.actual_price_cents {
            Some(price) => format!("Charged {price}"),
            None => "Removed charged amount".to_string(),
        });
    }

    changes
}

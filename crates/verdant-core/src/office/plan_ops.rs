//! Service plan operations for the Office.

use super::Office;
use crate::{
    error::{OfficeError, Result},
    models::{PlanFilter, ServicePlan},
    params::{CreateServicePlan, Id, ListPlans, SetPlanStatus, UpdateServicePlan},
};

impl Office {
    /// Creates a service plan. New plans are active unless the params say
    /// otherwise.
    pub async fn create_plan(&self, params: &CreateServicePlan) -> Result<ServicePlan> {
        let params = params.clone();
        self.with_database(move |db| db.create_plan(&params)).await
    }

    /// Retrieves a plan by its ID.
    pub async fn show_plan(&self, params: &Id) -> Result<Option<ServicePlan>> {
        let id = params.id;
        self.with_database(move |db| db.get_plan(id)).await
    }

    /// Lists plans, optionally narrowed by status and client.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<ServicePlan>> {
        let filter = PlanFilter::from(params);
        self.with_database(move |db| db.list_plans(&filter)).await
    }

    /// Replaces a plan's editable fields and returns the plan as it was
    /// before alongside the stored result.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::PlanNotFound` if the plan doesn't exist
    pub async fn update_plan(
        &self,
        params: &UpdateServicePlan,
    ) -> Result<(ServicePlan, ServicePlan)> {
        let params = params.clone();
        self.with_database(move |db| {
            let before = db
                .get_plan(params.id)?
                .ok_or(OfficeError::PlanNotFound { id: params.id })?;
            let after = db
                .update_plan(&params)?
                .ok_or(OfficeError::PlanNotFound { id: params.id })?;
            Ok((before, after))
        })
        .await
    }

    /// Moves a plan to another status.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::PlanNotFound` if the plan doesn't exist
    pub async fn set_plan_status(&self, params: &SetPlanStatus) -> Result<ServicePlan> {
        let SetPlanStatus { id, status } = *params;
        self.with_database(move |db| {
            db.set_plan_status(id, status)?
                .ok_or(OfficeError::PlanNotFound { id })
        })
        .await
    }
}

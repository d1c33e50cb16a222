//! Filter types for querying service plans and jobs.

use jiff::Timestamp;

use super::{JobStatus, PlanStatus};
use crate::params::{ListJobs, ListPlans};

/// Filter options for querying service plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Only plans with this status
    pub status: Option<PlanStatus>,

    /// Only plans belonging to this client
    pub client_id: Option<u64>,

    /// Only this plan
    pub id: Option<u64>,
}

impl PlanFilter {
    /// Filter matching the plans eligible for job generation, optionally
    /// narrowed to a single plan.
    ///
    /// ```rust
    /// use verdant_core::models::{PlanFilter, PlanStatus};
    ///
    /// let filter = PlanFilter::active(Some(7));
    /// assert_eq!(filter.status, Some(PlanStatus::Active));
    /// assert_eq!(filter.id, Some(7));
    /// ```
    pub fn active(only: Option<u64>) -> Self {
        Self {
            status: Some(PlanStatus::Active),
            id: only,
            ..Default::default()
        }
    }
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        Self {
            status: params.status,
            client_id: params.client_id,
            id: None,
        }
    }
}

/// Filter options for querying jobs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Only jobs generated from this plan
    pub service_plan_id: Option<u64>,

    /// Only jobs for this client
    pub client_id: Option<u64>,

    /// Only jobs with this status
    pub status: Option<JobStatus>,

    /// Only jobs scheduled at or after this instant
    pub scheduled_from: Option<Timestamp>,
}

impl From<&ListJobs> for JobFilter {
    fn from(params: &ListJobs) -> Self {
        Self {
            service_plan_id: params.plan_id,
            client_id: params.client_id,
            status: params.status,
            scheduled_from: params.from,
        }
    }
}

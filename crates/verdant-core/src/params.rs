//! Parameter structures for office operations
//!
//! These structures are shared by every interface that drives the core (the
//! CLI today) and carry no framework-specific derives. Interface layers
//! define their own argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Office      │
//! │  (clap derives) │───▶│ (serde only)    │───▶│  (async facade) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that depends only on the values themselves (blank titles,
//! out-of-range weekdays) lives here, next to the fields it checks.
//! Validation that needs the database (does the client exist?) happens in
//! the database layer inside the same transaction as the write.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    error::{OfficeError, Result},
    models::{plan, Cents, Frequency, JobStatus, PlanStatus},
};

/// Horizon used when a generation request does not name one.
pub const DEFAULT_DAYS_AHEAD: u32 = 14;

/// Smallest horizon a generation run will use.
pub const MIN_DAYS_AHEAD: u32 = 1;

/// Largest horizon a generation run will use.
pub const MAX_DAYS_AHEAD: u32 = 60;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClient {
    /// Client name (required)
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CreateClient {
    /// Reject a blank client name.
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, "Client name is required.")
    }
}

/// Parameters for adding a service address to a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddAddress {
    pub client_id: u64,
    pub label: Option<String>,
    /// Street address (required)
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub gate_code: Option<String>,
    /// Make this the client's primary address, demoting any other
    #[serde(default)]
    pub is_primary: bool,
}

impl AddAddress {
    /// Reject a blank street address.
    pub fn validate(&self) -> Result<()> {
        require_text("address", &self.address, "Address is required.")
    }
}

/// Parameters for creating a service plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServicePlan {
    pub client_id: u64,
    pub address_id: Option<u64>,
    /// Title copied onto generated jobs (required)
    pub title: String,
    pub notes: Option<String>,
    pub frequency: Frequency,
    /// Defaults to active
    pub status: Option<PlanStatus>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: Option<u8>,
    /// 1..31
    pub day_of_month: Option<u8>,
    pub price_per_visit: Option<Cents>,
}

impl CreateServicePlan {
    /// Check the fields that can be checked without the database.
    ///
    /// # Errors
    ///
    /// * `OfficeError::InvalidInput` - blank title, an end date before the
    ///   start date, out-of-range weekday or day of month, or a negative price
    pub fn validate(&self) -> Result<()> {
        validate_plan_fields(
            &self.title,
            self.start_date,
            self.end_date,
            self.day_of_week,
            self.day_of_month,
            self.price_per_visit,
        )
    }
}

/// Parameters for editing a service plan. Every editable field is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServicePlan {
    pub id: u64,
    pub address_id: Option<u64>,
    pub title: String,
    pub notes: Option<String>,
    pub frequency: Frequency,
    /// Keeps the current status when not given
    pub status: Option<PlanStatus>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub day_of_week: Option<u8>,
    pub day_of_month: Option<u8>,
    pub price_per_visit: Option<Cents>,
}

impl UpdateServicePlan {
    /// Same checks as [`CreateServicePlan::validate`].
    pub fn validate(&self) -> Result<()> {
        validate_plan_fields(
            &self.title,
            self.start_date,
            self.end_date,
            self.day_of_week,
            self.day_of_month,
            self.price_per_visit,
        )
    }
}

/// Parameters for moving a plan between active, paused and canceled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPlanStatus {
    pub id: u64,
    pub status: PlanStatus,
}

/// Parameters for listing service plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans with this status
    pub status: Option<PlanStatus>,
    /// Only plans for this client
    pub client_id: Option<u64>,
}

/// Parameters for entering a job by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateJob {
    pub client_id: u64,
    pub address_id: Option<u64>,
    /// Title of the job (required)
    pub title: String,
    pub notes: Option<String>,
    /// A job without a start is saved as a draft
    pub scheduled_start: Option<Timestamp>,
    pub scheduled_end: Option<Timestamp>,
    pub estimated_price: Option<Cents>,
}

impl CreateJob {
    /// Reject a blank title or an end before the start.
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title, "Job title is required.")?;
        validate_schedule(self.scheduled_start, self.scheduled_end)?;
        validate_price("estimated_price", self.estimated_price)
    }

    /// Jobs with a start go straight onto the calendar.
    pub fn initial_status(&self) -> JobStatus {
        if self.scheduled_start.is_some() {
            JobStatus::Scheduled
        } else {
            JobStatus::Draft
        }
    }
}

/// Parameters for editing a job. Every editable field is replaced.
///
/// Moving a generated job onto a start its plan already has a job for is
/// rejected as a duplicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    pub id: u64,
    pub address_id: Option<u64>,
    pub title: String,
    pub notes: Option<String>,
    /// Keeps the current status when not given
    pub status: Option<JobStatus>,
    pub scheduled_start: Option<Timestamp>,
    pub scheduled_end: Option<Timestamp>,
    pub estimated_price: Option<Cents>,
    /// What the client was actually charged
    pub actual_price: Option<Cents>,
}

impl UpdateJob {
    /// Same checks as [`CreateJob::validate`], plus the charged amount.
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title, "Job title is required.")?;
        validate_schedule(self.scheduled_start, self.scheduled_end)?;
        validate_price("estimated_price", self.estimated_price)?;
        validate_price("actual_price", self.actual_price)
    }
}

/// Parameters for listing jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListJobs {
    /// Only jobs generated from this plan
    pub plan_id: Option<u64>,
    /// Only jobs for this client
    pub client_id: Option<u64>,
    /// Only jobs with this status
    pub status: Option<JobStatus>,
    /// Only jobs scheduled at or after this instant
    pub from: Option<Timestamp>,
}

/// Parameters for changing a job's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetJobStatus {
    pub id: u64,
    pub status: JobStatus,
}

/// A request to generate upcoming jobs from recurring plans.
///
/// Serialized as `{ "planId": 3, "daysAhead": 14 }`; both fields may be
/// omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJobs {
    /// Restrict the run to this plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,
    /// How far ahead of now to generate, clamped to 1..=60 days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_ahead: Option<i64>,
}

impl GenerateJobs {
    /// The horizon in days this request resolves to.
    ///
    /// ```rust
    /// use verdant_core::params::GenerateJobs;
    ///
    /// assert_eq!(GenerateJobs::default().horizon_days(), 14);
    /// let far = GenerateJobs { plan_id: None, days_ahead: Some(200) };
    /// assert_eq!(far.horizon_days(), 60);
    /// let none = GenerateJobs { plan_id: None, days_ahead: Some(0) };
    /// assert_eq!(none.horizon_days(), 1);
    /// ```
    pub fn horizon_days(&self) -> u32 {
        match self.days_ahead {
            None => DEFAULT_DAYS_AHEAD,
            Some(days) => days.clamp(i64::from(MIN_DAYS_AHEAD), i64::from(MAX_DAYS_AHEAD)) as u32,
        }
    }
}

fn require_text(field: &str, value: &str, reason: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(OfficeError::invalid_input(field).with_reason(reason))
    } else {
        Ok(())
    }
}

fn validate_schedule(start: Option<Timestamp>, end: Option<Timestamp>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(OfficeError::invalid_input("scheduled_end")
            .with_reason("Scheduled end must not be before scheduled start.")),
        _ => Ok(()),
    }
}

fn validate_price(field: &str, price: Option<Cents>) -> Result<()> {
    match price {
        Some(Cents(cents)) if cents < 0 => {
            Err(OfficeError::invalid_input(field).with_reason("Price must not be negative."))
        }
        _ => Ok(()),
    }
}

fn validate_plan_fields(
    title: &str,
    start_date: Date,
    end_date: Option<Date>,
    day_of_week: Option<u8>,
    day_of_month: Option<u8>,
    price_per_visit: Option<Cents>,
) -> Result<()> {
    require_text("title", title, "Title is required.")?;
    if end_date.is_some_and(|end| end < start_date) {
        return Err(OfficeError::invalid_input("end_date")
            .with_reason("End date must not be before start date."));
    }
    if let Some(day) = day_of_week {
        plan::weekday_from_index(day)?;
    }
    if let Some(day) = day_of_month {
        plan::validate_day_of_month(day)?;
    }
    validate_price("price_per_visit", price_per_visit)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn weekly_plan() -> CreateServicePlan {
        CreateServicePlan {
            client_id: 1,
            address_id: None,
            title: "Weekly mow".to_string(),
            notes: None,
            frequency: Frequency::Weekly,
            status: None,
            start_date: date(2025, 3, 5),
            end_date: None,
            day_of_week: Some(1),
            day_of_month: None,
            price_per_visit: Some(Cents(4500)),
        }
    }

    #[test]
    fn test_horizon_clamping() {
        let horizon = |days| {
            GenerateJobs {
                plan_id: None,
                days_ahead: days,
            }
            .horizon_days()
        };
        assert_eq!(horizon(None), 14);
        assert_eq!(horizon(Some(200)), 60);
        assert_eq!(horizon(Some(60)), 60);
        assert_eq!(horizon(Some(7)), 7);
        assert_eq!(horizon(Some(0)), 1);
        assert_eq!(horizon(Some(-30)), 1);
    }

    #[test]
    fn test_generate_jobs_wire_format() {
        let request: GenerateJobs =
            serde_json::from_str(r#"{"planId": 4, "daysAhead": 30}"#).unwrap();
        assert_eq!(request.plan_id, Some(4));
        assert_eq!(request.days_ahead, Some(30));

        let empty: GenerateJobs = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GenerateJobs::default());

        assert!(serde_json::from_str::<GenerateJobs>(r#"{"daysAhead": "soon"}"#).is_err());
    }

    #[test]
    fn test_plan_validation() {
        assert!(weekly_plan().validate().is_ok());

        let blank = CreateServicePlan {
            title: "   ".to_string(),
            ..weekly_plan()
        };
        assert!(matches!(
            blank.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "title"
        ));

        let bad_weekday = CreateServicePlan {
            day_of_week: Some(7),
            ..weekly_plan()
        };
        assert!(matches!(
            bad_weekday.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "day_of_week"
        ));

        let bad_day = CreateServicePlan {
            frequency: Frequency::Monthly,
            day_of_month: Some(0),
            ..weekly_plan()
        };
        assert!(matches!(
            bad_day.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "day_of_month"
        ));

        let negative = CreateServicePlan {
            price_per_visit: Some(Cents(-1)),
            ..weekly_plan()
        };
        assert!(negative.validate().is_err());

        let ends_before_start = CreateServicePlan {
            end_date: Some(date(2025, 3, 4)),
            ..weekly_plan()
        };
        assert!(matches!(
            ends_before_start.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "end_date"
        ));

        let single_day = CreateServicePlan {
            end_date: Some(date(2025, 3, 5)),
            ..weekly_plan()
        };
        assert!(single_day.validate().is_ok());
    }

    #[test]
    fn test_manual_job_status_and_validation() {
        let draft = CreateJob {
            client_id: 1,
            title: "Spring cleanup".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.initial_status(), JobStatus::Draft);
        assert!(draft.validate().is_ok());

        let start: Timestamp = "2025-04-01T13:00:00Z".parse().unwrap();
        let scheduled = CreateJob {
            scheduled_start: Some(start),
            scheduled_end: Some("2025-04-01T12:00:00Z".parse().unwrap()),
            ..draft
        };
        assert_eq!(scheduled.initial_status(), JobStatus::Scheduled);
        assert!(scheduled.validate().is_err());
    }

    #[test]
    fn test_job_update_validation() {
        let update = UpdateJob {
            id: 3,
            title: "Weekly mow".to_string(),
            scheduled_start: Some("2025-03-10T14:00:00Z".parse().unwrap()),
            estimated_price: Some(Cents(4500)),
            actual_price: Some(Cents(5000)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let refund = UpdateJob {
            actual_price: Some(Cents(-100)),
            ..update.clone()
        };
        assert!(matches!(
            refund.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "actual_price"
        ));

        let backwards = UpdateJob {
            scheduled_end: Some("2025-03-10T13:00:00Z".parse().unwrap()),
            ..update.clone()
        };
        assert!(matches!(
            backwards.validate(),
            Err(OfficeError::InvalidInput { ref field, .. }) if field == "scheduled_end"
        ));

        let untitled = UpdateJob {
            title: String::new(),
            ..update
        };
        assert!(untitled.validate().is_err());
    }
}

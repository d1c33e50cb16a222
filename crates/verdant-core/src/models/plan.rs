//! Service plan model definition and related functionality.

use jiff::{civil::Date, civil::Weekday, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Cents, Frequency, PlanStatus};
use crate::{
    error::{OfficeError, Result},
    schedule::Cadence,
};

/// A recurring service commitment for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicePlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Client the plan belongs to
    pub client_id: u64,

    /// Service address, if the client has more than one
    pub address_id: Option<u64>,

    /// Title copied onto every generated job
    pub title: String,

    /// Notes copied onto every generated job
    pub notes: Option<String>,

    /// How often a visit is due
    pub frequency: Frequency,

    /// Only active plans generate jobs
    #[serde(default)]
    pub status: PlanStatus,

    /// First day the plan is in effect
    pub start_date: Date,

    /// Last day a visit may be scheduled on
    pub end_date: Option<Date>,

    /// 0 = Sunday .. 6 = Saturday, used by weekly and biweekly plans
    pub day_of_week: Option<u8>,

    /// 1..31, used by monthly plans
    pub day_of_month: Option<u8>,

    /// Price per visit, copied onto generated jobs as the estimate
    pub price_per_visit_cents: Option<Cents>,

    /// End of the window already materialized into jobs
    pub last_generated_at: Option<Timestamp>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl ServicePlan {
    /// Build the cadence rule the occurrence calculator runs on.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::InvalidInput` when a stored day-of-week or
    /// day-of-month is out of range.
    pub fn cadence(&self) -> Result<Cadence> {
        let day_of_week = self.day_of_week.map(weekday_from_index).transpose()?;
        let day_of_month = self
            .day_of_month
            .map(validate_day_of_month)
            .transpose()?;

        Ok(Cadence {
            frequency: self.frequency,
            start_date: self.start_date,
            day_of_week,
            day_of_month,
        })
    }

    /// Whether the orchestrator may generate jobs for this plan.
    pub fn is_eligible(&self) -> bool {
        self.status == PlanStatus::Active
    }
}

/// Convert a Sunday-zero weekday index (0..=6) into a [`Weekday`].
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    i8::try_from(index)
        .ok()
        .and_then(|i| Weekday::from_sunday_zero_offset(i).ok())
        .ok_or_else(|| {
            OfficeError::invalid_input("day_of_week")
                .with_reason(format!("Day of week must be 0 (Sunday) to 6 (Saturday), got {index}"))
        })
}

/// Check a day-of-month (1..=31).
pub fn validate_day_of_month(day: u8) -> Result<i8> {
    if (1..=31).contains(&day) {
        Ok(day as i8)
    } else {
        Err(OfficeError::invalid_input("day_of_month")
            .with_reason(format!("Day of month must be between 1 and 31, got {day}")))
    }
}

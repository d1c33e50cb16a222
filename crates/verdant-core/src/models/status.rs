//! Status and cadence enumerations for service plans and jobs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of service plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// Plan is running and eligible for job generation
    #[default]
    Active,

    /// Plan is on hold; no jobs are generated and the watermark stays put
    Paused,

    /// Plan has ended
    Canceled,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(PlanStatus::Active),
            "PAUSED" => Ok(PlanStatus::Paused),
            "CANCELED" | "CANCELLED" => Ok(PlanStatus::Canceled),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "ACTIVE",
            PlanStatus::Paused => "PAUSED",
            PlanStatus::Canceled => "CANCELED",
        }
    }
}

/// Type-safe enumeration of job statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Job exists but has no scheduled start yet
    Draft,

    /// Job is on the calendar
    Scheduled,

    /// Crew is on site
    InProgress,

    /// Work finished
    Done,

    /// An invoice has been raised for the job
    Invoiced,

    /// The invoice has been paid
    Paid,

    /// Job will not happen
    Canceled,
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "DRAFT" => Ok(JobStatus::Draft),
            "SCHEDULED" => Ok(JobStatus::Scheduled),
            "IN_PROGRESS" | "INPROGRESS" => Ok(JobStatus::InProgress),
            "DONE" => Ok(JobStatus::Done),
            "INVOICED" => Ok(JobStatus::Invoiced),
            "PAID" => Ok(JobStatus::Paid),
            "CANCELED" | "CANCELLED" => Ok(JobStatus::Canceled),
            _ => Err(format!("Invalid job status: {s}")),
        }
    }
}

impl JobStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "DRAFT",
            JobStatus::Scheduled => "SCHEDULED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Done => "DONE",
            JobStatus::Invoiced => "INVOICED",
            JobStatus::Paid => "PAID",
            JobStatus::Canceled => "CANCELED",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use verdant_core::models::JobStatus;
    ///
    /// assert_eq!(JobStatus::Scheduled.with_icon(), "○ Scheduled");
    /// assert_eq!(JobStatus::Done.with_icon(), "✓ Done");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            JobStatus::Draft => "… Draft",
            JobStatus::Scheduled => "○ Scheduled",
            JobStatus::InProgress => "➤ In Progress",
            JobStatus::Done => "✓ Done",
            JobStatus::Invoiced => "✉ Invoiced",
            JobStatus::Paid => "$ Paid",
            JobStatus::Canceled => "✗ Canceled",
        }
    }
}

/// How often a service plan recurs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Every week on the same weekday
    Weekly,

    /// Every other week on the same weekday
    Biweekly,

    /// Once a month on the same day of the month
    Monthly,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WEEKLY" => Ok(Frequency::Weekly),
            "BIWEEKLY" => Ok(Frequency::Biweekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(format!("Invalid frequency: {s}")),
        }
    }
}

impl Frequency {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
        }
    }
}

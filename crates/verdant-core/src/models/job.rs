//! Job model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Cents, JobStatus};

/// A scheduled unit of work, either generated from a service plan or entered
/// by hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Unique identifier for the job
    pub id: u64,

    /// Client the work is for
    pub client_id: u64,

    /// Service address
    pub address_id: Option<u64>,

    /// Plan this job was generated from, if any
    pub service_plan_id: Option<u64>,

    /// Title of the job
    pub title: String,

    /// Crew notes
    pub notes: Option<String>,

    /// Current status of the job
    pub status: JobStatus,

    /// When the visit starts
    pub scheduled_start: Option<Timestamp>,

    /// When the visit is expected to end
    pub scheduled_end: Option<Timestamp>,

    /// Quoted price
    pub estimated_price_cents: Option<Cents>,

    /// Price actually charged
    pub actual_price_cents: Option<Cents>,

    /// Timestamp when the job was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the job was last modified (UTC)
    pub updated_at: Timestamp,
}

/// A job about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub client_id: u64,
    pub address_id: Option<u64>,
    pub service_plan_id: Option<u64>,
    pub title: String,
    pub notes: Option<String>,
    pub status: JobStatus,
    pub scheduled_start: Option<Timestamp>,
    pub scheduled_end: Option<Timestamp>,
    pub estimated_price_cents: Option<Cents>,
}

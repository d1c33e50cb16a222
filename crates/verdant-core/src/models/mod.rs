//! Data models for clients, service plans and jobs.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]; the types here only carry data and the small
//! amount of validation tied to a single record.
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use verdant_core::models::{Frequency, PlanStatus, ServicePlan};
//!
//! let plan = ServicePlan {
//!     id: 1,
//!     client_id: 1,
//!     address_id: None,
//!     title: "Weekly mow".to_string(),
//!     notes: None,
//!     frequency: Frequency::Weekly,
//!     status: PlanStatus::Active,
//!     start_date: date(2025, 3, 5),
//!     end_date: None,
//!     day_of_week: Some(1),
//!     day_of_month: None,
//!     price_per_visit_cents: None,
//!     last_generated_at: None,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//! assert!(plan.is_eligible());
//! assert!(plan.cadence().is_ok());
//! ```

pub mod client;
pub mod filters;
pub mod job;
pub mod money;
pub mod plan;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use client::{Address, Client};
pub use filters::{JobFilter, PlanFilter};
pub use job::{Job, NewJob};
pub use money::Cents;
pub use plan::ServicePlan;
pub use status::{Frequency, JobStatus, PlanStatus};
pub use summary::GenerationSummary;

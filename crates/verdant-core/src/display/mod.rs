//! Markdown formatting for records and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! This module adds the wrappers that give the same data a different shape
//! depending on context: a list of plans, a confirmation after a create, an
//! update with the fields that changed.
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers ([`ServicePlans`], [`Jobs`], [`Clients`])
//! - [`results`]: [`CreateResult`] and [`UpdateResult`]
//! - [`status`]: [`OperationStatus`] one-liners
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: `Display` for the domain models
//!
//! ```rust
//! use verdant_core::{display::OperationStatus, models::GenerationSummary};
//!
//! let summary = GenerationSummary { created_count: 3 };
//! assert_eq!(summary.to_string(), "Generated jobs. Created 3.\n");
//!
//! let status = OperationStatus::success("Plan 2 paused");
//! assert!(status.to_string().contains("Plan 2 paused"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Clients, Jobs, ServicePlans};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;

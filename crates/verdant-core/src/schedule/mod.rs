//! Recurring plan occurrence engine.
//!
//! Turns recurring service plans into scheduled jobs inside a rolling window.
//! A run can be repeated at any time: the store refuses a second job for the
//! same plan and start instant, and each plan keeps a watermark recording how
//! far ahead it has already been generated.
//!
//! ```text
//! orchestrator ──▶ occurrence ──▶ anchor ──▶ materializer ──▶ GenerationStore
//!  (per plan)      (dates)        (instant)   (create/skip)    (SQLite)
//! ```
//!
//! ## Submodules
//!
//! - [`occurrence`]: cadence rules and the dates they fall on
//! - [`anchor`]: local morning on a fixed business UTC offset
//! - [`materializer`]: one job per occurrence, duplicates skipped
//! - [`orchestrator`]: windows, watermarks and the run summary
//! - [`store`]: the persistence trait the engine is written against
//!
//! Nothing here reads the clock; callers pass `now` in.

pub mod anchor;
pub mod materializer;
pub mod occurrence;
pub mod orchestrator;
pub mod store;


pub use anchor::{business_offset, local_morning, LocalTime, BUSINESS_STANDARD_OFFSET_HOURS};
pub use materializer::{job_for_occurrence, materialize, Materialization};
pub use occurrence::{Cadence, DateWindow, Occurrences};
pub use orchestrator::{generate_for_plan, generate_upcoming_jobs, GenerationWindow};
pub use store::GenerationStore;

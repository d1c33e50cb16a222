//! Core library for the Verdant landscaping back office.
//!
//! Verdant keeps client records, recurring service plans and the jobs those
//! plans turn into. Its central piece is the job generation engine in
//! [`schedule`]: it expands each active plan's cadence over a rolling window,
//! schedules a job at local morning for every due date and can be re-run at
//! any time without creating duplicates.
//!
//! # Layers
//!
//! - [`models`] and [`params`]: plain data and input validation
//! - [`db`]: SQLite persistence via rusqlite
//! - [`schedule`]: the occurrence engine, written against
//!   [`schedule::GenerationStore`]
//! - [`office`]: the async facade used by the CLI
//! - [`display`]: markdown formatting of records and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use verdant_core::{
//!     models::Frequency,
//!     params::{CreateClient, CreateServicePlan, GenerateJobs},
//!     OfficeBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let office = OfficeBuilder::new()
//!     .with_database_path(Some("verdant.db"))
//!     .build()
//!     .await?;
//!
//! let client = office
//!     .add_client(&CreateClient {
//!         name: "Okafor".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! office
//!     .create_plan(&CreateServicePlan {
//!         client_id: client.id,
//!         address_id: None,
//!         title: "Weekly mow".to_string(),
//!         notes: None,
//!         frequency: Frequency::Weekly,
//!         status: None,
//!         start_date: date(2025, 3, 5),
//!         end_date: None,
//!         day_of_week: Some(1),
//!         day_of_month: None,
//!         price_per_visit: None,
//!     })
//!     .await?;
//!
//! let summary = office.generate_upcoming_jobs(&GenerateJobs::default()).await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod office;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{Clients, CreateResult, Jobs, OperationStatus, ServicePlans, UpdateResult};
pub use error::{OfficeError, Result};
pub use models::{
    Address, Cents, Client, Frequency, GenerationSummary, Job, JobStatus, PlanStatus, ServicePlan,
};
pub use office::{Office, OfficeBuilder};
pub use params::{
    AddAddress, CreateClient, CreateJob, CreateServicePlan, GenerateJobs, Id, ListJobs, ListPlans,
    SetJobStatus, SetPlanStatus, UpdateJob, UpdateServicePlan,
};

//! Command-line argument definitions using clap
//!
//! Argument structs here carry the clap derives and convert into the
//! interface-agnostic parameter types of `verdant_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Office
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{civil::Date, Timestamp};
use verdant_core::{
    models::{Cents, Frequency, Job, JobStatus, PlanStatus, ServicePlan},
    params::*,
};

/// Back office for a landscaping business
///
/// Keeps clients, their service addresses and recurring service plans, and
/// turns those plans into dated jobs on the calendar.
#[derive(Parser)]
#[command(version, about, name = "verdant")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/verdant/verdant.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage clients and their addresses
    #[command(alias = "c")]
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Manage recurring service plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage jobs
    #[command(alias = "j")]
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Generate upcoming jobs from active service plans
    #[command(alias = "g")]
    Generate(GenerateArgs),
}

// ============================================================================
// Clients
// ============================================================================

#[derive(ClapArgs)]
pub struct AddClientArgs {
    /// Client name
    pub name: String,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
}

impl From<AddClientArgs> for CreateClient {
    fn from(val: AddClientArgs) -> Self {
        CreateClient {
            name: val.name,
            email: val.email,
            phone: val.phone,
        }
    }
}

/// Add a service address to a client
///
/// Marking an address as primary demotes the client's previous primary
/// address.
#[derive(ClapArgs)]
pub struct AddAddressArgs {
    #[arg(help = "ID of the client the address belongs to")]
    pub client_id: u64,
    /// Street address
    pub address: String,
    #[arg(short, long, help = "Short label such as Home or Rental")]
    pub label: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    #[arg(long, help = "Gate or lockbox code for the crew")]
    pub gate_code: Option<String>,
    #[arg(long, help = "Make this the client's primary address")]
    pub primary: bool,
}

impl From<AddAddressArgs> for AddAddress {
    fn from(val: AddAddressArgs) -> Self {
        AddAddress {
            client_id: val.client_id,
            label: val.label,
            address: val.address,
            city: val.city,
            state: val.state,
            zip: val.zip,
            gate_code: val.gate_code,
            is_primary: val.primary,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier of the record to show")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ClientCommands {
    /// Add a client
    #[command(alias = "a")]
    Add(AddClientArgs),
    /// List all clients with their addresses
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single client
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Add a service address to a client
    AddAddress(AddAddressArgs),
}

// ============================================================================
// Service plans
// ============================================================================

/// Create a recurring service plan
///
/// Weekly and biweekly plans visit on `--day-of-week` (0 = Sunday .. 6 =
/// Saturday), monthly plans on `--day-of-month`. Either defaults to the
/// start date's day.
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    #[arg(help = "ID of the client the plan is for")]
    pub client_id: u64,
    /// Title copied onto every generated job
    pub title: String,
    #[arg(short, long, help = "weekly, biweekly or monthly")]
    pub frequency: Frequency,
    #[arg(short, long, help = "First day the plan is in effect (YYYY-MM-DD)")]
    pub start: Date,
    #[arg(long, help = "Last day the plan is in effect (YYYY-MM-DD)")]
    pub end: Option<Date>,
    #[arg(long)]
    pub day_of_week: Option<u8>,
    #[arg(long)]
    pub day_of_month: Option<u8>,
    #[arg(long, help = "Price per visit, e.g. 45 or 45.50")]
    pub price: Option<Cents>,
    #[arg(short, long, help = "ID of the service address")]
    pub address: Option<u64>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(long, help = "Initial status (active, paused or canceled)")]
    pub status: Option<PlanStatus>,
}

impl From<CreatePlanArgs> for CreateServicePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreateServicePlan {
            client_id: val.client_id,
            address_id: val.address,
            title: val.title,
            notes: val.notes,
            frequency: val.frequency,
            status: val.status,
            start_date: val.start,
            end_date: val.end,
            day_of_week: val.day_of_week,
            day_of_month: val.day_of_month,
            price_per_visit: val.price,
        }
    }
}

/// Edit a service plan
///
/// Only the given fields change. Jobs already generated are left as they
/// are. A `--clear-*` flag removes the value, so a cleared visit day falls
/// back to the start date's day.
#[derive(ClapArgs)]
pub struct UpdatePlanArgs {
    #[arg(help = "Unique identifier of the plan to edit")]
    pub id: u64,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub frequency: Option<Frequency>,
    #[arg(short, long)]
    pub start: Option<Date>,
    #[arg(long, conflicts_with = "clear_end")]
    pub end: Option<Date>,
    #[arg(long, help = "Remove the plan's end date")]
    pub clear_end: bool,
    #[arg(long, conflicts_with = "clear_day_of_week")]
    pub day_of_week: Option<u8>,
    #[arg(long)]
    pub clear_day_of_week: bool,
    #[arg(long, conflicts_with = "clear_day_of_month")]
    pub day_of_month: Option<u8>,
    #[arg(long)]
    pub clear_day_of_month: bool,
    #[arg(long, conflicts_with = "clear_price")]
    pub price: Option<Cents>,
    #[arg(long)]
    pub clear_price: bool,
    #[arg(short, long, conflicts_with = "clear_address")]
    pub address: Option<u64>,
    #[arg(long)]
    pub clear_address: bool,
    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
}

impl UpdatePlanArgs {
    /// Overlay the given flags on the plan's current values.
    pub fn apply(self, current: &ServicePlan) -> UpdateServicePlan {
        UpdateServicePlan {
            id: self.id,
            address_id: overlay(self.address, self.clear_address, current.address_id),
            title: self.title.unwrap_or_else(|| current.title.clone()),
            notes: overlay(self.notes, self.clear_notes, current.notes.clone()),
            frequency: self.frequency.unwrap_or(current.frequency),
            status: None,
            start_date: self.start.unwrap_or(current.start_date),
            end_date: overlay(self.end, self.clear_end, current.end_date),
            day_of_week: overlay(
                self.day_of_week,
                self.clear_day_of_week,
                current.day_of_week,
            ),
            day_of_month: overlay(
                self.day_of_month,
                self.clear_day_of_month,
                current.day_of_month,
            ),
            price_per_visit: overlay(self.price, self.clear_price, current.price_per_visit_cents),
        }
    }
}

/// A given value wins, then a clear flag, then the stored value.
fn overlay<T>(value: Option<T>, clear: bool, current: Option<T>) -> Option<T> {
    match value {
        Some(value) => Some(value),
        None if clear => None,
        None => current,
    }
}

/// Pause, resume or cancel a service plan
#[derive(ClapArgs)]
pub struct PlanStatusArgs {
    #[arg(help = "Unique identifier of the plan")]
    pub id: u64,
    #[arg(help = "New status: active, paused or canceled")]
    pub status: PlanStatus,
}

impl From<PlanStatusArgs> for SetPlanStatus {
    fn from(val: PlanStatusArgs) -> Self {
        SetPlanStatus {
            id: val.id,
            status: val.status,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListPlansArgs {
    #[arg(long, help = "Only plans with this status")]
    pub status: Option<PlanStatus>,
    #[arg(long, help = "Only plans for this client")]
    pub client: Option<u64>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status,
            client_id: val.client,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a recurring service plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Edit a service plan
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Pause, resume or cancel a service plan
    Status(PlanStatusArgs),
    /// Show a single service plan
    #[command(alias = "s")]
    Show(ShowArgs),
    /// List service plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
}

// ============================================================================
// Jobs
// ============================================================================

/// Enter a one-off job by hand
///
/// Jobs with a start time are scheduled right away; the rest are drafts.
#[derive(ClapArgs)]
pub struct AddJobArgs {
    #[arg(help = "ID of the client the job is for")]
    pub client_id: u64,
    /// Title of the job
    pub title: String,
    #[arg(short, long, help = "Start instant, e.g. 2025-04-01T13:00:00Z")]
    pub start: Option<Timestamp>,
    #[arg(long, requires = "start")]
    pub end: Option<Timestamp>,
    #[arg(long, help = "Estimated price, e.g. 120 or 120.50")]
    pub estimate: Option<Cents>,
    #[arg(short, long, help = "ID of the service address")]
    pub address: Option<u64>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddJobArgs> for CreateJob {
    fn from(val: AddJobArgs) -> Self {
        CreateJob {
            client_id: val.client_id,
            address_id: val.address,
            title: val.title,
            notes: val.notes,
            scheduled_start: val.start,
            scheduled_end: val.end,
            estimated_price: val.estimate,
        }
    }
}

/// Edit a job
///
/// Only the given fields change. `--charged` records what the client
/// actually paid. A generated job can't be moved onto a start its plan
/// already has a job for.
#[derive(ClapArgs)]
pub struct UpdateJobArgs {
    #[arg(help = "Unique identifier of the job to edit")]
    pub id: u64,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(long, help = "New status, e.g. done or invoiced")]
    pub status: Option<JobStatus>,
    #[arg(short, long, conflicts_with = "clear_start")]
    pub start: Option<Timestamp>,
    #[arg(long, help = "Take the job off the schedule")]
    pub clear_start: bool,
    #[arg(long, conflicts_with = "clear_end")]
    pub end: Option<Timestamp>,
    #[arg(long)]
    pub clear_end: bool,
    #[arg(long, conflicts_with = "clear_estimate")]
    pub estimate: Option<Cents>,
    #[arg(long)]
    pub clear_estimate: bool,
    #[arg(long, conflicts_with = "clear_charged", help = "Amount charged, e.g. 135.50")]
    pub charged: Option<Cents>,
    #[arg(long)]
    pub clear_charged: bool,
    #[arg(short, long, conflicts_with = "clear_address")]
    pub address: Option<u64>,
    #[arg(long)]
    pub clear_address: bool,
    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
}

impl UpdateJobArgs {
    /// Overlay the given flags on the job's current values.
    pub fn apply(self, current: &Job) -> UpdateJob {
        UpdateJob {
            id: self.id,
            address_id: overlay(self.address, self.clear_address, current.address_id),
            title: self.title.unwrap_or_else(|| current.title.clone()),
            notes: overlay(self.notes, self.clear_notes, current.notes.clone()),
            status: self.status,
            scheduled_start: overlay(self.start, self.clear_start, current.scheduled_start),
            scheduled_end: overlay(self.end, self.clear_end, current.scheduled_end),
            estimated_price: overlay(
                self.estimate,
                self.clear_estimate,
                current.estimated_price_cents,
            ),
            actual_price: overlay(self.charged, self.clear_charged, current.actual_price_cents),
        }
    }
}

#[derive(ClapArgs)]
pub struct ListJobsArgs {
    #[arg(long, help = "Only jobs generated from this plan")]
    pub plan: Option<u64>,
    #[arg(long, help = "Only jobs for this client")]
    pub client: Option<u64>,
    #[arg(long, help = "Only jobs with this status")]
    pub status: Option<JobStatus>,
    #[arg(long, help = "Only jobs scheduled at or after this instant")]
    pub from: Option<Timestamp>,
}

impl From<ListJobsArgs> for ListJobs {
    fn from(val: ListJobsArgs) -> Self {
        ListJobs {
            plan_id: val.plan,
            client_id: val.client,
            status: val.status,
            from: val.from,
        }
    }
}

#[derive(ClapArgs)]
pub struct JobStatusArgs {
    #[arg(help = "Unique identifier of the job")]
    pub id: u64,
    #[arg(help = "New status, e.g. in-progress, done, invoiced, paid")]
    pub status: JobStatus,
}

impl From<JobStatusArgs> for SetJobStatus {
    fn from(val: JobStatusArgs) -> Self {
        SetJobStatus {
            id: val.id,
            status: val.status,
        }
    }
}

#[derive(Subcommand)]
pub enum JobCommands {
    /// Enter a one-off job
    #[command(alias = "a")]
    Add(AddJobArgs),
    /// List jobs in schedule order
    #[command(aliases = ["l", "ls"])]
    List(ListJobsArgs),
    /// Show a single job
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Edit a job
    #[command(alias = "u")]
    Update(UpdateJobArgs),
    /// Move a job to a new status
    Status(JobStatusArgs),
}

// ============================================================================
// Generation
// ============================================================================

/// Generate upcoming jobs
///
/// Safe to run as often as you like; visits that already have a job are
/// skipped.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[arg(long, help = "Only generate for this plan")]
    pub plan: Option<u64>,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "How many days ahead to generate (1-60, default 14)"
    )]
    pub days_ahead: Option<i64>,
    #[arg(
        long,
        conflicts_with_all = ["plan", "days_ahead"],
        help = "Generation request as JSON, e.g. '{\"planId\": 3, \"daysAhead\": 30}'"
    )]
    pub request: Option<String>,
    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
}

impl From<&GenerateArgs> for GenerateJobs {
    fn from(val: &GenerateArgs) -> Self {
        GenerateJobs {
            plan_id: val.plan,
            days_ahead: val.days_ahead,
        }
    }
}

//! Verdant CLI
//!
//! Command-line back office for clients, recurring service plans and jobs.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use verdant_core::{models::PlanStatus, params::ListPlans, OfficeBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let office = OfficeBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open the office database")?;

    info!("Verdant started with {}", office.database_path().display());

    let cli = Cli::new(office, TerminalRenderer::new(!no_color));

    match command {
        Some(Client { command }) => cli.handle_client_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Job { command }) => cli.handle_job_command(command).await,
        Some(Generate(args)) => cli.handle_generate(args).await,
        None => {
            cli.list_plans(&ListPlans {
                status: Some(PlanStatus::Active),
                client_id: None,
            })
            .await
        }
    }
}

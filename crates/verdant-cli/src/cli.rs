//! Command handlers
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! office, and hands the markdown result to the terminal renderer.

use anyhow::{anyhow, Context, Result};
use log::debug;
use verdant_core::{
    display::{CreateResult, OperationStatus},
    params::{GenerateJobs, Id, ListPlans},
    Office,
};

use crate::{
    args::{ClientCommands, GenerateArgs, JobCommands, PlanCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    office: Office,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(office: Office, renderer: TerminalRenderer) -> Self {
        Self { office, renderer }
    }

    pub async fn handle_client_command(&self, command: ClientCommands) -> Result<()> {
        match command {
            ClientCommands::Add(args) => {
                let client = self
                    .office
                    .add_client(&args.into())
                    .await
                    .context("Failed to add client")?;
                self.renderer.render(&CreateResult::new(client).to_string())
            }
            ClientCommands::List => {
                let clients = self
                    .office
                    .list_clients_display()
                    .await
                    .context("Failed to list clients")?;
                self.renderer.render(&clients.to_string())
            }
            ClientCommands::Show(args) => {
                let id: Id = args.into();
                let client = self
                    .office
                    .show_client(&id)
                    .await
                    .context("Failed to load client")?
                    .ok_or_else(|| anyhow!("Client with ID {} not found", id.id))?;
                self.renderer.render(&client.to_string())
            }
            ClientCommands::AddAddress(args) => {
                let address = self
                    .office
                    .add_address(&args.into())
                    .await
                    .context("Failed to add address")?;
                self.renderer.render(&CreateResult::new(address).to_string())
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self
                    .office
                    .create_plan_result(&args.into())
                    .await
                    .context("Failed to create service plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Update(args) => {
                let current = self
                    .office
                    .show_plan(&Id { id: args.id })
                    .await
                    .context("Failed to load service plan")?
                    .ok_or_else(|| anyhow!("Service plan with ID {} not found", args.id))?;
                let result = self
                    .office
                    .update_plan_result(&args.apply(&current))
                    .await
                    .context("Failed to update service plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Status(args) => {
                let result = self
                    .office
                    .set_plan_status_result(&args.into())
                    .await
                    .context("Failed to change plan status")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Show(args) => {
                let id: Id = args.into();
                let plan = self
                    .office
                    .show_plan(&id)
                    .await
                    .context("Failed to load service plan")?
                    .ok_or_else(|| anyhow!("Service plan with ID {} not found", id.id))?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
        }
    }

    pub async fn handle_job_command(&self, command: JobCommands) -> Result<()> {
        match command {
            JobCommands::Add(args) => {
                let result = self
                    .office
                    .add_job_result(&args.into())
                    .await
                    .context("Failed to add job")?;
                self.renderer.render(&result.to_string())
            }
            JobCommands::List(args) => {
                let jobs = self
                    .office
                    .list_jobs_display(&args.into())
                    .await
                    .context("Failed to list jobs")?;
                self.renderer.render(&jobs.to_string())
            }
            JobCommands::Show(args) => {
                let id: Id = args.into();
                let job = self
                    .office
                    .show_job(&id)
                    .await
                    .context("Failed to load job")?
                    .ok_or_else(|| anyhow!("Job with ID {} not found", id.id))?;
                self.renderer.render(&job.to_string())
            }
            JobCommands::Update(args) => {
                let current = self
                    .office
                    .show_job(&Id { id: args.id })
                    .await
                    .context("Failed to load job")?
                    .ok_or_else(|| anyhow!("Job with ID {} not found", args.id))?;
                let result = self
                    .office
                    .update_job_result(&args.apply(&current))
                    .await
                    .context("Failed to update job")?;
                self.renderer.render(&result.to_string())
            }
            JobCommands::Status(args) => {
                let result = self
                    .office
                    .set_job_status_result(&args.into())
                    .await
                    .context("Failed to change job status")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_generate(&self, args: GenerateArgs) -> Result<()> {
        let summary = match &args.request {
            Some(body) => {
                debug!("Generating jobs from request {body}");
                self.office.generate_upcoming_jobs_from_json(body).await
            }
            None => {
                let request = GenerateJobs::from(&args);
                debug!("Generating jobs: {request:?}");
                self.office.generate_upcoming_jobs(&request).await
            }
        }
        .context("Failed to generate jobs")?;

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
            Ok(())
        } else {
            let status = OperationStatus::success(summary.to_string().trim_end());
            self.renderer.render(&status.to_string())
        }
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self
            .office
            .list_plans_display(params)
            .await
            .context("Failed to list service plans")?;
        self.renderer.render(&plans.to_string())
    }
}

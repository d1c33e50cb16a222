//! Runs job generation across service plans.

use jiff::{tz::TimeZone, SignedDuration, Timestamp};
use log::{debug, info, warn};

use super::{
    anchor::{local_morning, LocalTime},
    materializer::{materialize, Materialization},
    occurrence::DateWindow,
    GenerationStore,
};
use crate::{
    error::{OfficeError, Result},
    models::{GenerationSummary, ServicePlan},
    params::GenerateJobs,
};

/// The span of time one plan's pass covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl GenerationWindow {
    /// Window for `plan` at `now`.
    ///
    /// Starts at the later of the watermark and the plan's first day, unless
    /// that is already in the past, in which case it starts at `now`. Always
    /// ends `horizon_days` after `now`.
    pub fn for_plan(plan: &ServicePlan, now: Timestamp, horizon_days: u32) -> Result<Self> {
        let plan_start = plan.start_date.to_zoned(TimeZone::UTC)?.timestamp();
        let anchor = match plan.last_generated_at {
            Some(watermark) => watermark.max(plan_start),
            None => plan_start,
        };

        let start = if anchor > now { anchor } else { now };
        let end = now.checked_add(SignedDuration::from_hours(24 * i64::from(horizon_days)))?;

        Ok(Self { start, end })
    }

    /// The calendar dates the window touches.
    pub fn dates(&self) -> DateWindow {
        DateWindow::between(self.start, self.end)
    }
}

/// Generate jobs for every active plan, or for the one plan named in the
/// request.
///
/// A plan whose pass fails is logged and left with its watermark untouched;
/// the remaining plans still run.
///
/// # Errors
///
/// * `OfficeError::PlanNotFound` - the request names a plan that doesn't exist
/// * any error from listing the plans
pub fn generate_upcoming_jobs<S>(
    store: &mut S,
    request: &GenerateJobs,
    now: Timestamp,
) -> Result<GenerationSummary>
where
    S: GenerationStore + ?Sized,
{
    let horizon_days = request.horizon_days();

    if let Some(id) = request.plan_id {
        if !store.plan_exists(id)? {
            return Err(OfficeError::PlanNotFound { id });
        }
    }

    let plans = store.active_plans(request.plan_id)?;
    info!(
        "Generating jobs {horizon_days} days ahead for {} active plan(s)",
        plans.len()
    );

    let mut summary = GenerationSummary::default();
    for plan in &plans {
        match generate_for_plan(store, plan, now, horizon_days) {
            Ok(created) => {
                if created > 0 {
                    info!("Plan {} ({}): created {created} job(s)", plan.id, plan.title);
                }
                summary.created_count += created;
            }
            Err(e) => warn!("Skipping plan {} after failed generation pass: {e}", plan.id),
        }
    }

    info!("Generation finished, {} job(s) created", summary.created_count);
    Ok(summary)
}

/// One plan's pass: materialize every occurrence in its window, then move
/// its watermark to the end of the window. Returns the number of jobs
/// created.
pub fn generate_for_plan<S>(
    store: &mut S,
    plan: &ServicePlan,
    now: Timestamp,
    horizon_days: u32,
) -> Result<u32>
where
    S: GenerationStore + ?Sized,
{
    let window = GenerationWindow::for_plan(plan, now, horizon_days)?;
    let cadence = plan.cadence()?;
    debug!(
        "Plan {}: window {} .. {}",
        plan.id, window.start, window.end
    );

    let mut created = 0;
    let due = cadence
        .occurrences(window.dates())
        .take_while(|date| plan.end_date.map_or(true, |end| *date <= end));

    for date in due {
        let scheduled_start = local_morning(date, LocalTime::MORNING)?;
        // Occurrences up to the watermark were handled by an earlier pass.
        if plan
            .last_generated_at
            .is_some_and(|watermark| scheduled_start <= watermark)
        {
            continue;
        }

        match materialize(store, plan, scheduled_start)? {
            Materialization::Created(job) => {
                debug!("Plan {}: created job {} at {scheduled_start}", plan.id, job.id);
                created += 1;
            }
            Materialization::AlreadyPresent => {
                debug!("Plan {}: job at {scheduled_start} already exists", plan.id);
            }
        }
    }

    store.advance_watermark(plan.id, window.end)?;
    Ok(created)
}

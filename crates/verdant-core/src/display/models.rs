//! Display implementations for domain models.
//!
//! Models render as markdown so the CLI can hand them to the terminal
//! renderer unchanged.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Address, Client, Frequency, GenerationSummary, Job, JobStatus, PlanStatus, ServicePlan,
};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlanStatus::Active => "Active",
            PlanStatus::Paused => "Paused",
            PlanStatus::Canceled => "Canceled",
        })
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JobStatus::Draft => "Draft",
            JobStatus::Scheduled => "Scheduled",
            JobStatus::InProgress => "In Progress",
            JobStatus::Done => "Done",
            JobStatus::Invoiced => "Invoiced",
            JobStatus::Paid => "Paid",
            JobStatus::Canceled => "Canceled",
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
        })
    }
}

impl ServicePlan {
    /// "Weekly on Monday", "Monthly on day 15".
    fn cadence_label(&self) -> String {
        match self.frequency {
            Frequency::Weekly | Frequency::Biweekly => {
                let index = self
                    .day_of_week
                    .map(usize::from)
                    .unwrap_or_else(|| self.start_date.weekday().to_sunday_zero_offset() as usize);
                match WEEKDAY_NAMES.get(index) {
                    Some(day) => format!("{} on {day}", self.frequency),
                    None => self.frequency.to_string(),
                }
            }
            Frequency::Monthly => {
                let day = self
                    .day_of_month
                    .and_then(|d| i8::try_from(d).ok())
                    .unwrap_or_else(|| self.start_date.day());
                format!("Monthly on day {day}")
            }
        }
    }
}

impl fmt::Display for ServicePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Client: {}", self.client_id)?;
        if let Some(address_id) = self.address_id {
            writeln!(f, "- Address: {address_id}")?;
        }
        writeln!(f, "- Cadence: {}", self.cadence_label())?;
        writeln!(f, "- Starts: {}", self.start_date)?;
        if let Some(end) = self.end_date {
            writeln!(f, "- Ends: {end}")?;
        }
        if let Some(price) = self.price_per_visit_cents {
            writeln!(f, "- Price per visit: {price}")?;
        }
        match &self.last_generated_at {
            Some(at) => writeln!(f, "- Jobs generated through: {}", LocalDateTime(at))?,
            None => writeln!(f, "- Jobs generated through: never")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        match &self.scheduled_start {
            Some(start) => writeln!(f, "- Scheduled: {}", LocalDateTime(start))?,
            None => writeln!(f, "- Scheduled: not yet")?,
        }
        if let Some(end) = &self.scheduled_end {
            writeln!(f, "- Until: {}", LocalDateTime(end))?;
        }
        writeln!(f, "- Client: {}", self.client_id)?;
        if let Some(address_id) = self.address_id {
            writeln!(f, "- Address: {address_id}")?;
        }
        if let Some(plan_id) = self.service_plan_id {
            writeln!(f, "- Service plan: {plan_id}")?;
        }
        if let Some(price) = self.estimated_price_cents {
            writeln!(f, "- Estimate: {price}")?;
        }
        if let Some(price) = self.actual_price_cents {
            writeln!(f, "- Charged: {price}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", self.address)?;
        if let Some(city) = &self.city {
            write!(f, ", {city}")?;
        }
        if let Some(state) = &self.state {
            write!(f, ", {state}")?;
        }
        if let Some(zip) = &self.zip {
            write!(f, " {zip}")?;
        }
        if let Some(gate_code) = &self.gate_code {
            write!(f, " (gate {gate_code})")?;
        }
        Ok(())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(email) = &self.email {
            writeln!(f, "- Email: {email}")?;
        }
        if let Some(phone) = &self.phone {
            writeln!(f, "- Phone: {phone}")?;
        }

        if self.addresses.is_empty() {
            writeln!(f, "- No addresses on file")?;
        } else {
            writeln!(f, "- Addresses:")?;
            for address in &self.addresses {
                let marker = if address.is_primary { " (primary)" } else { "" };
                writeln!(f, "  - {}. {address}{marker}", address.id)?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated jobs. Created {}.", self.created_count)
    }
}

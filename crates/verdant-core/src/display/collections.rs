//! Collection wrapper types for displaying groups of records.
//!
//! Each wrapper renders its items one after another and prints a short
//! notice instead when it is empty.

use std::{fmt, ops::Index};

use crate::models::{Client, Job, ServicePlan};

macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Iterate over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Newtype wrapper for displaying a list of service plans.
///
/// Plans in a list are shown as one compact line each rather than the full
/// record.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use verdant_core::{
///     display::ServicePlans,
///     models::{Frequency, PlanStatus, ServicePlan},
/// };
///
/// let plan = ServicePlan {
///     id: 3,
///     client_id: 1,
///     address_id: None,
///     title: "Spring cleanup".to_string(),
///     notes: None,
///     frequency: Frequency::Monthly,
///     status: PlanStatus::Paused,
///     start_date: date(2025, 3, 1),
///     end_date: None,
///     day_of_week: None,
///     day_of_month: Some(15),
///     price_per_visit_cents: None,
///     last_generated_at: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = ServicePlans(vec![plan]).to_string();
/// assert!(output.contains("3. Spring cleanup"));
/// assert!(output.contains("Paused"));
/// ```
pub struct ServicePlans(pub Vec<ServicePlan>);

collection_wrapper!(ServicePlans, ServicePlan);

impl fmt::Display for ServicePlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No service plans found.");
        }

        for plan in &self.0 {
            write!(
                f,
                "- **{}. {}** ({}), client {}, {}",
                plan.id, plan.title, plan.status, plan.client_id, plan.frequency
            )?;
            if let Some(price) = plan.price_per_visit_cents {
                write!(f, ", {price} per visit")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of jobs in schedule order.
pub struct Jobs(pub Vec<Job>);

collection_wrapper!(Jobs, Job);

impl fmt::Display for Jobs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No jobs found.")
        } else {
            for job in &self.0 {
                write!(f, "{job}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of clients.
pub struct Clients(pub Vec<Client>);

collection_wrapper!(Clients, Client);

impl fmt::Display for Clients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No clients found.")
        } else {
            for client in &self.0 {
                write!(f, "{client}")?;
            }
            Ok(())
        }
    }
}

//! Outcome of a job generation run.

use serde::{Deserialize, Serialize};

/// What a generation run reports back to its caller.
///
/// Only the number of jobs actually created is reported. Plans whose pass
/// failed are logged but not itemized here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    /// Jobs inserted by this run, excluding occurrences that already existed
    pub created_count: u32,
}

//! Turns an occurrence date into the instant a crew is expected on site.
//!
//! The business runs on a fixed UTC offset with no daylight saving rules, so
//! between March and November every job lands one hour later in true local
//! time than the wall-clock hour asked for. Replacing [`business_offset`]
//! with a real time zone lookup is the only change needed to fix that.

use jiff::{
    civil::{Date, Time},
    tz::{self, Offset},
    Timestamp,
};

use crate::error::Result;

/// Standard-time UTC offset of the business, in hours.
pub const BUSINESS_STANDARD_OFFSET_HOURS: i8 = -5;

/// The offset every local schedule time is resolved against.
pub fn business_offset() -> Offset {
    tz::offset(BUSINESS_STANDARD_OFFSET_HOURS)
}

/// A wall-clock time in the business's local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: i8,
    pub minute: i8,
}

impl LocalTime {
    /// Generated visits start at 9:00.
    pub const MORNING: LocalTime = LocalTime { hour: 9, minute: 0 };
}

impl Default for LocalTime {
    fn default() -> Self {
        Self::MORNING
    }
}

/// Resolve `date` at the local time `at` to an absolute instant.
///
/// ```rust
/// use jiff::civil::date;
/// use verdant_core::schedule::{local_morning, LocalTime};
///
/// let at = local_morning(date(2025, 3, 10), LocalTime::MORNING).unwrap();
/// assert_eq!(at.to_string(), "2025-03-10T14:00:00Z");
/// ```
///
/// # Errors
///
/// Returns `OfficeError::Calendar` for an out-of-range time or a date at the
/// edge of the supported range.
pub fn local_morning(date: Date, at: LocalTime) -> Result<Timestamp> {
    let time = Time::new(at.hour, at.minute, 0, 0)?;
    Ok(business_offset().to_timestamp(date.to_datetime(time))?)
}

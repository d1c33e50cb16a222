//! Money amounts in minor currency units.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An amount of money in cents.
///
/// Parses operator input such as `45`, `45.5` or `$45.50`. At most two
/// decimal places are accepted and negative amounts are rejected.
///
/// ```rust
/// use verdant_core::models::Cents;
///
/// let price: Cents = "45.5".parse().unwrap();
/// assert_eq!(price.0, 4550);
/// assert_eq!(price.to_string(), "$45.50");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl FromStr for Cents {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err("Amount is empty".to_string());
        }

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(format!("Invalid amount: {s}"));
        }
        if fraction.len() > 2 {
            return Err(format!("Amount has more than two decimal places: {s}"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("Amount is too large: {s}"))?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|e| e.to_string())? * 10,
            _ => fraction.parse::<i64>().map_err(|e| e.to_string())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Cents)
            .ok_or_else(|| format!("Amount is too large: {s}"))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

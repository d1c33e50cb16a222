//! Column conversion helpers shared by the query modules.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use rusqlite::{types::Type, Row};

use crate::models::Cents;

/// Current time truncated to whole seconds.
pub(crate) fn now() -> Timestamp {
    truncate_to_second(Timestamp::now())
}

/// Drop sub-second precision so stored timestamps compare correctly as text
/// and equal instants always produce equal strings.
pub(crate) fn truncate_to_second(ts: Timestamp) -> Timestamp {
    Timestamp::from_second(ts.as_second()).unwrap_or(ts)
}

/// SQL text form of a timestamp.
pub(crate) fn to_sql_timestamp(ts: Timestamp) -> String {
    truncate_to_second(ts).to_string()
}

/// SQL text form of an optional timestamp.
pub(crate) fn to_sql_optional_timestamp(ts: Option<Timestamp>) -> Option<String> {
    ts.map(to_sql_timestamp)
}

fn conversion_error<E>(idx: usize, error: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, error.into())
}

/// Blank notes are stored as NULL.
pub(crate) fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
}

pub(crate) fn id_column(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

pub(crate) fn optional_id_column(row: &Row, idx: usize) -> rusqlite::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(|id| id as u64))
}

pub(crate) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(idx, e))
}

pub(crate) fn optional_timestamp_column(
    row: &Row,
    idx: usize,
) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| s.parse::<Timestamp>().map_err(|e| conversion_error(idx, e)))
        .transpose()
}

pub(crate) fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| conversion_error(idx, e))
}

pub(crate) fn optional_date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(idx)?
        .map(|s| s.parse::<Date>().map_err(|e| conversion_error(idx, e)))
        .transpose()
}

pub(crate) fn optional_cents_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Cents>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(Cents))
}

/// Parse a status-like text column through its `FromStr` impl.
pub(crate) fn enum_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    row.get::<_, String>(idx)?
        .parse::<T>()
        .map_err(|e| conversion_error(idx, e))
}

//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the column decoding: dual datetime formats,
//! nullable text, integer-encoded booleans, and JSON-encoded string arrays.

use chrono::{DateTime, Utc};
use dcc_core::enums::Satellite;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column, keeping empty strings as-is.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// Empty strings are preserved: the aggregator decides how to bucket them.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Read a nullable INTEGER column holding a year.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value does not fit in `i32`.
pub fn get_opt_year(row: &libsql::Row, idx: i32) -> Result<Option<i32>, DatabaseError> {
    get_opt_i64(row, idx)?
        .map(|v| {
            i32::try_from(v).map_err(|e| DatabaseError::Query(format!("Year out of range {v}: {e}")))
        })
        .transpose()
}

/// Read a nullable INTEGER column as a boolean (`0` is false).
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_bool(row: &libsql::Row, idx: i32) -> Result<Option<bool>, DatabaseError> {
    Ok(get_opt_i64(row, idx)?.map(|v| v != 0))
}

/// Read a nullable TEXT column holding a JSON array of strings.
///
/// Element order and duplicates are kept exactly as stored.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty value is not a JSON string array.
pub fn get_string_list(
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<Vec<String>>, DatabaseError> {
    parse_string_list(get_opt_string(row, idx)?.as_deref())
}

/// Parse the text of a JSON string array column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a JSON string array.
pub fn parse_string_list(s: Option<&str>) -> Result<Option<Vec<String>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => serde_json::from_str::<Vec<String>>(s)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Invalid string array '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Map a satellite to its backend table name.
///
/// Uses exhaustive match, so adding a `Satellite` variant forces updating this.
#[must_use]
pub const fn satellite_table(satellite: Satellite) -> &'static str {
    match satellite {
        Satellite::Business => "company_business",
        Satellite::Technology => "company_technologies",
        Satellite::People => "company_people",
        Satellite::Culture => "company_culture",
        Satellite::TalentGrowth => "company_talent_growth",
        Satellite::Compensation => "company_compensation",
        Satellite::Logistics => "company_logistics",
        Satellite::Financials => "company_financials",
        Satellite::BrandReputation => "company_brand_reputation",
    }
}

//! Field rules for well records submitted through HTML forms.
//!
//! Submissions are never rejected for bad field values: numbers that do not
//! parse become `0.0` and dates that do not parse become [`ZERO_DATE`]. The
//! only hard validation is on the record id taken from the URL path.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `CoreError::NotFound`.
pub const ENTITY_WELL: &str = "Well";

/// Layout accepted for `drilling_date` form values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored in place of a drilling date that could not be parsed.
pub const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("0001-01-01 is a valid date"),
};

/// Status values offered by the create and edit forms.
///
/// The column itself is free text: any string a client submits is stored.
pub const WELL_STATUSES: &[&str] = &["active", "inactive", "maintenance", "abandoned"];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a decimal form value, falling back to `0.0`.
///
/// Surrounding whitespace is ignored. Non-finite results (`NaN`, `inf`)
/// also fall back to `0.0`.
pub fn parse_decimal(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a `YYYY-MM-DD` form value, falling back to [`ZERO_DATE`].
pub fn parse_drilling_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or(ZERO_DATE)
}

/// Parse a well id taken from a URL path segment.
pub fn parse_well_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!("Invalid well id '{raw}'"))),
    }
}

/// Whether `status` is one of [`WELL_STATUSES`].
///
/// Informational only; nothing rejects a status outside the list.
pub fn is_known_status(status: &str) -> bool {
    WELL_STATUSES.contains(&status)
}

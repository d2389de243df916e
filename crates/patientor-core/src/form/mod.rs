//! Form construction: turns raw form values into typed payloads.
//!
//! The lenient `build` paths mirror what the web form submits. The
//! `build_validated` paths additionally reject empty required fields,
//! malformed dates and diagnosis codes outside the catalog.

mod entry;
mod patient;

pub use entry::*;
pub use patient::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Form errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown entry kind: {0}")]
    UnknownEntryKind(String),

    #[error("Health check rating out of range (0-3): {0}")]
    RatingOutOfRange(i64),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date in {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown diagnosis code: {0}")]
    UnknownDiagnosis(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Date format used by every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn require(field: &'static str, value: &str) -> FormResult<()> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn require_date(field: &'static str, value: &str) -> FormResult<()> {
    require(field, value)?;
    check_date(field, value)
}

fn check_date(field: &'static str, value: &str) -> FormResult<()> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

//! Validation for catalog entities.
//!
//! Field checks are plain functions run in a fixed order by the entity
//! constructors. The first failing check aborts construction.

use chrono::NaiveDate;
use thiserror::Error;
use url::Url;

use super::duration::parse_duration;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required but was missing")]
    MissingField { field: &'static str },

    #[error("Field '{field}' is required but was empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' has invalid value '{value}', expected {expected}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Field '{field}' is not a valid http(s) URL: '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Field '{field}' is not a valid YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("Field '{field}' is not a valid duration: '{value}'")]
    InvalidDuration { field: &'static str, value: String },

    #[error("Parameter [{field}]: [{value}] is not between [{min}] and [{max}].")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Total percentage [{male:?}] + [{female:?}] + [{other:?}] does not equal 100%.")]
    PercentageTotal { male: f64, female: f64, other: f64 },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidUrl { field, .. }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::InvalidDuration { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
            ValidationError::PercentageTotal { .. } => "total",
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn require<T>(value: Option<T>, field: &'static str) -> ValidationResult<T> {
    value.ok_or(ValidationError::MissingField { field })
}

pub fn non_blank(value: String, field: &'static str) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

pub fn non_empty_list(values: Vec<String>, field: &'static str) -> ValidationResult<Vec<String>> {
    if values.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(values)
}

/// Like [`non_empty_list`], but every entry must also carry text.
pub fn non_empty_entries(
    values: Vec<String>,
    field: &'static str,
) -> ValidationResult<Vec<String>> {
    let values = non_empty_list(values, field)?;
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(values)
}

pub fn http_url(value: &str, field: &'static str) -> ValidationResult<Url> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        value: value.to_owned(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid()),
    }
}

pub fn calendar_date(value: &str, field: &'static str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_owned(),
    })
}

pub fn time_span(value: &str, field: &'static str) -> ValidationResult<std::time::Duration> {
    parse_duration(value).ok_or_else(|| ValidationError::InvalidDuration {
        field,
        value: value.to_owned(),
    })
}

pub fn percentage(value: f64, field: &'static str) -> ValidationResult<f64> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value: format!("{:?}", value),
            min: "0.0".to_owned(),
            max: "100.0".to_owned(),
        });
    }
    Ok(value)
}

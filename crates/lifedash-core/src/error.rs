//! Core error types for lifedash-core.
//!
//! This module defines the error hierarchy using thiserror. Over-commitment
//! (daily hours summing past 24) is deliberately not here: it is an advisory
//! flag on the computed result, never a failure.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifedash-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid computation input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unrecognized display unit name
    #[error("Unknown display unit '{0}' (expected Hours, Days, Weeks, Months or Years)")]
    UnknownUnit(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for computation inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Daily hours outside the allowed range
    #[error("Daily hours for '{category}' must be within [0, 24], got {hours}")]
    HoursOutOfRange { category: String, hours: f64 },

    /// Expected age outside the sane range
    #[error("Expected age must be within [1, 120] years, got {0}")]
    ExpectedAgeOutOfRange(f64),

    /// Date of birth after the reference date
    #[error("Date of birth {date_of_birth} is after the reference date {reference_date}")]
    BirthAfterReference {
        date_of_birth: chrono::NaiveDate,
        reference_date: chrono::NaiveDate,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the profile
    #[error("Failed to load profile from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the profile
    #[error("Failed to save profile to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the profile file
    #[error("Failed to parse profile: {0}")]
    ParseFailed(String),

    /// Unknown dot-separated profile key
    #[error("Unknown profile key: {0}")]
    UnknownKey(String),

    /// Invalid value for a known key
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

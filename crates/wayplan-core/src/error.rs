//! Core error types for wayplan-core.
//!
//! This module defines the error hierarchy using thiserror. Configuration
//! errors are fatal; content sparsity (no hotel, no attractions, a missing
//! transit leg) is never an error and never appears here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wayplan-core.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid trip window: the return instant must come after departure
    #[error("Invalid trip window: end ({end}) must be after start ({start})")]
    InvalidTripWindow {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Malformed availability slot in a day template
    #[error("Invalid slot '{label}': {message}")]
    InvalidSlot { label: String, message: String },

    /// Two slots in the same template cover overlapping times
    #[error("Slots '{first}' and '{second}' overlap")]
    OverlappingSlots { first: String, second: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<Box<dyn std::error::Error + Send + Sync>> for PlanError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        PlanError::Custom(err.to_string())
    }
}

/// Result type alias for PlanError
pub type Result<T, E = PlanError> = std::result::Result<T, E>;

//! Error types and handling for Chargecap
//!
//! This module defines the error types used throughout the crate,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Chargecap operations
pub type Result<T> = std::result::Result<T, ChargecapError>;

/// Main error type for Chargecap
#[derive(Debug, Error)]
pub enum ChargecapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Remote telematics API errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Host platform integration errors
    #[error("Platform error: {message}")]
    Platform { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Timeout errors
    #[error("Timeout error: {message}")]
    Timeout { message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl ChargecapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        ChargecapError::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        ChargecapError::Api {
            message: message.into(),
        }
    }

    /// Create a new platform error
    pub fn platform<S: Into<String>>(message: S) -> Self {
        ChargecapError::Platform {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        ChargecapError::Serialization {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        ChargecapError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ChargecapError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        ChargecapError::Timeout {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        ChargecapError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ChargecapError {
    fn from(err: std::io::Error) -> Self {
        ChargecapError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ChargecapError {
    fn from(err: serde_yaml::Error) -> Self {
        ChargecapError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChargecapError {
    fn from(err: serde_json::Error) -> Self {
        ChargecapError::Serialization {
            message: err.to_string(),
        }
    }
}

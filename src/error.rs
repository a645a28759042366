//! Error types for Solidafy Paginator
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for Solidafy Paginator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Paging Errors
    // ============================================================================
    /// A page size or page number below 1
    #[error("Invalid {field}: {value} (must be a positive integer)")]
    InvalidArgument {
        /// Setting that was rejected
        field: String,
        /// Rejected value
        value: i64,
    },

    /// A windowed paginator setting changed after it was set
    #[error("Cannot change {field} once set, when paginator is windowed")]
    ImmutableConfiguration {
        /// Setting that is already fixed
        field: String,
    },

    /// An operation that needs page settings which are not set yet
    #[error("Cannot {operation}: {message}")]
    ConfigurationRequired {
        /// Operation that was attempted
        operation: String,
        /// What has to be set first
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid pager definition or command-line input
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Malformed pager YAML
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing source or definition file
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, value: i64) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value,
        }
    }

    /// Create an immutable configuration error
    pub fn immutable(field: impl Into<String>) -> Self {
        Self::ImmutableConfiguration {
            field: field.into(),
        }
    }

    /// Create a configuration required error
    pub fn configuration_required(
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConfigurationRequired {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error is a paging usage error.
    ///
    /// Usage errors are raised synchronously, leave the paginator untouched
    /// and are never transient: the caller has to fix the arguments or the
    /// call order.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. }
                | Error::ImmutableConfiguration { .. }
                | Error::ConfigurationRequired { .. }
        )
    }
}

/// Result type alias for Solidafy Paginator
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for Canopy.
//!
//! The widgets themselves are fail-soft (a missing measurement skips a
//! positioning pass instead of failing), so errors only surface from the
//! places a consumer can hand us bad input: configuration, theme selection,
//! and window setup in the demo binary.

use thiserror::Error;

/// Main error type for Canopy.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// Configuration value could not be parsed.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
    },

    /// Unknown or unloadable theme.
    #[error("Theme error: {message}")]
    Theme {
        /// Human-readable error message.
        message: String,
    },

    /// Window creation or management error.
    #[error("Window error: {message}")]
    Window {
        /// Human-readable error message.
        message: String,
    },

    /// Unexpected internal error.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CanopyError {
    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a new theme error.
    pub fn theme(message: impl Into<String>) -> Self {
        Self::Theme { message: message.into() }
    }

    /// Create a new window error.
    pub fn window(message: impl Into<String>) -> Self {
        Self::Window { message: message.into() }
    }

    /// Create a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Create a new internal error with source.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Box::new(source)) }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "Config",
            Self::Theme { .. } => "Theme",
            Self::Window { .. } => "Window",
            Self::Internal { .. } => "Internal",
        }
    }
}

/// Convert from std::io::Error to CanopyError.
impl From<std::io::Error> for CanopyError {
    fn from(err: std::io::Error) -> Self {
        CanopyError::internal_with_source("I/O error", err)
    }
}

//! Error types for Ivola.
//!
//! Outcomes of `ask` are data (see [`crate::resolver::Resolution`]), never
//! errors. The enums here cover fallible construction (knowledge tables,
//! roles, alert confidences), shell configuration, and heritage capture.

use std::path::PathBuf;

use thiserror::Error;

/// Validation errors that occur during input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown role '{label}' (expected one of: educator, elder, youth, researcher)")]
    UnknownRole {
        label: String,
    },

    #[error("Knowledge term cannot be empty")]
    EmptyTerm,

    #[error("Knowledge term '{term}' contains unsupported characters")]
    InvalidTerm {
        term: String,
    },

    #[error("Invalid term pattern: {reason}")]
    InvalidTermPattern {
        reason: String,
    },

    #[error("Unknown platform '{label}' (expected one of: etsy, amazon, instagram, pinterest)")]
    UnknownPlatform {
        label: String,
    },

    #[error("Knowledge term '{term}' is declared more than once")]
    DuplicateTerm {
        term: String,
    },

    #[error("Explanation for term '{term}' cannot be empty")]
    EmptyExplanation {
        term: String,
    },

    #[error("Fallback message cannot be empty")]
    EmptyFallback,

    #[error("Match confidence {value}% is out of range [0, 100]")]
    ConfidenceOutOfRange {
        value: u8,
    },
}

/// Errors raised while loading shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        key: String,
        reason: String,
    },
}

/// Errors raised by a heritage capture session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Capture session is closed")]
    SessionClosed,

    #[error("Capture buffer is full ({capacity} chunks pending)")]
    BufferFull {
        capacity: usize,
    },

    #[error("Nothing was recorded")]
    EmptyRecording,
}

/// Top-level error type for Ivola.
#[derive(Debug, Error)]
pub enum IvolaError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl IvolaError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is a capture error.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Self::Capture(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Returns true if repeating the call could succeed.
    ///
    /// Only a full capture buffer clears up on its own once the session drains.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Capture(CaptureError::BufferFull { .. }))
    }
}

/// Result type alias for Ivola operations.
pub type IvolaResult<T> = Result<T, IvolaError>;

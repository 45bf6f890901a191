//! Error types with actionable diagnostics.
//!
//! Framework failures raised inside hooks are carried unmodified in
//! [`Error::Framework`]; everything else names what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for predictor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, training or checkpointing.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue {
        field: String,
        message: String,
        suggestion: String,
    },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Checkpoint contents could not be applied to the model.
    #[error("Checkpoint error at {path}: {message}\n  → Check that the checkpoint was written by the same model architecture")]
    Checkpoint { path: PathBuf, message: String },

    /// Error raised by the underlying framework (forward, backward, optimizer).
    #[error("Framework error: {source}")]
    Framework {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap an error raised by the deep-learning framework.
    pub fn framework(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Framework {
            source: source.into(),
        }
    }

    /// Build a configuration value error.
    pub fn config_value(
        field: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::ConfigValue {
            field: field.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParsing { .. } | Self::ConfigValue { .. } | Self::Checkpoint { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::Checkpoint { .. } => "E052",
            Self::Framework { .. } => "E070",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

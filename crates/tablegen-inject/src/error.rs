//! Error types for injection configuration.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while assembling an [`InjectionConfig`](crate::InjectionConfig).
#[derive(Debug, thiserror::Error)]
pub enum InjectionError {
    /// A required value was missing or malformed during construction.
    #[error("invalid injection config: {0}")]
    InvalidConfig(String),

    /// A settings document could not be parsed.
    #[error("failed to parse injection settings: {0}")]
    Parse(String),

    /// A settings file could not be read.
    #[error("failed to read injection settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InjectionError {
    /// Create an invalid-config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true if this error was raised by construction-time validation.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

impl From<serde_json::Error> for InjectionError {
    fn from(err: serde_json::Error) -> Self {
        InjectionError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for InjectionError {
    fn from(err: serde_yaml::Error) -> Self {
        InjectionError::Parse(err.to_string())
    }
}

/// Result type for injection operations.
pub type Result<T> = std::result::Result<T, InjectionError>;

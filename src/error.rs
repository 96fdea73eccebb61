//! Error types and handling for the `airmood` engine

use serde::Serialize;
use thiserror::Error;

/// Main error type for the AQI engine
#[derive(Error, Debug)]
pub enum AqiError {
    /// A required series or field was not provided by the data source
    #[error("Data unavailable: {field}")]
    DataUnavailable { field: String },

    /// A value was present but unusable (negative, non-finite, unparseable)
    #[error("Malformed input in {field}: {message}")]
    MalformedInput { field: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Stable error codes handed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DataUnavailable,
    MalformedInput,
    Config,
    Io,
}

impl AqiError {
    /// Create a new data-unavailable error for the given field
    pub fn data_unavailable<S: Into<String>>(field: S) -> Self {
        Self::DataUnavailable {
            field: field.into(),
        }
    }

    /// Create a new malformed-input error
    pub fn malformed<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::MalformedInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AqiError::DataUnavailable { .. } => ErrorKind::DataUnavailable,
            AqiError::MalformedInput { .. } => ErrorKind::MalformedInput,
            AqiError::Config { .. } => ErrorKind::Config,
            AqiError::Io { .. } => ErrorKind::Io,
        }
    }

    /// The offending input field, when the error is tied to one
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            AqiError::DataUnavailable { field } | AqiError::MalformedInput { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AqiError::DataUnavailable { .. } => {
                "Forecast data not available for this location.".to_string()
            }
            AqiError::MalformedInput { field, .. } => {
                format!("The air quality provider returned an unusable value for {field}.")
            }
            AqiError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AqiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for AqiError {
    fn from(err: serde_json::Error) -> Self {
        AqiError::malformed("payload", err.to_string())
    }
}

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Reasons a document could not be obtained.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Authentication failed. Please check your credentials.")]
    AuthFailed { status: u16 },

    #[error("Resource not found. Check storage key or endpoint.")]
    NotFound,

    #[error("Server error: {status}")]
    ServerError { status: u16 },

    #[error("No data received")]
    EmptyBody,

    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl LoaderError {
    /// Interpret a non-success HTTP status. Returns `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(LoaderError::AuthFailed { status }),
            404 => Some(LoaderError::NotFound),
            _ => Some(LoaderError::ServerError { status }),
        }
    }

    /// Short message for the user. Identical for every failure.
    pub fn user_message(&self) -> &'static str {
        "Failed to load UI"
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        match self {
            LoaderError::Network { url, source } => {
                let mut details = format!("Request to '{}' failed: {}", url, source);
                let mut cause = source.source();
                while let Some(err) = cause {
                    details.push_str(&format!(": {}", err));
                    cause = err.source();
                }
                details
            }
            LoaderError::Schema(err) => format!("Invalid UI document: {}", err),
            other => other.to_string(),
        }
    }

    /// `"<user message>: <details>"`, as shown on a failed screen.
    pub fn display_message(&self) -> String {
        format!("{}: {}", self.user_message(), self.details())
    }
}

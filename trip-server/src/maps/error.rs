//! Maps client error types.

use std::fmt;

use crate::domain::ProviderError;

/// Errors from the maps HTTP client.
#[derive(Debug)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service reported an error status
    Api {
        status: String,
        message: Option<String>,
    },

    /// Rate limited by the service
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for MapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapsError::Http(e) => write!(f, "HTTP error: {e}"),
            MapsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MapsError::Api { status, message } => {
                write!(f, "API error {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            MapsError::RateLimited => write!(f, "rate limited by maps service"),
            MapsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for MapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        MapsError::Http(err)
    }
}

impl From<MapsError> for ProviderError {
    fn from(err: MapsError) -> Self {
        ProviderError::new(err.to_string())
    }
}

//! MOTIS client error types.

use std::fmt;

/// Errors from the MOTIS HTTP client.
#[derive(Debug)]
pub enum MotisError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,
}

impl MotisError {
    /// True when retrying the identical request may succeed.
    ///
    /// Covers transport failures and server-side errors; client-side
    /// failures (bad request, parse errors) will not get better on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            MotisError::Http(_) => true,
            MotisError::ApiError { status, .. } => *status >= 500,
            MotisError::Json { .. } | MotisError::RateLimited => false,
        }
    }
}

impl fmt::Display for MotisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotisError::Http(e) => write!(f, "HTTP error: {e}"),
            MotisError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MotisError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            MotisError::RateLimited => write!(f, "rate limited by MOTIS API"),
        }
    }
}

impl std::error::Error for MotisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MotisError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MotisError {
    fn from(err: reqwest::Error) -> Self {
        MotisError::Http(err)
    }
}

//! Error types for fetching, persistence and analysis.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

use crate::charts::PlotError;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the OpenReview API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Errors reading or writing the paper files.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON encoding/decoding error
    #[error("JSON error on {path}: {source}")]
    Json {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// CSV encoding/decoding error
    #[error("CSV error on {path}: {source}")]
    Csv {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}

/// Errors that abort a fetch run.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Page request failed
    #[error("Page request failed at offset {offset}: {source}")]
    Page {
        /// Offset of the failing page
        offset: u64,
        /// Underlying client error
        source: ClientError,
    },

    /// Writing the output files failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The listing was empty
    #[error("No papers found for venue '{venue}'")]
    NoRecords {
        /// Venue that was queried
        venue: String,
    },
}

/// Errors from the analyzer.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// Input CSV does not exist
    #[error("Input file not found: {}", path.display())]
    MissingInput {
        /// Expected location
        path: PathBuf,
    },

    /// Input CSV has no usable rows
    #[error("Input file has no usable rows: {}", path.display())]
    EmptyInput {
        /// File that was read
        path: PathBuf,
    },

    /// Reading the input failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rendering a chart failed
    #[error("Chart rendering failed: {0}")]
    Plot(#[from] PlotError),
}

impl AnalysisError {
    /// Convert to a message the user can act on.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::MissingInput { path } => format!(
                "Could not find {}. Run `iclr-fetch` first to download the paper listing.",
                path.display()
            ),
            Self::EmptyInput { path } => format!(
                "{} contains no paper rows. Re-run `iclr-fetch` to refresh it.",
                path.display()
            ),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_user_message() {
        let err = AnalysisError::MissingInput { path: PathBuf::from("iclr26_all_papers.csv") };
        let msg = err.to_user_message();
        assert!(msg.contains("iclr26_all_papers.csv"));
        assert!(msg.contains("iclr-fetch"));
    }

    #[test]
    fn test_fetch_error_reports_offset() {
        let err = FetchError::Page { offset: 200, source: ClientError::server(502, "bad gateway") };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("502"));
    }
}

/// Unified error handling module
use thiserror::Error;

/// Failures raised by a `DataLoader` before any decoding happens.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Error injected by a scripted loader.
    #[error("scripted failure: {0}")]
    Scripted(String),
}

impl LoaderError {
    /// Upstream HTTP status, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            LoaderError::Transport(e) => e.status().map(|s| s.as_u16()),
            LoaderError::Status { status, .. } => Some(*status),
            LoaderError::Scripted(_) => None,
        }
    }
}

/// Error surfaced by `MarsRoverClient`.
///
/// Transport and decode failures are reported through the same variant; the
/// `reason` keeps the underlying message for logs.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{operation} failed: {reason}")]
    OperationFailed {
        operation: &'static str,
        reason: String,
    },
}

impl ClientError {
    pub fn failed(operation: &'static str, reason: impl ToString) -> Self {
        ClientError::OperationFailed {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            ClientError::OperationFailed { operation, .. } => operation,
        }
    }
}

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_keeps_operation_and_reason() {
        let err = ClientError::failed("fetch_photos", LoaderError::Scripted("boom".into()));
        assert_eq!(err.operation(), "fetch_photos");
        assert_eq!(
            err.to_string(),
            "fetch_photos failed: scripted failure: boom"
        );
    }

    #[test]
    fn test_status_reported_for_status_errors() {
        let err = LoaderError::Status {
            status: 503,
            url: "https://example.test/".into(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(LoaderError::Scripted("x".into()).status(), None);
    }
}

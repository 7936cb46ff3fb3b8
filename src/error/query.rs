//! Errors produced by the assistant query client.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

/// A failure the query client treats as transient and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransientFailure {
    /// The request never produced an HTTP response (connect, timeout, IO).
    #[error("{0}")]
    Transport(HttpError),

    /// The server answered with 429 or a 5xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl TransientFailure {
    /// Whether this failure was a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransientFailure::Transport(HttpError::Timeout(_)))
    }
}

/// Terminal outcome of a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The question was empty after trimming. No request was sent.
    #[error("invalid input: question is empty")]
    InvalidInput,

    /// The server refused the request with a non-retryable status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The server answered 2xx but the payload had no usable text.
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },

    /// Every attempt failed with a transient error.
    #[error("exhausted retries after {attempts} attempts: {last}")]
    ExhaustedRetries { attempts: u32, last: TransientFailure },

    /// The configured endpoint could not be turned into a request.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl QueryError {
    /// Category used in log lines and for the panel's recovery hint.
    pub fn category(&self) -> ErrorCategory {
        match self {
            QueryError::InvalidInput => ErrorCategory::User,
            QueryError::Rejected { status: 401 | 403, .. } => ErrorCategory::Configuration,
            QueryError::Rejected { .. } => ErrorCategory::User,
            QueryError::MalformedResponse { .. } => ErrorCategory::Server,
            QueryError::ExhaustedRetries { last, .. } => match last {
                TransientFailure::Transport(_) => ErrorCategory::Network,
                TransientFailure::Status { .. } => ErrorCategory::Server,
            },
            QueryError::InvalidEndpoint(_) => ErrorCategory::Configuration,
        }
    }

    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidInput => "QUERY_INVALID_INPUT",
            QueryError::Rejected { .. } => "QUERY_REJECTED",
            QueryError::MalformedResponse { .. } => "QUERY_MALFORMED_RESPONSE",
            QueryError::ExhaustedRetries { .. } => "QUERY_EXHAUSTED_RETRIES",
            QueryError::InvalidEndpoint(_) => "QUERY_INVALID_ENDPOINT",
        }
    }

    /// Message shown in the assistant panel.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::InvalidInput => "Please enter a question.".to_string(),
            QueryError::Rejected { message, .. } => {
                format!("The assistant rejected the request: {}", message)
            }
            QueryError::MalformedResponse { .. } => {
                "Sorry, I received an unexpected answer. Please try again.".to_string()
            }
            QueryError::ExhaustedRetries { last, .. } if last.is_timeout() => {
                "Sorry, the assistant took too long to answer. Please try again.".to_string()
            }
            QueryError::ExhaustedRetries { .. } => {
                "Sorry, I encountered an error. Please try again.".to_string()
            }
            QueryError::InvalidEndpoint(_) => {
                "The assistant is not configured correctly.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(QueryError::InvalidInput.category(), ErrorCategory::User);
        assert_eq!(
            QueryError::Rejected {
                status: 400,
                message: "bad request".to_string()
            }
            .category(),
            ErrorCategory::User
        );
        assert_eq!(
            QueryError::ExhaustedRetries {
                attempts: 3,
                last: TransientFailure::Transport(HttpError::ConnectionFailed("refused".into())),
            }
            .category(),
            ErrorCategory::Network
        );
        assert_eq!(
            QueryError::ExhaustedRetries {
                attempts: 3,
                last: TransientFailure::Status {
                    status: 503,
                    message: "unavailable".into()
                },
            }
            .category(),
            ErrorCategory::Server
        );
        assert_eq!(
            QueryError::Rejected {
                status: 403,
                message: "forbidden".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            QueryError::InvalidEndpoint("nope".into()).category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_display_carries_detail() {
        let err = QueryError::Rejected {
            status: 400,
            message: "bad request".to_string(),
        };
        assert!(err.to_string().contains("bad request"));
        assert!(err.user_message().contains("bad request"));

        let err = QueryError::ExhaustedRetries {
            attempts: 3,
            last: TransientFailure::Status {
                status: 503,
                message: "overloaded".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "exhausted retries after 3 attempts: HTTP 503: overloaded"
        );
    }

    #[test]
    fn test_timeout_has_own_message() {
        let err = QueryError::ExhaustedRetries {
            attempts: 2,
            last: TransientFailure::Transport(HttpError::Timeout("30s".into())),
        };
        assert!(err.user_message().contains("too long"));
    }
}

//! Error category classification for unified error handling.
//!
//! Categories tag failures in log lines and pick the recovery hint shown
//! under an error in the assistant panel.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout).
    Network,

    /// Backend errors (HTTP 429, 5xx, unexpected payloads).
    Server,

    /// User action required (empty question, rejected request).
    User,

    /// Missing or invalid configuration (endpoint, API key, env vars).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and ask again.",
            ErrorCategory::Server => "The service is busy. Please try again in a moment.",
            ErrorCategory::User => "Rephrase your question and try again.",
            ErrorCategory::Configuration => {
                "Check SIGNBOARD_API_URL and SIGNBOARD_API_KEY, then restart."
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

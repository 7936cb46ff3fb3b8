//! AppMessage enum for async communication within the application.

use crate::error::QueryError;

/// Messages received from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// An assistant query finished (successfully or not)
    QueryFinished {
        generation: u64,
        result: Result<String, QueryError>,
    },
}

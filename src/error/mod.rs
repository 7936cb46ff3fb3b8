//! Error handling for the signboard.
//!
//! - **Error Categories**: high-level classification for retry and messaging
//! - **Query Errors**: terminal outcomes of the assistant query client
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Server | 429, 5xx, bad payloads | Yes |
//! | User | Empty or rejected question | No |
//! | Client | Programming errors | No |
//! | Configuration | Endpoint or env issues | No |

mod category;
mod query;

pub use category::ErrorCategory;
pub use query::{QueryError, TransientFailure};

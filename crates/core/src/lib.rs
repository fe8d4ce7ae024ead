#![warn(missing_docs)]
//! Todo domain primitives shared across the workspace.

pub mod store;
pub mod todo;

use thiserror::Error;

// Re-export commonly used types
pub use store::{TodoStore, FETCH_BATCH_LIMIT, FETCH_ERROR_MESSAGE};
pub use todo::{Todo, TodoId};

/// Failure modes of a todo source. None of these escape the store; callers
/// observe only the store's `error` flag.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP round-trip itself failed (DNS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}")]
    Status {
        /// Raw status code as reported by the endpoint.
        status: u16,
    },
    /// The response body was not a decodable todo batch.
    #[error("malformed todo batch: {0}")]
    Decode(String),
}

/// Read-only supplier of the initial todo batch.
///
/// A source performs exactly one fetch attempt per call: no retry, no
/// backoff, no cancellation. Overlapping calls get last-write-wins
/// semantics at the store.
pub trait TodoSource {
    /// Fetch a batch of todos in server order.
    fn fetch_batch(&self) -> Result<Vec<Todo>, FetchError>;
}

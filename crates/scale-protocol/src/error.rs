//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when decoding scale responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Response is too short to hold the mandatory fields.
    #[error("short response: expected at least {expected} bytes, got {actual}")]
    ShortResponse {
        /// Minimum length required.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },
}

//! Error types for the scale driver.

use std::io;
use std::time::Duration;

use scale_protocol::ProtocolError;
use thiserror::Error;

/// Failure to establish a connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The dial itself failed (refused, unreachable, bad address).
    #[error("failed to connect to scale at {address}: {source}")]
    Dial {
        /// Address that was dialed.
        address: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The dial did not complete in time.
    #[error("connecting to scale at {address} timed out after {timeout:?}")]
    Timeout {
        /// Address that was dialed.
        address: String,
        /// Configured connect timeout.
        timeout: Duration,
    },
}

/// Failure on an established (or missing) connection.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No connection is open.
    #[error("not connected")]
    NotConnected,

    /// Writing the command frame failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    /// Reading the response failed.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// The peer closed the connection before replying.
    #[error("connection closed by scale")]
    Closed,

    /// The command frame could not be written in time.
    #[error("write timed out after {0:?}")]
    WriteTimeout(Duration),

    /// No response arrived before the read deadline.
    #[error("read timed out after {0:?}")]
    ReadTimeout(Duration),

    /// Shutting the connection down failed.
    #[error("shutdown failed: {0}")]
    Shutdown(#[source] io::Error),
}

/// Errors returned by [`ScaleDriver`](crate::ScaleDriver) operations.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Opening the connection failed.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The exchange failed at the transport level.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Bytes arrived but could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl DriverError {
    /// Whether this error was caused by an expired timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DriverError::Connection(ConnectionError::Timeout { .. })
                | DriverError::Transport(TransportError::WriteTimeout(_))
                | DriverError::Transport(TransportError::ReadTimeout(_))
        )
    }
}

/// Result type alias for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

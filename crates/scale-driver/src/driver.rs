//! The transport-independent driver contract.

use async_trait::async_trait;
use scale_protocol::Reading;

use crate::error::DriverResult;

/// A connection to a weighing scale.
///
/// Implementations hold at most one connection and run one exchange at a
/// time. Methods take `&mut self`, so concurrent callers must serialize
/// access themselves.
#[async_trait]
pub trait ScaleDriver: Send {
    /// Open the connection. An already open connection is closed first.
    async fn open_connection(&mut self) -> DriverResult<()>;

    /// Send a "get weight" command and decode the reply.
    async fn read_weight(&mut self) -> DriverResult<Reading>;

    /// Close the connection. Closing when disconnected succeeds.
    async fn close_connection(&mut self) -> DriverResult<()>;

    /// Whether a connection is currently held.
    fn is_connected(&self) -> bool;
}

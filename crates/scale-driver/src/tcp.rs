//! TCP implementation of [`ScaleDriver`].

use std::io;

use async_trait::async_trait;
use scale_protocol::Reading;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::driver::ScaleDriver;
use crate::error::{ConnectionError, DriverResult, TransportError};
use crate::exchange::request_reading;

/// A scale reachable at a fixed `host:port`.
///
/// Dropping the driver closes any open socket.
#[derive(Debug)]
pub struct TcpScaleDriver {
    config: DriverConfig,
    stream: Option<TcpStream>,
}

impl TcpScaleDriver {
    /// Create a disconnected driver for `address` with default timeouts.
    pub fn new(address: impl Into<String>) -> Self {
        TcpScaleDriver::with_config(DriverConfig::new(address))
    }

    /// Create a disconnected driver from a full configuration.
    pub fn with_config(config: DriverConfig) -> Self {
        TcpScaleDriver {
            config,
            stream: None,
        }
    }

    /// The configured scale address.
    pub fn address(&self) -> &str {
        &self.config.address
    }

    /// The active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    async fn dial(&self) -> Result<TcpStream, ConnectionError> {
        let address = &self.config.address;
        match timeout(self.config.connect_timeout, TcpStream::connect(address.as_str())).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(source)) => Err(ConnectionError::Dial {
                address: address.clone(),
                source,
            }),
            Err(_) => Err(ConnectionError::Timeout {
                address: address.clone(),
                timeout: self.config.connect_timeout,
            }),
        }
    }
}

#[async_trait]
impl ScaleDriver for TcpScaleDriver {
    async fn open_connection(&mut self) -> DriverResult<()> {
        if self.stream.is_some() {
            debug!(address = %self.config.address, "replacing open scale connection");
            if let Err(e) = self.close_connection().await {
                warn!(address = %self.config.address, "discarding previous connection: {}", e);
            }
        }

        let stream = self.dial().await?;
        debug!(address = %self.config.address, "connected to scale");
        self.stream = Some(stream);
        Ok(())
    }

    async fn read_weight(&mut self) -> DriverResult<Reading> {
        let stream = self.stream.as_mut().ok_or(TransportError::NotConnected)?;
        request_reading(stream, self.config.write_timeout, self.config.read_timeout).await
    }

    async fn close_connection(&mut self) -> DriverResult<()> {
        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };

        debug!(address = %self.config.address, "closing scale connection");
        match stream.shutdown().await {
            Ok(()) => Ok(()),
            // The scale already dropped its side; the socket is released either way.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(TransportError::Shutdown(e).into()),
        }
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

//! # scale-driver
//!
//! Session layer for reading an electronic weighing scale over TCP.
//!
//! A driver owns at most one connection and performs one exchange at a time:
//! open, send the "get weight" frame, read the reply within a deadline, decode
//! it with [`scale_protocol`], close. There are no retries or reconnects;
//! callers decide what to do with each error.
//!
//! Drivers are not internally synchronized. Use one driver per task, or wrap
//! it in an external mutex.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scale_driver::{ScaleDriver, TcpScaleDriver};
//!
//! # async fn run() -> Result<(), scale_driver::DriverError> {
//! let mut driver = TcpScaleDriver::new("192.168.1.50:5001");
//! driver.open_connection().await?;
//! let reading = driver.read_weight().await;
//! driver.close_connection().await?;
//! println!("{}", reading?);
//! # Ok(())
//! # }
//! ```

mod config;
mod driver;
mod error;
pub mod exchange;
mod tcp;

pub use config::{DriverConfig, DEFAULT_TIMEOUT};
pub use driver::ScaleDriver;
pub use error::{ConnectionError, DriverError, DriverResult, TransportError};
pub use tcp::TcpScaleDriver;

// Re-export the codec types callers see in results.
pub use scale_protocol::{ProtocolError, Reading};

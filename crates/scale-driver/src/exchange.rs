//! One command/response exchange over any async byte stream.
//!
//! This is shared by every [`ScaleDriver`](crate::ScaleDriver)
//! implementation so the framing rules live in one place: one write of the
//! command frame, then one bounded read whose bytes are decoded as-is.

use std::time::Duration;

use scale_protocol::{CommandFrame, Reading, MAX_RESPONSE_LEN};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::trace;

use crate::error::{DriverResult, TransportError};

/// Send `command` and read a single response.
///
/// Performs exactly one read into a [`MAX_RESPONSE_LEN`] buffer. A reply
/// split across several TCP segments is not reassembled.
pub async fn exchange<S>(
    stream: &mut S,
    command: CommandFrame,
    write_timeout: Duration,
    read_timeout: Duration,
) -> Result<Vec<u8>, TransportError>
where
    S: AsyncRead + AsyncWrite + Unpin + ?Sized,
{
    let frame = command.encode();
    trace!(frame = %hex::encode(&frame), "sending command 0x{:02X}", command.code);

    match timeout(write_timeout, stream.write_all(&frame)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(TransportError::Write(e)),
        Err(_) => return Err(TransportError::WriteTimeout(write_timeout)),
    }

    let mut buf = vec![0u8; MAX_RESPONSE_LEN];
    let n = match timeout(read_timeout, stream.read(&mut buf)).await {
        Ok(Ok(0)) => return Err(TransportError::Closed),
        Ok(Ok(n)) => n,
        Ok(Err(e)) => return Err(TransportError::Read(e)),
        Err(_) => return Err(TransportError::ReadTimeout(read_timeout)),
    };
    buf.truncate(n);
    trace!(response = %hex::encode(&buf), "received {} bytes", n);

    Ok(buf)
}

/// Request and decode a weight reading.
pub async fn request_reading<S>(
    stream: &mut S,
    write_timeout: Duration,
    read_timeout: Duration,
) -> DriverResult<Reading>
where
    S: AsyncRead + AsyncWrite + Unpin + ?Sized,
{
    let raw = exchange(stream, CommandFrame::get_weight(), write_timeout, read_timeout).await?;
    Ok(Reading::decode(&raw)?)
}

//! Command frame encoding.
//!
//! Every command sent to the scale uses the same layout:
//!
//! ```text
//! +----+----+----+----+----+-----+--------+--------+
//! | F8 | 55 | CE | 01 | 00 | cmd | crc_lo | crc_hi |
//! +----+----+----+----+----+-----+--------+--------+
//! ```
//!
//! The checksum covers the command byte only, never the preamble.

use bytes::BufMut;

use crate::checksum::crc16_ccitt;
use crate::constants::*;

/// A single-byte command addressed to the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    /// Command code placed after the preamble.
    pub code: u8,
}

impl CommandFrame {
    /// Create a frame for an arbitrary command code.
    pub fn new(code: u8) -> Self {
        CommandFrame { code }
    }

    /// The "get weight" request.
    pub fn get_weight() -> Self {
        CommandFrame::new(CMD_GET_WEIGHT)
    }

    /// Checksum carried in the frame trailer.
    pub fn checksum(&self) -> u16 {
        crc16_ccitt(&[self.code])
    }

    /// Serialize the frame for transmission.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(COMMAND_FRAME_LEN);
        buf.extend_from_slice(&PREAMBLE);
        buf.put_u8(self.code);
        buf.put_u16_le(crc16_ccitt(&buf[PREAMBLE.len()..]));
        buf
    }
}

impl From<u8> for CommandFrame {
    fn from(code: u8) -> Self {
        CommandFrame::new(code)
    }
}

/// Build the outbound frame for `code`.
pub fn build_command(code: u8) -> Vec<u8> {
    CommandFrame::new(code).encode()
}

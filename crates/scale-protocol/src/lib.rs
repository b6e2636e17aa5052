//! Weighing Scale Wire Protocol
//!
//! This crate provides the frame codec for talking to an electronic weighing
//! scale over a byte stream. It performs no I/O: it builds outbound command
//! frames and decodes the raw bytes the scale sends back.
//!
//! # Protocol Overview
//!
//! Each exchange is a single command followed by a single response:
//!
//! - **Command** (host → scale): a fixed 5-byte preamble, one command byte and
//!   a CRC-16/CCITT of the command byte, low byte first.
//! - **Response** (scale → host): a status byte, the signed weight, the
//!   division, three status flags and, on extended replies, the tare.
//!
//! ```text
//! command:  F8 55 CE 01 00 | cmd | crc_lo crc_hi
//! response: status | weight (i32 LE) | div | stable | net | zero | [tare (i32 LE)]
//! ```
//!
//! Responses carry no checksum and are trusted as received.
//!
//! # Example
//!
//! ```rust
//! use scale_protocol::{build_command, Reading, CMD_GET_WEIGHT};
//!
//! let frame = build_command(CMD_GET_WEIGHT);
//! assert_eq!(frame.len(), 8);
//!
//! let raw = [0xAA, 0x39, 0x30, 0x00, 0x00, 2, 1, 0, 1, 0, 0, 0, 0];
//! let reading = Reading::decode(&raw).unwrap();
//! assert_eq!(reading.weight, 12345);
//! assert_eq!(reading.tare, None);
//! ```

mod checksum;
mod constants;
mod error;
mod frame;
mod reading;

pub use checksum::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use reading::*;

//! Protocol constants
//!
//! Fixed byte values, command codes and frame sizes used by the scale
//! protocol.

// ============================================================================
// Command Frame (host → scale)
// ============================================================================

/// Fixed preamble that starts every command frame.
pub const PREAMBLE: [u8; 5] = [0xF8, 0x55, 0xCE, 0x01, 0x00];

/// Request the current weight reading.
pub const CMD_GET_WEIGHT: u8 = 0x23;

/// Size of the checksum trailer of a command frame.
pub const CHECKSUM_SIZE: usize = 2;

/// Total size of a single-byte command frame.
pub const COMMAND_FRAME_LEN: usize = PREAMBLE.len() + 1 + CHECKSUM_SIZE;

// ============================================================================
// Response Frame (scale → host)
// ============================================================================

/// Minimum response length: status, weight, division and three flags.
pub const MIN_RESPONSE_LEN: usize = 13;

/// Response length from which the tare field is decoded.
pub const EXTENDED_RESPONSE_LEN: usize = 17;

/// Receive buffer size. A single read of at most this many bytes is performed.
pub const MAX_RESPONSE_LEN: usize = 1024;

/// Offset of the little-endian weight field.
pub const WEIGHT_OFFSET: usize = 1;
/// Offset of the division byte.
pub const DIVISION_OFFSET: usize = 5;
/// Offset of the stable flag.
pub const STABLE_OFFSET: usize = 6;
/// Offset of the net flag.
pub const NET_OFFSET: usize = 7;
/// Offset of the zero flag.
pub const ZERO_OFFSET: usize = 8;
/// Offset of the little-endian tare field.
pub const TARE_OFFSET: usize = 9;

/// Byte value that marks a status flag as set. Anything else reads as clear.
pub const FLAG_SET: u8 = 1;

// ============================================================================
// CRC-16/CCITT
// ============================================================================

/// Initial register value.
pub const CRC16_INIT: u16 = 0xFFFF;

/// Generator polynomial (MSB-first).
pub const CRC16_POLY: u16 = 0x1021;

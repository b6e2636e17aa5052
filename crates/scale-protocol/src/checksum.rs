//! CRC-16/CCITT checksum used on outbound command frames.

use crate::constants::{CRC16_INIT, CRC16_POLY};

/// Compute CRC-16/CCITT over `data`.
///
/// Register starts at `0xFFFF`, bits are processed MSB-first with polynomial
/// `0x1021`, and there is no final XOR. The scale expects this value
/// bit-for-bit.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc = CRC16_INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

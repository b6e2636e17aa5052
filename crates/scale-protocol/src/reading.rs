//! Weight readings decoded from scale responses.

use std::fmt;

use bytes::Buf;

use crate::constants::*;
use crate::error::ProtocolError;

/// A decoded "get weight" response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reading {
    /// Weight in device-native units.
    pub weight: i32,
    /// Scale graduation indicator.
    pub division: u8,
    /// Measurement has settled.
    pub stable: bool,
    /// Scale is in net (tared) mode.
    pub net: bool,
    /// Scale is at its zero point.
    pub zero: bool,
    /// Tare value. `None` when the response did not carry the extended
    /// field, which is distinct from a reported tare of zero.
    pub tare: Option<i32>,
}

impl Reading {
    /// Decode a reading from a raw response.
    ///
    /// Byte 0 is a status marker and is not interpreted. The tare is only
    /// decoded from responses of at least [`EXTENDED_RESPONSE_LEN`] bytes;
    /// shorter responses are valid and tare-less. Trailing bytes are ignored.
    pub fn decode(raw: &[u8]) -> Result<Self, ProtocolError> {
        if raw.len() < MIN_RESPONSE_LEN {
            log::trace!("short scale response ({} bytes): {:02X?}", raw.len(), raw);
            return Err(ProtocolError::ShortResponse {
                expected: MIN_RESPONSE_LEN,
                actual: raw.len(),
            });
        }

        let mut buf = &raw[WEIGHT_OFFSET..];
        let weight = buf.get_i32_le();
        let division = buf.get_u8();
        let stable = buf.get_u8() == FLAG_SET;
        let net = buf.get_u8() == FLAG_SET;
        let zero = buf.get_u8() == FLAG_SET;

        let tare = if raw.len() >= EXTENDED_RESPONSE_LEN {
            Some(buf.get_i32_le())
        } else {
            None
        };

        let reading = Reading {
            weight,
            division,
            stable,
            net,
            zero,
            tare,
        };
        log::trace!("decoded {}", reading);
        Ok(reading)
    }

    /// Whether the response carried a tare field.
    pub fn has_tare(&self) -> bool {
        self.tare.is_some()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weight={} division={} stable={} net={} zero={}",
            self.weight, self.division, self.stable, self.net, self.zero
        )?;
        match self.tare {
            Some(tare) => write!(f, " tare={}", tare),
            None => write!(f, " tare=-"),
        }
    }
}

/// Decode a raw response. Equivalent to [`Reading::decode`].
pub fn parse_response(raw: &[u8]) -> Result<Reading, ProtocolError> {
    Reading::decode(raw)
}

//! Fixed-layout frame codec for the feather sensor boards.
//!
//! Every frame is exactly nine bytes:
//!
//! | Bytes | Field       | Encoding            |
//! |-------|-------------|---------------------|
//! | 0     | feather_id  | u8                  |
//! | 1-2   | temperature | u16 BE, value * 100 |
//! | 3-4   | co2         | u16 BE, value * 100 |
//! | 5-6   | tvoc        | u16 BE, value * 100 |
//! | 7-8   | battery     | u16 BE, value * 100 |
//!
//! Trailing bytes past the ninth are ignored. Shorter frames fail with
//! [`PayloadError::FrameTooShort`].

use crate::error::{PayloadError, Result};
use crate::{DecodedPayload, PayloadDecoder};
use serde::{Deserialize, Serialize};

/// Fixed frame length: id byte plus four u16 fields
pub const FRAME_LEN: usize = 9;

/// Divisor applied to every encoded u16 field
const FIELD_SCALE: f64 = 100.0;

/// One decoded feather frame. All fields are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatherFrame {
    pub feather_id: u8,
    pub temperature: f64,
    pub co2: f64,
    pub tvoc: f64,
    pub battery: f64,
}

/// Decoder for the fixed nine-byte feather frame
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatherDecoder;

impl FeatherDecoder {
    pub fn new() -> Self {
        Self
    }

    fn read_scaled(bytes: &[u8], offset: usize) -> f64 {
        f64::from(u16::from_be_bytes([bytes[offset], bytes[offset + 1]])) / FIELD_SCALE
    }
}

impl PayloadDecoder for FeatherDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedPayload> {
        if bytes.len() < FRAME_LEN {
            return Err(PayloadError::FrameTooShort);
        }

        Ok(DecodedPayload::Feather(FeatherFrame {
            feather_id: bytes[0],
            temperature: Self::read_scaled(bytes, 1),
            co2: Self::read_scaled(bytes, 3),
            tvoc: Self::read_scaled(bytes, 5),
            battery: Self::read_scaled(bytes, 7),
        }))
    }
}

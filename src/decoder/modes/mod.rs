//! QR code data mode decoders
//!
//! This module contains decoders for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Uppercase letters, digits, and nine symbols
//! - Byte: 8-bit values, one output code point each

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use crate::error::Result;
use crate::models::Version;

use alphanumeric::AlphanumericDecoder;
use byte::ByteDecoder;
use numeric::NumericDecoder;

/// Segment mode selected by the 4-bit mode indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
    /// Any other indicator; nothing is decoded
    Unknown,
}

impl EncodingMode {
    /// Mode for a 4-bit indicator
    pub fn from_indicator(indicator: u16) -> Self {
        match indicator {
            0b0001 => EncodingMode::Numeric,
            0b0010 => EncodingMode::Alphanumeric,
            0b0100 => EncodingMode::Byte,
            _ => EncodingMode::Unknown,
        }
    }

    /// Width in bits of the character-count field
    pub fn length_bits(&self, version: Version) -> usize {
        let tier = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            EncodingMode::Numeric => [10, 12, 14][tier],
            EncodingMode::Alphanumeric => [9, 11, 13][tier],
            EncodingMode::Byte => [8, 16, 16][tier],
            EncodingMode::Unknown => 0,
        }
    }

    /// Width in bits of one full payload unit
    pub fn unit_bits(&self) -> usize {
        match self {
            EncodingMode::Numeric => 10,
            EncodingMode::Alphanumeric => 11,
            EncodingMode::Byte => 8,
            EncodingMode::Unknown => 0,
        }
    }

    /// Bits needed to carry `length` characters in this mode
    pub fn payload_bits(&self, length: usize) -> usize {
        match self {
            EncodingMode::Numeric => {
                10 * (length / 3) + [0, 4, 7][length % 3]
            }
            EncodingMode::Alphanumeric => 11 * (length / 2) + 6 * (length % 2),
            EncodingMode::Byte => 8 * length,
            EncodingMode::Unknown => 0,
        }
    }

    /// Decode `length` characters from `reader`
    pub(crate) fn decode_payload(
        &self,
        reader: &mut BitReader<'_>,
        length: usize,
        out: &mut Payload,
    ) -> Result<()> {
        match self {
            EncodingMode::Numeric => NumericDecoder::decode(reader, length, out),
            EncodingMode::Alphanumeric => AlphanumericDecoder::decode(reader, length, out),
            EncodingMode::Byte => ByteDecoder::decode(reader, length, out),
            EncodingMode::Unknown => Ok(()),
        }
    }
}

/// Decoded units and the text they spell
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Payload {
    pub units: Vec<u16>,
    pub text: String,
}

/// MSB-first reader over codeword bytes
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    idx: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, idx: 0 }
    }

    pub fn remaining(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.idx)
    }

    /// Read `n` (at most 16) bits; None if fewer remain
    pub fn read_bits(&mut self, n: usize) -> Option<u16> {
        if n > 16 || n > self.remaining() {
            return None;
        }
        let mut val = 0u16;
        for _ in 0..n {
            let bit = (self.bytes[self.idx / 8] >> (7 - self.idx % 8)) & 1;
            val = (val << 1) | bit as u16;
            self.idx += 1;
        }
        Some(val)
    }
}

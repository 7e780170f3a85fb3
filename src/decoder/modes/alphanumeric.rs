/// Alphanumeric mode decoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use super::{BitReader, EncodingMode, Payload};
use crate::error::{DecodeError, Result};

pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    pub fn decode(reader: &mut BitReader<'_>, char_count: usize, out: &mut Payload) -> Result<()> {
        for _ in 0..char_count / 2 {
            let Some(value) = reader.read_bits(11) else {
                return Ok(());
            };
            if value >= 45 * 45 {
                return Err(invalid(value));
            }
            out.text.push(ALPHANUMERIC_TABLE[(value / 45) as usize]);
            out.text.push(ALPHANUMERIC_TABLE[(value % 45) as usize]);
            out.units.push(value);
        }

        if char_count % 2 == 1 {
            let Some(value) = reader.read_bits(6) else {
                return Ok(());
            };
            if value >= 45 {
                return Err(invalid(value));
            }
            out.text.push(ALPHANUMERIC_TABLE[value as usize]);
            out.units.push(value);
        }

        Ok(())
    }
}

fn invalid(value: u16) -> DecodeError {
    DecodeError::InvalidUnit {
        mode: EncodingMode::Alphanumeric,
        value,
    }
}

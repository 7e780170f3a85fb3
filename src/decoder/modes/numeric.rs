/// Numeric mode decoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use super::{BitReader, EncodingMode, Payload};
use crate::error::{DecodeError, Result};

pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode up to `digit_count` digits; stops early if the stream runs out
    pub fn decode(reader: &mut BitReader<'_>, digit_count: usize, out: &mut Payload) -> Result<()> {
        let mut digits_remaining = digit_count;

        while digits_remaining > 0 {
            let group_size = digits_remaining.min(3);
            let (bits_needed, limit) = match group_size {
                3 => (10, 1000),
                2 => (7, 100),
                _ => (4, 10),
            };

            let Some(value) = reader.read_bits(bits_needed) else {
                break;
            };
            if value >= limit {
                return Err(DecodeError::InvalidUnit {
                    mode: EncodingMode::Numeric,
                    value,
                });
            }

            out.text
                .push_str(&format!("{:0width$}", value, width = group_size));
            out.units.push(value);
            digits_remaining -= group_size;
        }

        Ok(())
    }
}

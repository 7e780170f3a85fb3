/// Byte mode decoder (Mode 0100)
/// Each 8-bit unit becomes one code point (U+0000..U+00FF)
use super::{BitReader, Payload};
use crate::error::Result;

pub struct ByteDecoder;

impl ByteDecoder {
    pub fn decode(reader: &mut BitReader<'_>, byte_count: usize, out: &mut Payload) -> Result<()> {
        for _ in 0..byte_count {
            let Some(value) = reader.read_bits(8) else {
                break;
            };
            out.text.push(char::from(value as u8));
            out.units.push(value);
        }
        Ok(())
    }
}

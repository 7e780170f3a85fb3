//! Single-segment decoding: mode indicator, length field, payload

use log::{debug, warn};

use crate::decoder::config::TruncationPolicy;
use crate::decoder::modes::{BitReader, EncodingMode, Payload};
use crate::error::{DecodeError, Result};
use crate::models::Version;

/// Decoded segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub mode: EncodingMode,
    pub length: usize,
    pub payload: Payload,
}

#[derive(Debug, Clone, Copy)]
enum State {
    ReadMode,
    ReadLength(EncodingMode),
    ReadPayload(EncodingMode, usize),
    Done(EncodingMode, usize),
}

pub struct SegmentDecoder {
    version: Version,
    truncation: TruncationPolicy,
}

impl SegmentDecoder {
    pub fn new(version: Version, truncation: TruncationPolicy) -> Self {
        Self {
            version,
            truncation,
        }
    }

    /// Decode the segment at the start of the ordered data codewords
    pub fn decode(&self, data_codewords: &[u8]) -> Result<Segment> {
        let mut reader = BitReader::new(data_codewords);
        let mut payload = Payload::default();
        let mut state = State::ReadMode;

        loop {
            state = match state {
                State::ReadMode => {
                    let indicator = self.read(&mut reader, 4)?;
                    match EncodingMode::from_indicator(indicator) {
                        EncodingMode::Unknown => {
                            debug!("segment: unknown mode indicator 0b{:04b}", indicator);
                            State::Done(EncodingMode::Unknown, 0)
                        }
                        mode => State::ReadLength(mode),
                    }
                }
                State::ReadLength(mode) => {
                    let width = mode.length_bits(self.version);
                    let length = self.read(&mut reader, width)? as usize;
                    debug!("segment: mode={:?} length={}", mode, length);
                    State::ReadPayload(mode, length)
                }
                State::ReadPayload(mode, length) => {
                    let needed = mode.payload_bits(length);
                    let available = reader.remaining();
                    if needed > available {
                        match self.truncation {
                            TruncationPolicy::Error => {
                                return Err(DecodeError::InsufficientData { needed, available });
                            }
                            TruncationPolicy::Tolerate => warn!(
                                "segment needs {} bits but only {} remain, decoding what fits",
                                needed, available
                            ),
                        }
                    }
                    mode.decode_payload(&mut reader, length, &mut payload)?;
                    State::Done(mode, length)
                }
                State::Done(mode, length) => {
                    return Ok(Segment {
                        mode,
                        length,
                        payload,
                    });
                }
            };
        }
    }

    fn read(&self, reader: &mut BitReader<'_>, n: usize) -> Result<u16> {
        match reader.read_bits(n) {
            Some(value) => Ok(value),
            None if self.truncation == TruncationPolicy::Tolerate => Ok(0),
            None => Err(DecodeError::InsufficientData {
                needed: n,
                available: reader.remaining(),
            }),
        }
    }
}

//! Error types for grid decoding

use crate::decoder::modes::EncodingMode;

/// Errors that can occur while validating or decoding a module grid
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A row's length differs from the number of rows
    #[error("grid is not square: {rows} rows but row {row} has {len} modules")]
    NotSquare {
        /// Number of rows in the grid.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },

    /// Side length is outside [21, 177] or not 1 mod 4
    #[error("invalid grid size {0}: expected 4*version+17 for version 1-40")]
    InvalidSize(usize),

    /// Data-area geometry does not match the version's codeword capacity
    #[error("data area geometry mismatch: expected {expected} modules, found {actual}")]
    Geometry {
        /// Module count implied by the version's codeword table.
        expected: usize,
        /// Module count produced by the function-pattern map.
        actual: usize,
    },

    /// The codeword stream ended before the declared segment length was read
    #[error("insufficient data: segment needs {needed} bits, {available} available")]
    InsufficientData {
        /// Bits required by the declared segment length.
        needed: usize,
        /// Bits left in the data codewords.
        available: usize,
    },

    /// A payload unit does not map to any character of its mode
    #[error("invalid {mode:?} unit value {value}")]
    InvalidUnit {
        /// Mode of the segment being decoded.
        mode: EncodingMode,
        /// The raw unit value read from the stream.
        value: u16,
    },

    /// Text grid could not be parsed
    #[error("grid parse error: {0}")]
    Parse(String),

    /// Image could not be loaded or sampled
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error while reading an input
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for grid decoding
pub type Result<T> = std::result::Result<T, DecodeError>;

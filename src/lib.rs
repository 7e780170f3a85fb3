//! qrgrid - structural QR code decoder
//!
//! Decodes the structural layer of a QR code from a square matrix of
//! modules: format information (BCH), mask removal, the data-area/function
//! pattern partition, zigzag placement, de-interleaving and single-segment
//! numeric/alphanumeric/byte decoding. Reed-Solomon correction of payload
//! codewords is not performed.
//!
//! ```
//! use qrgrid::{BitGrid, DecodeError};
//!
//! let blank = BitGrid::new(vec![vec![false; 21]; 21])?;
//! assert_eq!(blank.version().number(), 1);
//! assert!(matches!(
//!     BitGrid::new(vec![vec![false; 22]; 22]),
//!     Err(DecodeError::InvalidSize(22))
//! ));
//! # Ok::<(), DecodeError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Structural decoding stages (format, masking, placement, segments)
pub mod decoder;
/// Error type and result alias
pub mod error;
/// Core data structures (BitGrid, BitMatrix, Version, ECLevel, ...)
pub mod models;
/// Grid input/output adapters (text grids, rendered images)
pub mod tools;

pub use decoder::config::{DecodeOptions, TruncationPolicy};
pub use decoder::modes::EncodingMode;
pub use decoder::qr_decoder::QrDecoder;
pub use error::{DecodeError, Result};
pub use models::{BitGrid, BitMatrix, DecodedSymbol, ECLevel, MaskIndex, Version};

use rayon::prelude::*;

/// Decode one grid with options from the environment
pub fn decode(grid: &BitGrid) -> Result<DecodedSymbol> {
    QrDecoder::default().decode(grid)
}

/// Decode one grid with explicit options
pub fn decode_with(grid: &BitGrid, options: DecodeOptions) -> Result<DecodedSymbol> {
    QrDecoder::new(options).decode(grid)
}

/// Decode many grids in parallel; results keep the input order
pub fn decode_batch(grids: &[BitGrid]) -> Vec<Result<DecodedSymbol>> {
    let decoder = QrDecoder::default();
    grids.par_iter().map(|grid| decoder.decode(grid)).collect()
}

//! QR code structural decoding
//!
//! This module contains every stage between a module grid and a message:
//! - Format and version information (BCH nearest-codeword search)
//! - Function-pattern map and mask removal
//! - Zigzag traversal, codeword assembly and de-interleaving
//! - Data mode decoding (numeric, alphanumeric, byte)

/// BCH codes for format and version info
pub mod bch;
/// Zigzag traversal and codeword assembly
pub mod bitstream;
pub mod config;
/// Format information extraction (mask index, EC level)
pub mod format;
/// Data-area map (finder/timing/format/alignment/version excluded)
pub mod function_mask;
/// Cross-block interleaving
pub mod interleave;
/// Data mode decoders (numeric, alphanumeric, byte)
pub mod modes;
/// Main QR decoder that orchestrates the decoding pipeline
pub mod qr_decoder;
/// Mode/length/payload state machine
pub mod segment;
/// QR specification tables (blocks, capacities, alignment)
pub mod tables;
/// Data-area masking
pub mod unmask;
/// Version information extraction (versions 7-40)
pub mod version;

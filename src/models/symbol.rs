use std::fmt;

use crate::decoder::modes::EncodingMode;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Version whose side length is `size`
    pub fn from_size(size: usize) -> Option<Self> {
        if !(21..=177).contains(&size) || size % 4 != 1 {
            return None;
        }
        Self::new(((size - 17) / 4) as u8)
    }

    /// Version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Iterate over every supported version
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Level selected by the 2-bit field of a masked format codeword
    pub fn from_format_field(bits: u16) -> Self {
        [ECLevel::H, ECLevel::Q, ECLevel::M, ECLevel::L][(bits & 0b11) as usize]
    }

    /// Value of the 2-bit field of a masked format codeword
    pub fn format_field(&self) -> u16 {
        match self {
            ECLevel::H => 0,
            ECLevel::Q => 1,
            ECLevel::M => 2,
            ECLevel::L => 3,
        }
    }

    /// Row index into the block tables (L, M, Q, H order)
    pub(crate) fn table_index(&self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }

    /// All levels, in table order
    pub fn all() -> [ECLevel; 4] {
        [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H]
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Mask index (0-7) as carried by the masked format codeword
///
/// The numbering follows the raw 3-bit field after the format mask is left
/// in place; [`MaskIndex::iso_pattern`] converts to ISO/IEC 18004 numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskIndex(u8);

impl MaskIndex {
    /// Create a mask index from the low three bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0x07)
    }

    /// Raw index (0-7)
    pub fn index(&self) -> u8 {
        self.0
    }

    /// ISO/IEC 18004 mask reference for the same predicate
    pub fn iso_pattern(&self) -> u8 {
        self.0 ^ 0b101
    }

    /// Whether the module at (i, j) is flipped by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self.0 {
            0 => (i * j) % 2 + (i * j) % 3 == 0,
            1 => (i / 2 + j / 3) % 2 == 0,
            2 => ((i * j) % 3 + i + j) % 2 == 0,
            3 => ((i * j) % 3 + i * j) % 2 == 0,
            4 => i % 2 == 0,
            5 => (i + j) % 2 == 0,
            6 => (i + j) % 3 == 0,
            _ => j % 3 == 0,
        }
    }

    /// All eight masks
    pub fn all() -> impl Iterator<Item = MaskIndex> {
        (0..8).map(MaskIndex)
    }
}

impl fmt::Display for MaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of decoding one module grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Version implied by the grid size
    pub version: Version,
    /// Error correction level from format information
    pub ec_level: ECLevel,
    /// Mask index from format information
    pub mask: MaskIndex,
    /// Bit errors corrected across both format copies
    pub format_distance: u32,
    /// Version read from the version-information blocks (versions 7+)
    pub version_info: Option<Version>,
    /// De-interleaved data codewords, block-major
    pub data_codewords: Vec<u8>,
    /// Segment mode
    pub mode: EncodingMode,
    /// Declared segment length (characters, digits or bytes)
    pub length: usize,
    /// Raw payload unit values in read order
    pub units: Vec<u16>,
    /// Decoded message
    pub message: String,
}

impl fmt::Display for DecodedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version={} level={} mask={} mode={:?} length={} message={:?}",
            self.version, self.ec_level, self.mask, self.mode, self.length, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
        assert_eq!(Version::from_size(57).map(|v| v.number()), Some(10));
        assert!(Version::from_size(58).is_none());
    }

    #[test]
    fn test_ec_level_field() {
        assert_eq!(ECLevel::from_format_field(0b00), ECLevel::H);
        assert_eq!(ECLevel::from_format_field(0b01), ECLevel::Q);
        assert_eq!(ECLevel::from_format_field(0b10), ECLevel::M);
        assert_eq!(ECLevel::from_format_field(0b11), ECLevel::L);
        for level in ECLevel::all() {
            assert_eq!(ECLevel::from_format_field(level.format_field()), level);
        }
    }

    #[test]
    fn test_mask_predicates() {
        let checker = MaskIndex::from_bits(5);
        assert!(checker.is_masked(0, 0));
        assert!(!checker.is_masked(0, 1));
        assert!(checker.is_masked(1, 1));
        assert_eq!(checker.iso_pattern(), 0);

        let columns = MaskIndex::from_bits(7);
        assert!(columns.is_masked(4, 3));
        assert!(!columns.is_masked(4, 4));
    }

    #[test]
    fn test_masks_have_period_six() {
        for mask in MaskIndex::all() {
            for i in 0..12 {
                for j in 0..12 {
                    assert_eq!(mask.is_masked(i, j), mask.is_masked(i % 6, j % 6));
                }
            }
        }
    }

    #[test]
    fn test_iso_numbering_matches_reference_predicates() {
        // ISO reference predicates, indexed by ISO mask number
        let iso: [fn(usize, usize) -> bool; 8] = [
            |i, j| (i + j) % 2 == 0,
            |i, _| i % 2 == 0,
            |_, j| j % 3 == 0,
            |i, j| (i + j) % 3 == 0,
            |i, j| (i / 2 + j / 3) % 2 == 0,
            |i, j| (i * j) % 2 + (i * j) % 3 == 0,
            |i, j| ((i * j) % 2 + (i * j) % 3) % 2 == 0,
            |i, j| ((i + j) % 2 + (i * j) % 3) % 2 == 0,
        ];
        for mask in MaskIndex::all() {
            let reference = iso[mask.iso_pattern() as usize];
            for i in 0..6 {
                for j in 0..6 {
                    assert_eq!(mask.is_masked(i, j), reference(i, j));
                }
            }
        }
    }
}

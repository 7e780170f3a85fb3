/// Format information extraction (error correction level, mask index)
use std::sync::OnceLock;

use log::debug;

use crate::decoder::bch::{self, FORMAT_GENERATOR};
use crate::models::{BitGrid, ECLevel, MaskIndex, Version};

/// XOR mask applied to every format codeword
pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;
/// Format info is 15 bits (5 data + 10 ECC)
pub const FORMAT_BITS: usize = 15;

/// Module positions of the two format copies, most significant bit first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCoordinates {
    /// Row 8: left of the top-left finder, then under the top-right finder
    pub horizontal: [(usize, usize); FORMAT_BITS],
    /// Column 8: right of the bottom-left finder, then beside the top-left finder
    pub vertical: [(usize, usize); FORMAT_BITS],
}

impl FormatCoordinates {
    /// Coordinates for a grid of side `size`
    pub fn new(size: usize) -> Self {
        let mut horizontal = [(0, 0); FORMAT_BITS];
        let mut vertical = [(0, 0); FORMAT_BITS];

        // Bits 14..8: row 8, columns 0-5 and 7 (column 6 is timing)
        for (slot, col) in [0, 1, 2, 3, 4, 5, 7].into_iter().enumerate() {
            horizontal[slot] = (8, col);
        }
        // Bits 7..0: row 8, last eight columns
        for i in 0..8 {
            horizontal[7 + i] = (8, size - 8 + i);
        }

        // Bits 14..8: column 8, bottom seven rows, bottom-up
        for i in 0..7 {
            vertical[i] = (size - 1 - i, 8);
        }
        // Bits 7..0: column 8, rows 8 down to 0 skipping timing row 6
        for (slot, row) in [8, 7, 5, 4, 3, 2, 1, 0].into_iter().enumerate() {
            vertical[7 + slot] = (row, 8);
        }

        Self {
            horizontal,
            vertical,
        }
    }

    /// Cached coordinates for a version
    pub fn for_version(version: Version) -> &'static FormatCoordinates {
        static CACHE: OnceLock<Vec<FormatCoordinates>> = OnceLock::new();
        let cache = CACHE.get_or_init(|| Version::all().map(|v| Self::new(v.size())).collect());
        &cache[version.number() as usize - 1]
    }

    /// Both copies, horizontal first
    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.horizontal.iter().chain(self.vertical.iter())
    }
}

/// The 32 valid masked format codewords, indexed by 5-bit format value
pub fn codeword_table() -> &'static [u32; 32] {
    static TABLE: OnceLock<[u32; 32]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u32; 32];
        for (value, entry) in table.iter_mut().enumerate() {
            *entry = bch::encode(value as u32, FORMAT_GENERATOR) ^ FORMAT_MASK as u32;
        }
        table
    })
}

/// Decoded format information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask: MaskIndex,
    /// Winning masked codeword
    pub codeword: u16,
    /// Bits that differ from the winning codeword across both copies
    pub distance: u32,
}

impl FormatInfo {
    /// Read both copies from the grid and pick the nearest valid codeword
    pub fn extract(grid: &BitGrid, coords: &FormatCoordinates) -> Self {
        let horizontal = read_bits(grid, &coords.horizontal);
        let vertical = read_bits(grid, &coords.vertical);
        let info = Self::decode(horizontal, vertical);
        debug!(
            "format: horizontal=0b{:015b} vertical=0b{:015b} -> level={} mask={} distance={}",
            horizontal, vertical, info.ec_level, info.mask, info.distance
        );
        info
    }

    /// Decode two observed 15-bit copies
    pub fn decode(horizontal: u16, vertical: u16) -> Self {
        let table = codeword_table();
        let (value, distance) = bch::nearest(table, &[horizontal as u32, vertical as u32]);
        Self::from_codeword(table[value] as u16, distance)
    }

    /// Fields of a masked format codeword
    pub fn from_codeword(codeword: u16, distance: u32) -> Self {
        Self {
            ec_level: ECLevel::from_format_field(codeword >> 13),
            mask: MaskIndex::from_bits(((codeword >> 10) & 0x07) as u8),
            codeword,
            distance,
        }
    }

    /// Masked codeword carrying `ec_level` and `mask`
    pub fn codeword_for(ec_level: ECLevel, mask: MaskIndex) -> u16 {
        let field = (ec_level.format_field() << 3) | mask.index() as u16;
        codeword_table()
            .iter()
            .map(|&c| c as u16)
            .find(|c| c >> 10 == field)
            .unwrap_or_default()
    }
}

fn read_bits(grid: &BitGrid, coords: &[(usize, usize)]) -> u16 {
    coords
        .iter()
        .fold(0u16, |bits, &(row, col)| (bits << 1) | grid.get(row, col) as u16)
}

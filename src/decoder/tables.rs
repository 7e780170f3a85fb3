use std::sync::OnceLock;

use crate::models::{ECLevel, Version};

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// Second alignment coordinate per version; index 0 and 1 unused.
const ALIGNMENT_SECOND_COORDINATE: [u8; 41] = [
    0, 0, 18, 22, 26, 30, 34, 22, 24, 26, 28, 30, 32, 34, 26, 26, 26, 30, 30, 30, 34, 28, 26, 30,
    28, 32, 30, 34, 26, 30, 26, 30, 34, 30, 34, 30, 24, 28, 32, 26, 30,
];

/// Error correction block layout for one (version, level)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    pub num_blocks: usize,
    pub ecc_per_block: usize,
}

pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.table_index();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Modules available for codewords and remainder bits
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + error correction) of a version
pub fn total_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Data-area modules left after the last full codeword
pub fn remainder_bits(version: Version) -> usize {
    raw_data_modules(version) % 8
}

/// Data codewords of a (version, level)
pub fn total_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    total_codewords(version) - info.num_blocks * info.ecc_per_block
}

/// Data codeword count of each block, short blocks first
pub fn data_codewords_per_block(version: Version, ec_level: ECLevel) -> &'static [usize] {
    static TABLE: OnceLock<Vec<Vec<usize>>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut rows = Vec::with_capacity(40 * 4);
        for v in Version::all() {
            for level in ECLevel::all() {
                let blocks = ec_block_info(v, level).num_blocks;
                let data = total_data_codewords(v, level);
                let short = data / blocks;
                let long_blocks = data % blocks;
                rows.push(
                    (0..blocks)
                        .map(|b| if b < blocks - long_blocks { short } else { short + 1 })
                        .collect(),
                );
            }
        }
        rows
    });
    &table[(version.number() as usize - 1) * 4 + ec_level.table_index()]
}

/// Alignment pattern center coordinates (rows and columns alike)
pub fn alignment_coordinates(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_coordinates = v / 7 + 2;
    let second = ALIGNMENT_SECOND_COORDINATE[v] as usize;
    let last = version.size() - 7;

    let mut coordinates = Vec::with_capacity(num_coordinates);
    coordinates.push(6);
    coordinates.push(second);
    let steps = num_coordinates - 2;
    for k in 1..=steps {
        coordinates.push(second + (last - second) * k / steps);
    }
    coordinates
}

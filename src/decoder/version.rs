/// Version information extraction for QR codes v7+
use std::sync::OnceLock;

use log::{debug, warn};

use crate::decoder::bch::{self, VERSION_GENERATOR};
use crate::models::{BitGrid, Version};

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub const VERSION_INFO_BITS: usize = 18;

/// Valid version codewords for versions 7-40, index 0 is version 7
fn codeword_table() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| (7..=40).map(|v| bch::encode(v, VERSION_GENERATOR)).collect())
}

/// Codeword stored in the version blocks of `version`
pub fn codeword_for(version: Version) -> Option<u32> {
    let n = version.number();
    (n >= 7).then(|| codeword_table()[n as usize - 7])
}

/// Position of version bit `i` (LSB first) in the top-right block
pub fn top_right_position(size: usize, i: usize) -> (usize, usize) {
    (i / 3, size - 11 + i % 3)
}

/// Position of version bit `i` (LSB first) in the bottom-left block
pub fn bottom_left_position(size: usize, i: usize) -> (usize, usize) {
    (size - 11 + i % 3, i / 3)
}

pub struct VersionInfo;

impl VersionInfo {
    /// Decode both version blocks; None below version 7
    pub fn extract(grid: &BitGrid) -> Option<(Version, u32)> {
        let size = grid.size();
        if grid.version().number() < 7 {
            return None;
        }

        let top_right = read_bits(grid, |i| top_right_position(size, i));
        let bottom_left = read_bits(grid, |i| bottom_left_position(size, i));

        let (index, distance) = bch::nearest(codeword_table(), &[top_right, bottom_left]);
        let decoded = Version::new(index as u8 + 7)?;
        debug!(
            "version info: top_right=0b{:018b} bottom_left=0b{:018b} -> {} (distance {})",
            top_right, bottom_left, decoded, distance
        );
        if decoded != grid.version() {
            warn!(
                "version info says {} but grid size {} implies {}",
                decoded,
                size,
                grid.version()
            );
        }
        Some((decoded, distance))
    }
}

fn read_bits(grid: &BitGrid, position: impl Fn(usize) -> (usize, usize)) -> u32 {
    (0..VERSION_INFO_BITS).rev().fold(0u32, |bits, i| {
        let (row, col) = position(i);
        (bits << 1) | grid.get(row, col) as u32
    })
}

/// Zigzag traversal of the data area and codeword assembly
use std::sync::OnceLock;

use crate::decoder::function_mask::DataAreaMap;
use crate::decoder::tables::{remainder_bits, total_codewords};
use crate::error::{DecodeError, Result};
use crate::models::{BitMatrix, Version};

/// Data-area coordinates in placement order
pub struct ZigzagScanner;

impl ZigzagScanner {
    /// Visit column pairs right to left, alternating up and down
    pub fn scan(area: &DataAreaMap) -> Vec<(usize, usize)> {
        let dimension = area.size();
        let mut coords = Vec::with_capacity(area.data_modules_count());

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            let right = col as usize;
            let left = right - 1;
            let mut visit = |row: usize| {
                for c in [right, left] {
                    if area.is_data(row, c) {
                        coords.push((row, c));
                    }
                }
            };

            if upward {
                (0..dimension).rev().for_each(&mut visit);
            } else {
                (0..dimension).for_each(&mut visit);
            }

            upward = !upward;
            col -= 2;
        }

        coords
    }

    /// Cached scan order for a version, checked against the codeword capacity
    pub fn for_version(version: Version) -> Result<&'static [(usize, usize)]> {
        static CACHE: OnceLock<Vec<Vec<(usize, usize)>>> = OnceLock::new();
        let cache = CACHE.get_or_init(|| {
            Version::all()
                .map(|v| Self::scan(DataAreaMap::for_version(v)))
                .collect()
        });
        let coords = &cache[version.number() as usize - 1];

        let expected = 8 * total_codewords(version) + remainder_bits(version);
        if coords.len() != expected {
            return Err(DecodeError::Geometry {
                expected,
                actual: coords.len(),
            });
        }
        Ok(coords)
    }
}

/// Group scan-ordered module bits into `count` codewords, MSB first
pub fn assemble(matrix: &BitMatrix, coords: &[(usize, usize)], count: usize) -> Result<Vec<u8>> {
    if coords.len() < count * 8 {
        return Err(DecodeError::Geometry {
            expected: count * 8,
            actual: coords.len(),
        });
    }
    Ok(coords[..count * 8]
        .chunks_exact(8)
        .map(|group| {
            group
                .iter()
                .fold(0u8, |byte, &(row, col)| (byte << 1) | matrix.get(row, col) as u8)
        })
        .collect())
}

use std::sync::OnceLock;

use crate::decoder::format::FormatCoordinates;
use crate::decoder::tables::alignment_coordinates;
use crate::models::{BitMatrix, Version};

/// Data-area map for a specific QR version.
/// true = data module, false = function pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAreaMap {
    data: BitMatrix,
    version: Version,
}

impl DataAreaMap {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut data = BitMatrix::filled(size, size);

        // Finder patterns + separators
        clear_block(&mut data, 0, 0, 8, 8);
        clear_block(&mut data, 0, size - 8, 8, 8);
        clear_block(&mut data, size - 8, 0, 8, 8);

        // Alignment patterns; centers already cleared sit on a finder
        let align = alignment_coordinates(version);
        for &row in &align {
            for &col in &align {
                if data.get(row, col) {
                    clear_block(&mut data, row - 2, col - 2, 5, 5);
                }
            }
        }

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            data.set(6, i, false);
            data.set(i, 6, false);
        }

        for &(row, col) in FormatCoordinates::for_version(version).iter() {
            data.set(row, col, false);
        }

        // Dark module
        data.set(size - 8, 8, false);

        // Version info (v7+)
        if version.number() >= 7 {
            clear_block(&mut data, 0, size - 11, 6, 3);
            clear_block(&mut data, size - 11, 0, 3, 6);
        }

        Self { data, version }
    }

    /// Cached map for a version
    pub fn for_version(version: Version) -> &'static DataAreaMap {
        static CACHE: OnceLock<Vec<DataAreaMap>> = OnceLock::new();
        let cache = CACHE.get_or_init(|| Version::all().map(Self::new).collect());
        &cache[version.number() as usize - 1]
    }

    pub fn size(&self) -> usize {
        self.data.rows()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_data(&self, row: usize, col: usize) -> bool {
        self.data.get(row, col)
    }

    pub fn data_modules_count(&self) -> usize {
        self.data.count_ones()
    }
}

fn clear_block(data: &mut BitMatrix, top: usize, left: usize, height: usize, width: usize) {
    for row in top..top + height {
        for col in left..left + width {
            data.set(row, col, false);
        }
    }
}

/// Main QR decoder - wires the structural stages together
use log::debug;

use crate::decoder::bitstream::{ZigzagScanner, assemble};
use crate::decoder::config::DecodeOptions;
use crate::decoder::format::{FormatCoordinates, FormatInfo};
use crate::decoder::function_mask::DataAreaMap;
use crate::decoder::interleave::deinterleave;
use crate::decoder::segment::SegmentDecoder;
use crate::decoder::tables::{data_codewords_per_block, total_codewords};
use crate::decoder::unmask::apply_mask;
use crate::decoder::version::VersionInfo;
use crate::error::Result;
use crate::models::{BitGrid, DecodedSymbol};

/// Main QR decoder that processes a validated module grid
#[derive(Debug, Clone, Copy, Default)]
pub struct QrDecoder {
    options: DecodeOptions,
}

impl QrDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decode version, format, codewords and message from a grid
    pub fn decode(&self, grid: &BitGrid) -> Result<DecodedSymbol> {
        let version = grid.version();

        let format = FormatInfo::extract(grid, FormatCoordinates::for_version(version));

        let version_info = if self.options.check_version_info {
            VersionInfo::extract(grid).map(|(v, _)| v)
        } else {
            None
        };

        let area = DataAreaMap::for_version(version);
        let unmasked = apply_mask(grid, format.mask, area);

        let coords = ZigzagScanner::for_version(version)?;
        let codewords = assemble(&unmasked, coords, total_codewords(version))?;

        let blocks = data_codewords_per_block(version, format.ec_level);
        debug!(
            "version {} level {}: {} codewords, data blocks {:?}",
            version,
            format.ec_level,
            codewords.len(),
            blocks
        );
        let data_codewords = deinterleave(&codewords, blocks);

        let segment = SegmentDecoder::new(version, self.options.truncation).decode(&data_codewords)?;

        Ok(DecodedSymbol {
            version,
            ec_level: format.ec_level,
            mask: format.mask,
            format_distance: format.distance,
            version_info,
            data_codewords,
            mode: segment.mode,
            length: segment.length,
            units: segment.payload.units,
            message: segment.payload.text,
        })
    }
}

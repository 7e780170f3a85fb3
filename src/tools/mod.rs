//! Input and output adapters for module grids: text grids and clean renders.

use crate::error::{DecodeError, Result};
use crate::models::BitGrid;
use image::{GrayImage, Luma};
use std::fs;
use std::path::Path;

/// Luma values below this are dark modules.
const DARK_THRESHOLD: u8 = 128;

/// Parse a text grid: one line per row, `1`/`#`/`X` dark and `0`/`.`/`-` light.
///
/// Spaces and tabs are ignored, as are blank lines and lines starting with `;`.
pub fn parse_text_grid(text: &str) -> Result<BitGrid> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let row = line
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t'))
            .map(|c| match c {
                '1' | '#' | 'X' | 'x' => Ok(true),
                '0' | '.' | '-' => Ok(false),
                other => Err(DecodeError::Parse(format!(
                    "line {}: unexpected character {:?}",
                    line_no + 1,
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        rows.push(row);
    }
    BitGrid::new(rows)
}

/// Read and parse a text grid file.
pub fn load_text_grid<P: AsRef<Path>>(path: P) -> Result<BitGrid> {
    let text = fs::read_to_string(path)?;
    parse_text_grid(&text)
}

/// Render a grid as `#`/`.` lines, the inverse of [`parse_text_grid`].
pub fn render_text_grid(grid: &BitGrid) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() + 1));
    for row in grid.to_rows() {
        out.extend(row.iter().map(|&dark| if dark { '#' } else { '.' }));
        out.push('\n');
    }
    out
}

/// Load an image of an unrotated symbol and sample its modules.
pub fn load_grid_image<P: AsRef<Path>>(path: P) -> Result<BitGrid> {
    let img = image::open(path)?.to_luma8();
    grid_from_luma(&img)
}

/// Sample a clean, axis-aligned render: any integral module size, any quiet zone.
///
/// The symbol's extent is the bounding box of dark pixels (the three finder
/// patterns reach three of its corners). The module size is the top-left
/// finder's first dark run divided by seven.
pub fn grid_from_luma(img: &GrayImage) -> Result<BitGrid> {
    let dark = |x: u32, y: u32| img.get_pixel(x, y)[0] < DARK_THRESHOLD;

    let (width, height) = img.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..height {
        for x in 0..width {
            if dark(x, y) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    let (x0, y0, x1, y1) =
        bounds.ok_or_else(|| DecodeError::Parse("image has no dark pixels".into()))?;

    let run = (x0..=x1).take_while(|&x| dark(x, y0)).count() as f32;
    let module = run / 7.0;
    if module < 1.0 {
        return Err(DecodeError::Parse(format!(
            "finder run of {} px is too small to sample",
            run
        )));
    }

    let size = ((x1 - x0 + 1) as f32 / module).round() as usize;
    let rows_extent = ((y1 - y0 + 1) as f32 / module).round() as usize;
    if rows_extent != size {
        return Err(DecodeError::NotSquare {
            rows: rows_extent,
            row: 0,
            len: size,
        });
    }

    let rows: Vec<Vec<bool>> = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| {
                    let x = x0 + ((c as f32 + 0.5) * module) as u32;
                    let y = y0 + ((r as f32 + 0.5) * module) as u32;
                    x < width && y < height && dark(x, y)
                })
                .collect()
        })
        .collect();
    BitGrid::new(rows)
}

/// Render a grid with `scale` pixels per module and a `quiet`-module border.
pub fn render_luma(grid: &BitGrid, scale: u32, quiet: u32) -> GrayImage {
    let side = (grid.size() as u32 + 2 * quiet) * scale;
    GrayImage::from_fn(side, side, |x, y| {
        let col = (x / scale).checked_sub(quiet);
        let row = (y / scale).checked_sub(quiet);
        match (row, col) {
            (Some(r), Some(c)) if grid.get(r as usize, c as usize) => Luma([0]),
            _ => Luma([255]),
        }
    })
}

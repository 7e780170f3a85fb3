/// Mask application restricted to the data area
use crate::decoder::function_mask::DataAreaMap;
use crate::models::{BitGrid, BitMatrix, MaskIndex};

/// XOR the mask predicate into every data-area module of `grid`
///
/// Function-pattern modules are copied unchanged. Applying the same mask
/// twice restores the input.
pub fn apply_mask(grid: &BitGrid, mask: MaskIndex, area: &DataAreaMap) -> BitMatrix {
    let mut matrix = grid.as_matrix().clone();
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            if area.is_data(row, col) && mask.is_masked(row, col) {
                matrix.toggle(row, col);
            }
        }
    }
    matrix
}

pub mod grid;
pub mod matrix;
pub mod symbol;

pub use grid::BitGrid;
pub use matrix::BitMatrix;
pub use symbol::{DecodedSymbol, ECLevel, MaskIndex, Version};

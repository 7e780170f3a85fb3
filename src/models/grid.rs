use super::matrix::BitMatrix;
use super::symbol::Version;
use crate::error::{DecodeError, Result};

/// Validated L×L module grid (true = dark)
///
/// The side length always satisfies `L = 4 * version + 17` for a version in
/// 1-40, so the version is known as soon as the grid exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    modules: BitMatrix,
    version: Version,
}

impl BitGrid {
    /// Build a grid from rows of modules
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(&rows)
    }

    /// Build a grid from any slice of row slices
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != size {
                return Err(DecodeError::NotSquare {
                    rows: size,
                    row,
                    len,
                });
            }
        }
        let version = Version::from_size(size).ok_or(DecodeError::InvalidSize(size))?;

        let mut modules = BitMatrix::new(size, size);
        for (r, cells) in rows.iter().enumerate() {
            for (c, &dark) in cells.as_ref().iter().enumerate() {
                modules.set(r, c, dark);
            }
        }
        Ok(Self { modules, version })
    }

    /// Wrap an existing square matrix
    pub fn from_matrix(modules: BitMatrix) -> Result<Self> {
        if modules.rows() != modules.cols() {
            return Err(DecodeError::NotSquare {
                rows: modules.rows(),
                row: 0,
                len: modules.cols(),
            });
        }
        let version =
            Version::from_size(modules.rows()).ok_or(DecodeError::InvalidSize(modules.rows()))?;
        Ok(Self { modules, version })
    }

    /// Side length L
    pub fn size(&self) -> usize {
        self.modules.rows()
    }

    /// Version implied by the side length
    pub fn version(&self) -> Version {
        self.version
    }

    /// Module at (row, col); false outside the grid
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// Backing matrix
    pub fn as_matrix(&self) -> &BitMatrix {
        &self.modules
    }

    /// Copy of this grid with one module flipped
    pub fn with_toggled(&self, row: usize, col: usize) -> Self {
        let mut modules = self.modules.clone();
        modules.toggle(row, col);
        Self {
            modules,
            version: self.version,
        }
    }

    /// Rows as vectors, for renderers
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        let size = self.size();
        (0..size)
            .map(|r| (0..size).map(|c| self.get(r, c)).collect())
            .collect()
    }
}

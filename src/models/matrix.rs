/// Packed square-or-rectangular bit matrix, addressed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a matrix with every bit cleared
    pub fn new(rows: usize, cols: usize) -> Self {
        let bytes_needed = (rows * cols).div_ceil(8);
        Self {
            rows,
            cols,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a matrix with every bit set
    pub fn filled(rows: usize, cols: usize) -> Self {
        let mut matrix = Self::new(rows, cols);
        matrix.data.fill(0xFF);
        matrix
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get bit at (row, col). Out-of-bounds reads return false.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let (byte_index, bit_index) = self.locate(row, col);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (row, col). Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let (byte_index, bit_index) = self.locate(row, col);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Toggle bit at (row, col)
    pub fn toggle(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let (byte_index, bit_index) = self.locate(row, col);
        self.data[byte_index] ^= 1 << bit_index;
    }

    /// Count set bits inside the matrix bounds
    pub fn count_ones(&self) -> usize {
        let total = self.rows * self.cols;
        let full = total / 8;
        let mut count: usize = self.data[..full]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        let tail = total % 8;
        if tail > 0 {
            count += (self.data[full] & ((1u8 << tail) - 1)).count_ones() as usize;
        }
        count
    }

    fn locate(&self, row: usize, col: usize) -> (usize, usize) {
        let index = row * self.cols + col;
        (index / 8, index % 8)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

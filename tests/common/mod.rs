//! Test-only symbol writer, independent of the library's placement code.
//!
//! Draws real function patterns, writes format/version information with the
//! ISO bit layout, places codewords along the ISO zigzag and masks with the
//! ISO reference predicates. Error-correction codewords are left as zeros:
//! the decoder never reads them.

#![allow(dead_code)]

use qrgrid::{BitGrid, ECLevel};

const ALNUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

// [version][L, M, Q, H]
const BLOCKS: [[(usize, usize); 4]; 11] = [
    [(0, 0); 4],
    [(1, 7), (1, 10), (1, 13), (1, 17)],
    [(1, 10), (1, 16), (1, 22), (1, 28)],
    [(1, 15), (1, 26), (2, 18), (2, 22)],
    [(1, 20), (2, 18), (2, 26), (4, 16)],
    [(1, 26), (2, 24), (4, 18), (4, 22)],
    [(2, 18), (4, 16), (4, 24), (4, 28)],
    [(2, 20), (4, 18), (6, 18), (5, 26)],
    [(2, 24), (4, 22), (6, 22), (6, 26)],
    [(2, 30), (5, 22), (8, 20), (8, 24)],
    [(4, 18), (5, 26), (8, 24), (8, 28)],
];

const ALIGNMENT: [&[usize]; 11] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

pub enum Data<'a> {
    Numeric(&'a str),
    Alphanumeric(&'a str),
    Bytes(&'a [u8]),
}

/// Symbol writer for versions 1-10
pub struct SymbolWriter {
    pub version: usize,
    pub level: ECLevel,
    /// ISO/IEC 18004 mask reference (0-7)
    pub iso_mask: usize,
}

struct Canvas {
    size: usize,
    dark: Vec<Vec<bool>>,
    reserved: Vec<Vec<bool>>,
}

impl Canvas {
    fn set(&mut self, row: usize, col: usize, dark: bool) {
        self.dark[row][col] = dark;
        self.reserved[row][col] = true;
    }
}

impl SymbolWriter {
    pub fn new(version: usize, level: ECLevel, iso_mask: usize) -> Self {
        assert!((1..=10).contains(&version));
        Self {
            version,
            level,
            iso_mask,
        }
    }

    pub fn size(&self) -> usize {
        4 * self.version + 17
    }

    fn level_index(&self) -> usize {
        match self.level {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }

    fn raw_modules(&self) -> usize {
        let v = self.version;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let n = v / 7 + 2;
            result -= (25 * n - 10) * n - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }

    pub fn data_capacity(&self) -> usize {
        let (blocks, ecc) = BLOCKS[self.version][self.level_index()];
        self.raw_modules() / 8 - blocks * ecc
    }

    /// Segment bits: mode, count, payload, terminator, byte and pad filling
    pub fn data_codewords(&self, data: &Data<'_>) -> Vec<u8> {
        let mut bits = Vec::new();
        let tier = usize::from(self.version >= 10);
        match data {
            Data::Numeric(text) => {
                push(&mut bits, 0b0001, 4);
                push(&mut bits, text.len() as u32, [10, 12][tier]);
                for chunk in text.as_bytes().chunks(3) {
                    let value: u32 = std::str::from_utf8(chunk).unwrap().parse().unwrap();
                    push(&mut bits, value, [4, 7, 10][chunk.len() - 1]);
                }
            }
            Data::Alphanumeric(text) => {
                push(&mut bits, 0b0010, 4);
                push(&mut bits, text.len() as u32, [9, 11][tier]);
                let values: Vec<u32> = text
                    .chars()
                    .map(|c| ALNUM.find(c).unwrap() as u32)
                    .collect();
                for pair in values.chunks(2) {
                    match pair {
                        [a, b] => push(&mut bits, a * 45 + b, 11),
                        [a] => push(&mut bits, *a, 6),
                        _ => unreachable!(),
                    }
                }
            }
            Data::Bytes(bytes) => {
                push(&mut bits, 0b0100, 4);
                push(&mut bits, bytes.len() as u32, [8, 16][tier]);
                for &b in bytes.iter() {
                    push(&mut bits, b as u32, 8);
                }
            }
        }

        let capacity = self.data_capacity() * 8;
        assert!(bits.len() <= capacity, "data does not fit");
        let terminator = (capacity - bits.len()).min(4);
        push(&mut bits, 0, terminator);
        while bits.len() % 8 != 0 {
            bits.push(false);
        }
        let mut codewords: Vec<u8> = bits
            .chunks(8)
            .map(|c| c.iter().fold(0u8, |b, &bit| (b << 1) | bit as u8))
            .collect();
        for pad in [0xEC, 0x11].into_iter().cycle() {
            if codewords.len() >= self.data_capacity() {
                break;
            }
            codewords.push(pad);
        }
        codewords
    }

    /// Interleaved physical stream: data round robin, then zero EC codewords
    pub fn physical_stream(&self, data: &[u8]) -> Vec<u8> {
        let (blocks, ecc) = BLOCKS[self.version][self.level_index()];
        let short = data.len() / blocks;
        let long_count = data.len() % blocks;
        let mut split = Vec::new();
        let mut offset = 0;
        for b in 0..blocks {
            let len = if b < blocks - long_count { short } else { short + 1 };
            split.push(&data[offset..offset + len]);
            offset += len;
        }
        let mut stream = Vec::new();
        for i in 0..=short {
            for block in &split {
                if let Some(&cw) = block.get(i) {
                    stream.push(cw);
                }
            }
        }
        stream.extend(std::iter::repeat_n(0u8, blocks * ecc));
        stream
    }

    pub fn build(&self, data: &Data<'_>) -> BitGrid {
        let codewords = self.data_codewords(data);
        self.build_from_codewords(&codewords)
    }

    pub fn build_from_codewords(&self, data_codewords: &[u8]) -> BitGrid {
        let stream = self.physical_stream(data_codewords);
        let size = self.size();
        let mut canvas = Canvas {
            size,
            dark: vec![vec![false; size]; size],
            reserved: vec![vec![false; size]; size],
        };

        self.draw_function_patterns(&mut canvas);
        self.draw_format(&mut canvas);
        self.draw_version(&mut canvas);
        self.place(&mut canvas, &stream);

        BitGrid::new(canvas.dark).unwrap()
    }

    fn draw_function_patterns(&self, canvas: &mut Canvas) {
        let size = canvas.size;
        for i in 0..size {
            canvas.set(6, i, i % 2 == 0);
            canvas.set(i, 6, i % 2 == 0);
        }
        for (top, left) in [(3i32, 3i32), (3, size as i32 - 4), (size as i32 - 4, 3)] {
            for dy in -4i32..=4 {
                for dx in -4i32..=4 {
                    let (r, c) = (top + dy, left + dx);
                    if r < 0 || c < 0 || r >= size as i32 || c >= size as i32 {
                        continue;
                    }
                    let dist = dy.abs().max(dx.abs());
                    canvas.set(r as usize, c as usize, dist != 2 && dist != 4);
                }
            }
        }
        let align = ALIGNMENT[self.version];
        let n = align.len();
        for (i, &r) in align.iter().enumerate() {
            for (j, &c) in align.iter().enumerate() {
                let corner = (i == 0 && j == 0) || (i == 0 && j == n - 1) || (i == n - 1 && j == 0);
                if corner {
                    continue;
                }
                for dy in -2i32..=2 {
                    for dx in -2i32..=2 {
                        let dist = dy.abs().max(dx.abs());
                        canvas.set(
                            (r as i32 + dy) as usize,
                            (c as i32 + dx) as usize,
                            dist != 1,
                        );
                    }
                }
            }
        }
    }

    /// ISO format bits (mask already applied), LSB-indexed
    pub fn format_bits(&self) -> u32 {
        let level_bits = match self.level {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        };
        let data = (level_bits << 3) | self.iso_mask as u32;
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * 0x537);
        }
        ((data << 10) | rem) ^ 0x5412
    }

    fn draw_format(&self, canvas: &mut Canvas) {
        let size = canvas.size;
        let bits = self.format_bits();
        let bit = |i: usize| (bits >> i) & 1 == 1;
        for i in 0..=5 {
            canvas.set(i, 8, bit(i));
        }
        canvas.set(7, 8, bit(6));
        canvas.set(8, 8, bit(7));
        canvas.set(8, 7, bit(8));
        for i in 9..15 {
            canvas.set(8, 14 - i, bit(i));
        }
        for i in 0..8 {
            canvas.set(8, size - 1 - i, bit(i));
        }
        for i in 8..15 {
            canvas.set(size - 15 + i, 8, bit(i));
        }
        canvas.set(size - 8, 8, true);
    }

    fn draw_version(&self, canvas: &mut Canvas) {
        if self.version < 7 {
            return;
        }
        let size = canvas.size;
        let mut rem = self.version as u32;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
        }
        let bits = ((self.version as u32) << 12) | rem;
        for i in 0..18 {
            let dark = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            canvas.set(b, a, dark);
            canvas.set(a, b, dark);
        }
    }

    fn iso_mask(&self, row: usize, col: usize) -> bool {
        let (i, j) = (row, col);
        match self.iso_mask {
            0 => (i + j) % 2 == 0,
            1 => i % 2 == 0,
            2 => j % 3 == 0,
            3 => (i + j) % 3 == 0,
            4 => (i / 2 + j / 3) % 2 == 0,
            5 => (i * j) % 2 + (i * j) % 3 == 0,
            6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
            _ => ((i + j) % 2 + (i * j) % 3) % 2 == 0,
        }
    }

    fn place(&self, canvas: &mut Canvas, stream: &[u8]) {
        let size = canvas.size;
        let total_bits = stream.len() * 8;
        let mut index = 0;
        let mut right = size as i32 - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                for j in 0..2 {
                    let col = (right - j) as usize;
                    let upward = ((right + 1) & 2) == 0;
                    let row = if upward { size - 1 - vert } else { vert };
                    if canvas.reserved[row][col] {
                        continue;
                    }
                    let mut dark = false;
                    if index < total_bits {
                        dark = (stream[index >> 3] >> (7 - (index & 7))) & 1 == 1;
                        index += 1;
                    }
                    canvas.dark[row][col] = dark ^ self.iso_mask(row, col);
                }
            }
            right -= 2;
        }
        assert_eq!(index, total_bits);
    }
}

fn push(bits: &mut Vec<bool>, value: u32, count: usize) {
    for i in (0..count).rev() {
        bits.push((value >> i) & 1 == 1);
    }
}

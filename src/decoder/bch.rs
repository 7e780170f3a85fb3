/// BCH helpers shared by format (15,5) and version (18,6) information

/// Format information generator x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
/// Version information generator x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

/// Systematic codeword: `data` followed by its remainder modulo `generator`
pub fn encode(data: u32, generator: u32) -> u32 {
    let degree = 31 - generator.leading_zeros();
    let mut remainder = data << degree;
    while remainder != 0 && 31 - remainder.leading_zeros() >= degree {
        let shift = (31 - remainder.leading_zeros()) - degree;
        remainder ^= generator << shift;
    }
    (data << degree) | remainder
}

/// Index of the table entry closest to every observed copy
///
/// Distance is the total Hamming weight across all copies. Ties go to the
/// smallest index, so the search always terminates with an answer.
pub fn nearest(table: &[u32], observed: &[u32]) -> (usize, u32) {
    let mut best = (0usize, u32::MAX);
    for (index, &codeword) in table.iter().enumerate() {
        let distance: u32 = observed.iter().map(|&o| (o ^ codeword).count_ones()).sum();
        if distance < best.1 {
            best = (index, distance);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remainder() {
        // Data 00001: remainder is the generator without its leading term
        assert_eq!(encode(0b00001, FORMAT_GENERATOR), 0b00001_0100110111);
        assert_eq!(encode(0, FORMAT_GENERATOR), 0);
    }

    #[test]
    fn test_version_7_codeword() {
        // Version 7 information from ISO/IEC 18004 Annex D
        assert_eq!(encode(7, VERSION_GENERATOR), 0b000111_110010010100);
    }

    #[test]
    fn test_nearest_ties_prefer_low_index() {
        let table = [0b0011, 0b0101];
        // 0b0001 is one bit away from both entries
        assert_eq!(nearest(&table, &[0b0001]), (0, 1));
        assert_eq!(nearest(&table, &[0b0101, 0b0101]), (1, 0));
    }
}

/// Cross-block interleaving of data codewords
///
/// The encoder writes one codeword from each block in turn, skipping blocks
/// that are exhausted. `slot_order` replays that round robin and yields the
/// logical (block-major) index written to each physical slot.

/// Logical index written to each physical slot, for the given block sizes
pub fn slot_order(block_sizes: &[usize]) -> Vec<usize> {
    let starts: Vec<usize> = block_sizes
        .iter()
        .scan(0, |offset, &len| {
            let start = *offset;
            *offset += len;
            Some(start)
        })
        .collect();
    let longest = block_sizes.iter().copied().max().unwrap_or(0);

    let mut order = Vec::with_capacity(block_sizes.iter().sum());
    for i in 0..longest {
        for (block, &len) in block_sizes.iter().enumerate() {
            if i < len {
                order.push(starts[block] + i);
            }
        }
    }
    order
}

/// Undo interleaving: physical stream to block-major data codewords
///
/// Only the data prefix of `codewords` is read; trailing error-correction
/// codewords are ignored.
pub fn deinterleave(codewords: &[u8], block_sizes: &[usize]) -> Vec<u8> {
    let order = slot_order(block_sizes);
    let mut logical = vec![0u8; order.len()];
    for (slot, &index) in order.iter().enumerate() {
        if let Some(&value) = codewords.get(slot) {
            logical[index] = value;
        }
    }
    logical
}

/// Block-major data codewords to the physical stream order
pub fn interleave(data: &[u8], block_sizes: &[usize]) -> Vec<u8> {
    slot_order(block_sizes)
        .into_iter()
        .map(|index| data.get(index).copied().unwrap_or_default())
        .collect()
}

//! Benchmark fixtures for the dynarr container.
//!
//! - [`filled_array`]: an array holding `0..n`, built by pushes
//! - [`insertion_indices`]: deterministic pseudo-random insert positions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::{ArrayError, DynamicArray};

/// Build an array holding `0..n` by repeated `push_back` from capacity 1.
pub fn filled_array(n: usize) -> Result<DynamicArray, ArrayError> {
    let mut array = DynamicArray::with_capacity(1)?;
    for v in 0..n {
        array.push_back(v as i32)?;
    }
    Ok(array)
}

/// Generate `count` insert indices, each valid for an array that starts at
/// `start_len` and grows by one per insert.
pub fn insertion_indices(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    (0..count)
        .map(|i| {
            let bound = (start_len + i + 1) as u64;
            let mixed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i as u64 * 1442695040888963407);
            ((mixed >> 17) % bound) as usize
        })
        .collect()
}

//! Seeded permutation table for lattice hashing

use crate::rng::{JavaRandom, ShuffleSource};

/// Number of distinct lattice hashes
pub const PERMUTATION_SIZE: usize = 256;
/// Stored length; the second half repeats the first so `table[a] + b` never wraps
pub const TABLE_LEN: usize = PERMUTATION_SIZE * 2;

/// Permutation of `0..256` stored twice back to back.
///
/// Invariant: `values[i] == values[i + 256]` for every `i < 256`, and the
/// first half holds each of `0..256` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; TABLE_LEN],
}

impl PermutationTable {
    /// Build the table with the Java-compatible generator seeded by `seed`
    pub fn new(seed: i64) -> Self {
        Self::from_source(&mut JavaRandom::new(seed))
    }

    /// Shuffle the identity sequence with draws from `source`.
    ///
    /// Every position swaps with an index drawn over the full `[0, 256)`
    /// range, not `[i, 256)`. The result is a biased shuffle; it is kept so
    /// existing seeds keep selecting the same permutations.
    pub fn from_source<S: ShuffleSource + ?Sized>(source: &mut S) -> Self {
        let mut perm = [0u8; PERMUTATION_SIZE];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = i as u8;
        }

        for i in 0..PERMUTATION_SIZE {
            let j = source.next_index(PERMUTATION_SIZE);
            perm.swap(i, j);
        }

        let mut values = [0u8; TABLE_LEN];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = perm[i % PERMUTATION_SIZE];
        }

        Self { values }
    }

    /// Hash at `idx`; valid for `idx < 512`
    #[inline]
    pub fn get(&self, idx: usize) -> usize {
        self.values[idx] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

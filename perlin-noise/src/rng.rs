//! Generator handles used to shuffle the permutation table
//!
//! The shuffle never touches ambient random state: the caller builds a
//! generator, hands it to `PermutationTable::from_source`, and owns it for
//! the duration of the shuffle.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices for the table shuffle
pub trait ShuffleSource {
    /// Draw an integer in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential generator with `java.util.Random` semantics.
///
/// Draw sequences match the JDK generator exactly, so a seed selects the
/// same permutation here as in JVM tools (seed 0 draws 187 first).
#[derive(Debug, Clone)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the LCG and return the top `bits` bits of the new state
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// Full-range 32-bit draw
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// Powers of two take the high bits of a 31-bit draw; every other bound
    /// uses the rejection loop so that the result stays unbiased.
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");

        if bound & bound.wrapping_neg() == bound {
            return ((bound as i64 * self.next(31) as i64) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // Overflow to negative means `bits` fell in the truncated tail
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }
}

impl ShuffleSource for JavaRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound <= i32::MAX as usize, "bound {bound} exceeds the 31-bit draw");
        self.next_int_bounded(bound as i32) as usize
    }
}

impl ShuffleSource for ChaCha8Rng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

//! 2D Perlin noise core
//!
//! Layout:
//! 1. `rng` - Generator handles that drive the permutation shuffle
//! 2. `permutation` - Seeded 512-entry lattice hash table
//! 3. `perlin` - Four-gradient noise evaluator
//! 4. `sampler` - Square-window sampling into flat buffers

mod perlin;
mod permutation;
mod rng;
mod sampler;

pub use perlin::{fade, grad, lerp, NoiseField};
pub use permutation::{PermutationTable, PERMUTATION_SIZE, TABLE_LEN};
pub use rng::{JavaRandom, ShuffleSource};
pub use sampler::{FieldSampler, SampledField};

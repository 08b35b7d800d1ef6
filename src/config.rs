//! Run configuration
//!
//! The whole experiment is parameterized by a seed, a grid size, a sample
//! spacing and two window origins. Defaults: seed 0, 100x100 cells,
//! step 10, far offset 1e8.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::noise::{NoiseField, PermutationTable};

/// Which generator shuffles the permutation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// 48-bit LCG with java.util.Random draw semantics
    #[default]
    Java,
    /// ChaCha8 stream; same table invariants, different permutations
    Chacha8,
}

impl GeneratorKind {
    pub fn build_table(self, seed: i64) -> PermutationTable {
        match self {
            GeneratorKind::Java => PermutationTable::new(seed),
            GeneratorKind::Chacha8 => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
                PermutationTable::from_source(&mut rng)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    pub seed: i64,
    /// Cells per side of each sampled window
    pub grid_size: usize,
    /// Samples per lattice unit
    pub step: f64,
    pub normal_origin: f64,
    pub far_offset: f64,
    pub generator: GeneratorKind,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: 100,
            step: 10.0,
            normal_origin: 0.0,
            far_offset: 100_000_000.0,
            generator: GeneratorKind::Java,
        }
    }
}

/// Largest accepted window side. Two windows of this size already hold
/// 2^29 cells, and the side still fits a PNG dimension.
pub const MAX_GRID_SIZE: usize = 1 << 14;

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid size must be positive".into()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(Error::InvalidConfig(format!(
                "grid size must be at most {MAX_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "step must be finite and positive, got {}",
                self.step
            )));
        }
        check_finite("normal origin", self.normal_origin)?;
        check_finite("far offset", self.far_offset)
    }

    /// Noise field for this run's seed and generator
    pub fn noise_field(&self) -> NoiseField {
        NoiseField::new(self.generator.build_table(self.seed))
    }
}

/// Window origins must be finite, otherwise every sample turns into NaN
pub(crate) fn check_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
    }
    Ok(())
}

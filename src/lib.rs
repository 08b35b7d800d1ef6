//! Perlin noise precision experiment
//!
//! Samples a seeded 2D Perlin field over a near-origin window and a
//! far-offset window, summarizes both, and decides whether large
//! coordinates visibly degrade the noise.

pub mod analysis;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub use perlin_noise as noise;

pub use error::{Error, Result};
pub use analysis::{analyze, FieldStatistics};
pub use compare::{compare, ComparisonVerdict, PrecisionComparator, Ratios, SweepEntry};
pub use config::{GeneratorKind, RunConfig};
pub use report::{Report, SweepReport};

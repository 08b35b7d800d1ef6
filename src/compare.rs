//! Near-origin versus far-offset comparison
//!
//! Both windows come from the same noise field and sampler. Each descriptor
//! of the far window is divided by the near one, and the run is judged
//! degraded when any ratio leaves its band.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{analyze, FieldStatistics};
use crate::config::{check_finite, RunConfig};
use crate::error::{Error, Result};
use crate::noise::{FieldSampler, NoiseField, SampledField};

/// Neighbour-difference ratios above this mean the far field got rougher
pub const DIFF_RATIO_MAX: f64 = 1.3;
/// Range and entropy ratios must stay inside `[RATIO_BAND_MIN, RATIO_BAND_MAX]`
pub const RATIO_BAND_MIN: f64 = 0.8;
pub const RATIO_BAND_MAX: f64 = 1.2;

/// Far / normal for each descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratios {
    pub horizontal_diff: f64,
    pub vertical_diff: f64,
    pub range: f64,
    pub entropy: f64,
}

fn ratio(far: f64, normal: f64, statistic: &'static str) -> Result<f64> {
    if normal == 0.0 {
        return Err(Error::DegenerateRatio { statistic });
    }
    let r = far / normal;
    if !(normal.is_finite() && far.is_finite() && r.is_finite()) {
        return Err(Error::NonFiniteRatio { statistic, normal, far });
    }
    Ok(r)
}

fn outside_band(r: f64) -> bool {
    r < RATIO_BAND_MIN || r > RATIO_BAND_MAX
}

impl Ratios {
    /// Fails with `DegenerateRatio` when any near-origin descriptor is zero,
    /// and with `NonFiniteRatio` when a descriptor or quotient is NaN or infinite
    pub fn between(normal: &FieldStatistics, far: &FieldStatistics) -> Result<Self> {
        Ok(Self {
            horizontal_diff: ratio(
                far.horizontal_diff,
                normal.horizontal_diff,
                "horizontal difference",
            )?,
            vertical_diff: ratio(far.vertical_diff, normal.vertical_diff, "vertical difference")?,
            range: ratio(far.range, normal.range, "range")?,
            entropy: ratio(far.entropy, normal.entropy, "entropy")?,
        })
    }

    /// Threshold rules; any single hit marks the far window as degraded
    pub fn is_degraded(&self) -> bool {
        self.horizontal_diff > DIFF_RATIO_MAX
            || self.vertical_diff > DIFF_RATIO_MAX
            || outside_band(self.range)
            || outside_band(self.entropy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonVerdict {
    pub normal: FieldStatistics,
    pub far: FieldStatistics,
    pub ratios: Ratios,
    /// True when a border effect is detected
    pub degraded: bool,
}

/// One far offset from a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepEntry {
    pub far_offset: f64,
    pub verdict: ComparisonVerdict,
}

pub struct PrecisionComparator {
    noise: NoiseField,
    sampler: FieldSampler,
}

impl PrecisionComparator {
    pub fn new(noise: NoiseField, sampler: FieldSampler) -> Self {
        Self { noise, sampler }
    }

    /// Validated comparator for a run configuration
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.noise_field(),
            FieldSampler::new(config.grid_size, config.step),
        ))
    }

    pub fn sample(&self, origin: f64) -> SampledField {
        self.sampler.sample(&self.noise, origin)
    }

    /// Judge an already sampled pair of windows
    pub fn judge(&self, normal: &SampledField, far: &SampledField) -> Result<ComparisonVerdict> {
        let normal = analyze(normal)?;
        let far = analyze(far)?;
        verdict_for(normal, far)
    }

    pub fn compare(&self, normal_origin: f64, far_origin: f64) -> Result<ComparisonVerdict> {
        check_finite("normal origin", normal_origin)?;
        check_finite("far offset", far_origin)?;
        let normal = self.sample(normal_origin);
        let far = self.sample(far_origin);
        self.judge(&normal, &far)
    }

    /// Compare one near-origin window against several far offsets.
    ///
    /// The near window is sampled and analyzed once. Every offset is checked
    /// before any far window is sampled.
    pub fn sweep(&self, normal_origin: f64, far_offsets: &[f64]) -> Result<Vec<SweepEntry>> {
        check_finite("normal origin", normal_origin)?;
        for &far_offset in far_offsets {
            check_finite("sweep offset", far_offset)?;
        }
        let normal = analyze(&self.sample(normal_origin))?;

        far_offsets
            .iter()
            .map(|&far_offset| -> Result<SweepEntry> {
                let far = analyze(&self.sample(far_offset))?;
                Ok(SweepEntry { far_offset, verdict: verdict_for(normal, far)? })
            })
            .collect()
    }
}

fn verdict_for(normal: FieldStatistics, far: FieldStatistics) -> Result<ComparisonVerdict> {
    let ratios = Ratios::between(&normal, &far)?;
    let degraded = ratios.is_degraded();

    debug!(?normal, ?far, "window statistics");
    info!(
        horizontal = ratios.horizontal_diff,
        vertical = ratios.vertical_diff,
        range = ratios.range,
        entropy = ratios.entropy,
        degraded,
        "comparison complete"
    );

    Ok(ComparisonVerdict { normal, far, ratios, degraded })
}

/// Run the full comparison described by `config`
pub fn compare(config: &RunConfig) -> Result<ComparisonVerdict> {
    PrecisionComparator::from_config(config)?.compare(config.normal_origin, config.far_offset)
}

//! Statistical descriptors of a sampled field
//!
//! Four numbers summarize a window: mean absolute step between horizontal
//! neighbours, the same for vertical neighbours, the value range, and the
//! Shannon entropy of a fixed 20-bin histogram over [-1, 1].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::noise::SampledField;

pub const HISTOGRAM_BINS: usize = 20;
pub const HISTOGRAM_MIN: f64 = -1.0;
pub const HISTOGRAM_MAX: f64 = 1.0;

/// Upper bound on `FieldStatistics::entropy`, reached only by a flat histogram
pub fn max_entropy() -> f64 {
    (HISTOGRAM_BINS as f64).ln()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStatistics {
    pub horizontal_diff: f64,
    pub vertical_diff: f64,
    pub range: f64,
    pub entropy: f64,
}

/// Compute all four descriptors; needs at least a 2x2 field
pub fn analyze(field: &SampledField) -> Result<FieldStatistics> {
    Ok(FieldStatistics {
        horizontal_diff: horizontal_diff(field)?,
        vertical_diff: vertical_diff(field)?,
        range: value_range(field),
        entropy: entropy(field),
    })
}

fn require_pairs(field: &SampledField, axis: &'static str) -> Result<()> {
    if field.size() < 2 {
        return Err(Error::InsufficientSamples { axis, size: field.size() });
    }
    Ok(())
}

/// Mean of `|f[i][j+1] - f[i][j]|`, accumulated row by row
pub fn horizontal_diff(field: &SampledField) -> Result<f64> {
    require_pairs(field, "horizontal")?;

    let n = field.size();
    let mut sum = 0.0;
    for i in 0..n {
        for w in field.row(i).windows(2) {
            sum += (w[1] - w[0]).abs();
        }
    }
    Ok(sum / (n * (n - 1)) as f64)
}

/// Mean of `|f[i+1][j] - f[i][j]|`, accumulated column by column
pub fn vertical_diff(field: &SampledField) -> Result<f64> {
    require_pairs(field, "vertical")?;

    let n = field.size();
    let mut sum = 0.0;
    for j in 0..n {
        for i in 0..n - 1 {
            sum += (field.get(i + 1, j) - field.get(i, j)).abs();
        }
    }
    Ok(sum / (n * (n - 1)) as f64)
}

/// `max - min` over every cell; zero for an empty field
pub fn value_range(field: &SampledField) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let (min, max) = field
        .values()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    max - min
}

/// Bin index for one value: clamp into [-1, 1], truncate, and fold the
/// right edge (exactly 1.0) back into the last bin
#[inline]
fn bin_index(value: f64, bin_width: f64) -> usize {
    let clamped = value.clamp(HISTOGRAM_MIN, HISTOGRAM_MAX);
    let bin = ((clamped - HISTOGRAM_MIN) / bin_width) as usize;
    bin.min(HISTOGRAM_BINS - 1)
}

/// Counts per bin over [-1, 1] with bin width 0.1
pub fn histogram(field: &SampledField) -> [u32; HISTOGRAM_BINS] {
    let bin_width = (HISTOGRAM_MAX - HISTOGRAM_MIN) / HISTOGRAM_BINS as f64;
    let mut counts = [0u32; HISTOGRAM_BINS];
    for &v in field.values() {
        counts[bin_index(v, bin_width)] += 1;
    }
    counts
}

/// Shannon entropy (natural log) of the histogram; empty bins contribute nothing
pub fn entropy(field: &SampledField) -> f64 {
    let total = field.len() as f64;
    let mut entropy = 0.0;
    for count in histogram(field) {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.ln();
        }
    }
    entropy
}

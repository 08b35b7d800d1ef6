//! Grid sampling of a noise field into a flat square buffer
//!
//! A window is `size x size` cells starting at `(origin, origin)`, with
//! cell `(i, j)` holding the noise at `(origin + i/step, origin + j/step)`.

use tracing::debug;

use crate::perlin::NoiseField;

/// Square grid of noise samples stored row-major.
///
/// Row index `i` follows the x axis and column index `j` the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField {
    size: usize,
    values: Vec<f64>,
}

impl SampledField {
    /// Wrap an existing row-major buffer. Returns `None` unless
    /// `values.len() == size * size`.
    pub fn from_values(size: usize, values: Vec<f64>) -> Option<Self> {
        (size.checked_mul(size)? == values.len()).then_some(Self { size, values })
    }

    /// Field with every cell set to `value`
    pub fn filled(size: usize, value: f64) -> Self {
        Self { size, values: vec![value; size * size] }
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell `(i, j)`; panics when either index is `>= size`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let size = self.size;
        assert!(i < size && j < size, "cell ({i}, {j}) outside {size}x{size} field");
        self.values[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.values[start..start + self.size]
    }

    /// All cells in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Evaluates a noise field over square windows of fixed size and spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSampler {
    /// Cells per side; `size * size` must fit in `usize`
    pub size: usize,
    /// Samples per lattice unit; coordinates advance by `1 / step`
    pub step: f64,
}

impl FieldSampler {
    pub fn new(size: usize, step: f64) -> Self {
        Self { size, step }
    }

    /// Coordinate of grid index `k` in a window starting at `origin`
    #[inline]
    pub fn coordinate(&self, origin: f64, k: usize) -> f64 {
        origin + k as f64 / self.step
    }

    /// Sample `noise` over the window whose first cell sits at `(origin, origin)`
    pub fn sample(&self, noise: &NoiseField, origin: f64) -> SampledField {
        debug!(size = self.size, step = self.step, origin, "sampling window");

        let mut values = Vec::with_capacity(self.size * self.size);
        for i in 0..self.size {
            let x = self.coordinate(origin, i);
            for j in 0..self.size {
                let y = self.coordinate(origin, j);
                values.push(noise.evaluate(x, y));
            }
        }

        SampledField { size: self.size, values }
    }
}

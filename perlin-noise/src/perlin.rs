//! 2D Perlin noise over a four-direction gradient set
//!
//! Evaluation is plain f64 arithmetic. At large coordinates the fractional
//! offset `x - floor(x)` loses precision, and that loss is the effect this
//! crate exists to measure, so nothing here compensates for it.

use crate::permutation::{PermutationTable, PERMUTATION_SIZE};

const LATTICE_MASK: i32 = (PERMUTATION_SIZE - 1) as i32;

/// Quintic smoothstep: 6t^5 - 15t^4 + 10t^3
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of four diagonal gradients, chosen by `hash % 4`
#[inline]
pub fn grad(hash: usize, dx: f64, dy: f64) -> f64 {
    match hash % 4 {
        0 => dx + dy,
        1 => -dx + dy,
        2 => dx - dy,
        _ => -dx - dy,
    }
}

/// Lattice index for a floored coordinate.
///
/// The cast saturates at the i32 bounds before masking, so every coordinate
/// past 2^31 hashes like the last representable lattice column.
#[inline]
fn lattice(floored: f64) -> usize {
    ((floored as i32) & LATTICE_MASK) as usize
}

/// Stateless noise evaluator owning its permutation table
#[derive(Debug, Clone)]
pub struct NoiseField {
    table: PermutationTable,
}

impl NoiseField {
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Shorthand for a field over the Java-compatible table for `seed`
    pub fn from_seed(seed: i64) -> Self {
        Self::new(PermutationTable::new(seed))
    }

    /// Noise at `(x, y)`, nominally in [-1, 1].
    ///
    /// The diagonal gradients can push slightly past that range; values are
    /// not clamped.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let xi = lattice(x_floor);
        let yi = lattice(y_floor);

        let xf = x - x_floor;
        let yf = y - y_floor;

        let u = fade(xf);
        let v = fade(yf);

        // Indices reach at most 255 + 256 = 511
        let p = &self.table;
        let n00 = grad(p.get(p.get(xi) + yi), xf, yf);
        let n01 = grad(p.get(p.get(xi) + yi + 1), xf, yf - 1.0);
        let n11 = grad(p.get(p.get(xi + 1) + yi + 1), xf - 1.0, yf - 1.0);
        let n10 = grad(p.get(p.get(xi + 1) + yi), xf - 1.0, yf);

        let a = lerp(n00, n10, u);
        let b = lerp(n01, n11, u);
        lerp(a, b, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Share of adjacent samples along x that come out bit-identical
    fn stalled_fraction(field: &NoiseField, origin: f64, y: f64, h: f64, count: usize) -> f64 {
        let values: Vec<f64> = (0..count)
            .map(|k| field.evaluate(origin + k as f64 * h, y))
            .collect();
        let stalled = values.windows(2).filter(|w| w[0] == w[1]).count();
        stalled as f64 / (count - 1) as f64
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_grad_directions() {
        assert_eq!(grad(0, 0.25, 0.5), 0.75);
        assert_eq!(grad(1, 0.25, 0.5), 0.25);
        assert_eq!(grad(2, 0.25, 0.5), -0.25);
        assert_eq!(grad(3, 0.25, 0.5), -0.75);
        assert_eq!(grad(7, 0.25, 0.5), -0.75);
    }

    #[test]
    fn test_known_values() {
        let field = NoiseField::from_seed(0);
        assert_eq!(field.evaluate(0.5, 0.5), 0.75);
        assert_eq!(field.evaluate(1.25, 3.75), -0.5874423980712891);
        assert_abs_diff_eq!(
            field.evaluate(100000000.1, 100000000.3),
            -0.025773587609514398,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let field = NoiseField::from_seed(3);
        for x in -4..4 {
            for y in -4..4 {
                assert_eq!(field.evaluate(x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn test_pure_function() {
        let field = NoiseField::from_seed(11);
        for k in 0..100 {
            let x = k as f64 * 0.731 - 20.0;
            let y = k as f64 * 0.197 + 3.0;
            assert_eq!(field.evaluate(x, y).to_bits(), field.evaluate(x, y).to_bits());
        }
    }

    #[test]
    fn test_periodic_over_table_length() {
        let field = NoiseField::from_seed(21);
        let (x, y) = (3.625, 17.375);
        assert_eq!(field.evaluate(x, y), field.evaluate(x + 256.0, y));
        assert_eq!(field.evaluate(x, y), field.evaluate(x, y - 512.0));
    }

    #[test]
    fn test_continuous_across_cell_boundary() {
        let field = NoiseField::from_seed(0);
        for n in [1.0, 7.0, 42.0, 1000.0] {
            for y in [0.13, 2.5, 9.87] {
                let left = field.evaluate(n - 1e-9, y);
                let right = field.evaluate(n, y);
                assert_abs_diff_eq!(left, right, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_resolution_loss_at_large_magnitude() {
        let field = NoiseField::from_seed(0);
        let h = 1e-4;

        // Moderate coordinates: every step moves the sample
        assert_eq!(stalled_fraction(&field, 1000.3, 0.37, h, 200), 0.0);
        assert_eq!(stalled_fraction(&field, 1048576.3, 0.37, h, 200), 0.0);

        // ulp(2^40) = 2^-12 > h, so neighbouring samples collapse together
        assert!(stalled_fraction(&field, 2f64.powi(40) + 0.3, 0.37, h, 200) > 0.5);
        assert!(stalled_fraction(&field, 2f64.powi(44), 0.37, h, 200) > 0.9);
    }

    #[test]
    fn test_fraction_vanishes_beyond_mantissa() {
        // Past 2^52 every coordinate is an integer, so the field is flat zero
        let field = NoiseField::from_seed(0);
        let big = 2f64.powi(52);
        assert_eq!(field.evaluate(big + 0.3, big + 0.7), 0.0);
    }
}

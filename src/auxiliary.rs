//! Auxiliary vector generators consumed by the matrix operations.

use num_complex::Complex64;

/// Generate `floor((stop - start) / step) + 1` evenly spaced values starting
/// at `start`.
///
/// Pure and unvalidated: the sign and magnitude of `step` are the caller's
/// responsibility. A step that would produce a negative count yields an empty
/// vector.
pub fn linspace(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step) as i64 + 1;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Lift a real vector into the complex plane, imaginary part zero.
pub fn real_to_complex(x: &[f64]) -> Vec<Complex64> {
    x.iter().map(|&v| Complex64::new(v, 0.0)).collect()
}

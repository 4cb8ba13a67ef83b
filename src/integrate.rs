//! Trapezoidal numerical integration over rows.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::{MatrixError, Result};

/// Trapezoidal-rule integral of sampled values against a coordinate vector.
///
/// Computes `sum 0.5 * (x[i+1] - x[i]) * (values[i+1] + values[i])` over
/// consecutive sample pairs. Fewer than two samples leave no interval to
/// integrate over, so the result is explicitly the additive identity.
///
/// # Errors
/// Returns [`MatrixError::LengthMismatch`] if the two slices differ in
/// length.
///
/// # Example
/// ```rust
/// use rowmat::trapezoidal;
///
/// // A constant function integrates to its value times the interval length.
/// let area = trapezoidal(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(area, 2.0);
/// ```
pub fn trapezoidal<T: Scalar>(values: &[T], x: &[T]) -> Result<T> {
    if values.len() != x.len() {
        return Err(MatrixError::LengthMismatch(values.len(), x.len()));
    }
    if x.len() < 2 {
        return Ok(T::zero());
    }
    let half = T::one() / (T::one() + T::one());
    let mut total = T::zero();
    for i in 0..x.len() - 1 {
        total = total + half * (x[i + 1] - x[i]) * (values[i + 1] + values[i]);
    }
    Ok(total)
}

impl<T: Scalar> Matrix<T> {
    /// Integrate each row against a shared coordinate vector.
    ///
    /// Applies [`trapezoidal`] independently to every logical row (via row
    /// iteration, so correct under any stride) and returns one integral per
    /// row, in row order.
    ///
    /// # Errors
    /// Returns [`MatrixError::LengthMismatch`] if `x.len() != ncols`.
    pub fn integrate_rows(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.ncols() {
            return Err(MatrixError::LengthMismatch(self.ncols(), x.len()));
        }
        self.rows().map(|row| trapezoidal(&row, x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_constant_function() {
        let area = trapezoidal(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(area, 2.0);
    }

    #[test]
    fn test_linear_function() {
        // Integral of f(x) = x over [0, 2] is 2; the rule is exact for
        // piecewise-linear integrands.
        let x = [0.0, 0.5, 1.0, 1.5, 2.0];
        let area = trapezoidal(&x, &x).unwrap();
        assert_relative_eq!(area, 2.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            trapezoidal(&[1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            MatrixError::LengthMismatch(2, 3)
        ));
    }

    #[test]
    fn test_short_input_is_zero() {
        assert_eq!(trapezoidal::<f64>(&[], &[]).unwrap(), 0.0);
        assert_eq!(trapezoidal(&[5.0], &[1.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_complex_values() {
        let v = [Complex64::new(0.0, 1.0), Complex64::new(0.0, 1.0)];
        let x = [Complex64::new(0.0, 0.0), Complex64::new(2.0, 0.0)];
        assert_eq!(trapezoidal(&v, &x).unwrap(), Complex64::new(0.0, 2.0));
    }

    #[test]
    fn test_integrate_rows_per_row() {
        let m = Matrix::from_data(2, 3, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
        let x = [0.0, 1.0, 2.0];
        let integrals = m.integrate_rows(&x).unwrap();
        assert_eq!(integrals.len(), 2);
        assert_relative_eq!(integrals[0], 2.0);
        assert_relative_eq!(integrals[1], 4.0);
    }

    #[test]
    fn test_integrate_rows_of_view() {
        // A width-2 view over a stride-3 parent; integration must only see
        // the view's columns.
        let m = Matrix::from_data(2, 3, vec![1.0, 1.0, 50.0, 3.0, 3.0, 50.0]).unwrap();
        let v = m.slice(0, 2, 0, 2).unwrap();
        let x = [0.0, 1.0];
        let integrals = v.integrate_rows(&x).unwrap();
        assert_relative_eq!(integrals[0], 1.0);
        assert_relative_eq!(integrals[1], 3.0);
    }

    #[test]
    fn test_integrate_rows_coordinate_mismatch() {
        let m: Matrix<f64> = Matrix::zeros(2, 3);
        assert!(matches!(
            m.integrate_rows(&[0.0, 1.0]).unwrap_err(),
            MatrixError::LengthMismatch(3, 2)
        ));
    }
}

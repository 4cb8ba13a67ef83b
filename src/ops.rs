//! Elementwise arithmetic and in-place maps.
//!
//! All binary operations address their operands by logical row iteration, so
//! they stay correct when the operands carry different strides (one side a
//! view, the other packed). Results are always freshly allocated packed
//! matrices, aliasing neither operand.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::Result;

/// Sum of a row slice.
pub fn vec_sum<T: Scalar>(v: &[T]) -> T {
    v.iter().copied().fold(T::zero(), |acc, x| acc + x)
}

fn zip_elementwise<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    f: impl Fn(T, T) -> T,
) -> Result<Matrix<T>> {
    a.check_same_shape(b)?;
    let mut data = Vec::with_capacity(a.nrows() * a.ncols());
    for (ra, rb) in a.rows().zip(b.rows()) {
        for (&x, &y) in ra.iter().zip(rb.iter()) {
            data.push(f(x, y));
        }
    }
    Matrix::from_data(a.nrows(), a.ncols(), data)
}

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum. Shapes must match exactly; stride differences alone
    /// are never a mismatch.
    ///
    /// # Errors
    /// Returns [`crate::MatrixError::DimMismatch`] when the logical
    /// dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        zip_elementwise(self, other, |x, y| x + y)
    }

    /// Elementwise difference. Same contract as [`Matrix::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        zip_elementwise(self, other, |x, y| x - y)
    }

    /// Elementwise (Hadamard) product. Same contract as [`Matrix::add`].
    pub fn mul(&self, other: &Self) -> Result<Self> {
        zip_elementwise(self, other, |x, y| x * y)
    }

    /// Elementwise quotient. Same contract as [`Matrix::add`].
    pub fn div(&self, other: &Self) -> Result<Self> {
        zip_elementwise(self, other, |x, y| x / y)
    }

    /// Replace every element with `f(element)`, in place.
    ///
    /// Addresses elements through this matrix's own stride-aware layout, so
    /// on a view only the view's window is touched. The mutation goes through
    /// the shared buffer and is visible to all aliasing views.
    pub fn apply_in_place<F: FnMut(T) -> T>(&mut self, mut f: F) {
        let mut buf = self.buf.borrow_mut();
        for i in 0..self.nrows() {
            let start = self.linear_index(i, 0);
            for v in &mut buf[start..start + self.ncols()] {
                *v = f(*v);
            }
        }
    }

    /// Sum of all elements, via row iteration.
    pub fn sum(&self) -> T {
        self.rows().fold(T::zero(), |acc, row| acc + vec_sum(&row))
    }
}

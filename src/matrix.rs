//! The strided matrix type: construction, element access, and slicing.
//!
//! A [`Matrix`] is a logical `(rows, cols, stride)` descriptor over a flat
//! reference-counted buffer. Element `(i, j)` lives at buffer index
//! `offset + i*stride + j`. A freshly constructed matrix is packed
//! (`stride == cols`, `offset == 0`); a view produced by [`Matrix::slice`]
//! shares the parent's buffer and inherits the parent's stride, which is what
//! makes its rows non-contiguous relative to its own logical width whenever
//! the view is narrower than the stride.

use crate::scalar::Scalar;
use crate::{MatrixError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// A dense matrix over a flat, possibly shared buffer.
///
/// The buffer is reference-counted: slicing clones the handle rather than the
/// data, so a view and its parent observe each other's mutations. Operations
/// that return an independent result ([`Matrix::slice_copy`] and the
/// elementwise arithmetic in this crate) always allocate a fresh packed
/// buffer.
///
/// # Example
/// ```rust
/// use rowmat::Matrix;
///
/// let m: Matrix<f64> = Matrix::zeros(3, 4);
/// assert_eq!(m.get(2, 3).unwrap(), 0.0);
/// assert!(m.get(3, 0).is_err());
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    pub(crate) buf: Rc<RefCell<Vec<T>>>,
    pub(crate) offset: usize,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) stride: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix with every element set to the additive identity.
    ///
    /// The buffer is freshly allocated with length `rows * cols` and the
    /// matrix is packed (`stride == cols`).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            buf: Rc::new(RefCell::new(vec![T::zero(); rows * cols])),
            offset: 0,
            rows,
            cols,
            stride: cols,
        }
    }

    /// Wrap caller-supplied data as the buffer of a packed matrix, without
    /// copying.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            buf: Rc::new(RefCell::new(data)),
            offset: 0,
            rows,
            cols,
            stride: cols,
        })
    }

    /// Get the element at logical position `(i, j)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfBounds`] if `i >= rows` or
    /// `j >= cols`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.check_index(i, j)?;
        Ok(self.buf.borrow()[self.linear_index(i, j)])
    }

    /// Set the element at logical position `(i, j)`.
    ///
    /// The write goes through the shared buffer and is visible to every
    /// view aliasing it. Outstanding row borrows must be dropped first.
    ///
    /// # Errors
    /// Same bounds contract as [`Matrix::get`].
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        self.check_index(i, j)?;
        let idx = self.linear_index(i, j);
        self.buf.borrow_mut()[idx] = value;
        Ok(())
    }

    /// Create an aliasing sub-matrix view of `k` rows and `l` columns
    /// starting at `(i, j)`.
    ///
    /// The view shares this matrix's buffer and inherits its stride;
    /// subsequent [`Matrix::set`] calls on either side are mutually visible.
    ///
    /// # Errors
    /// The starting corner is validated first (same rule as [`Matrix::get`],
    /// reported as [`MatrixError::IndexOutOfBounds`]), then the extent:
    /// `i + k > rows` or `j + l > cols` is reported as
    /// [`MatrixError::SliceOutOfBounds`].
    pub fn slice(&self, i: usize, k: usize, j: usize, l: usize) -> Result<Self> {
        self.check_index(i, j)?;
        self.check_extent(i, k, j, l)?;
        Ok(Self {
            buf: Rc::clone(&self.buf),
            offset: self.offset + i * self.stride + j,
            rows: k,
            cols: l,
            stride: self.stride,
        })
    }

    /// Like [`Matrix::slice`], but copies the window into a fresh buffer.
    ///
    /// The result is fully independent of this matrix and is repacked:
    /// its stride equals `l`, with no gaps between rows.
    ///
    /// # Errors
    /// Same validation (and error distinction) as [`Matrix::slice`].
    pub fn slice_copy(&self, i: usize, k: usize, j: usize, l: usize) -> Result<Self> {
        self.check_index(i, j)?;
        self.check_extent(i, k, j, l)?;
        let src = self.buf.borrow();
        let mut data = Vec::with_capacity(k * l);
        for r in 0..k {
            let start = self.offset + (i + r) * self.stride + j;
            data.extend_from_slice(&src[start..start + l]);
        }
        drop(src);
        Self::from_data(k, l, data)
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Number of buffer elements between the starts of consecutive rows.
    ///
    /// Equals [`Matrix::ncols`] for packed matrices; exceeds it for views
    /// narrower than their parent.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// True when `stride == cols`, i.e. rows sit back to back in the buffer.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.cols
    }

    /// Buffer index of logical position `(i, j)`.
    #[inline]
    pub(crate) fn linear_index(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.stride + j
    }

    pub(crate) fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_extent(&self, i: usize, k: usize, j: usize, l: usize) -> Result<()> {
        if i + k > self.rows || j + l > self.cols {
            return Err(MatrixError::SliceOutOfBounds {
                row: i,
                col: j,
                k,
                l,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimMismatch(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }
        Ok(())
    }
}

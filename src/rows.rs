//! Lazy row iteration over the shared buffer.
//!
//! Row `i` of a matrix is the contiguous buffer window
//! `[offset + i*stride, offset + i*stride + cols)`. Iterating rows this way
//! is correct under any stride, which makes it the only iteration-safe way to
//! visit the rows of a sliced matrix; a raw scan of the buffer would leak
//! elements that lie between a view's logical rows.

use crate::matrix::Matrix;
use crate::{MatrixError, Result};
use std::cell::{Ref, RefCell};

/// A transient borrow of one contiguous logical row.
///
/// Derefs to `&[T]` of length `cols`. Must be dropped before the matrix is
/// mutated.
pub type RowRef<'a, T> = Ref<'a, [T]>;

/// Iterator over the rows of a [`Matrix`], in ascending index order.
///
/// The iterator carries the matrix layout directly and borrows the shared
/// buffer once per yielded row, so early termination has no side effects and
/// each call to [`Matrix::rows`] starts a fresh pass.
pub struct Rows<'a, T> {
    buf: &'a RefCell<Vec<T>>,
    offset: usize,
    stride: usize,
    cols: usize,
    rows: usize,
    next: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = RowRef<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.rows {
            return None;
        }
        let start = self.offset + self.next * self.stride;
        self.next += 1;
        Some(Ref::map(self.buf.borrow(), |v| &v[start..start + self.cols]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Rows<'a, T> {}

impl<T> Matrix<T> {
    /// Returns a lazy iterator over the logical rows.
    ///
    /// Yields exactly [`Matrix::nrows`] row borrows of length
    /// [`Matrix::ncols`] each, honoring the stride, so no value beyond a
    /// view's logical column boundary is ever exposed.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            buf: &self.buf,
            offset: self.offset,
            stride: self.stride,
            cols: self.cols,
            rows: self.rows,
            next: 0,
        }
    }

    /// Borrow a single logical row.
    ///
    /// # Errors
    /// Returns [`MatrixError::IndexOutOfBounds`] if `i >= nrows`.
    pub fn row(&self, i: usize) -> Result<RowRef<'_, T>> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                row: i,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = self.offset + i * self.stride;
        Ok(Ref::map(self.buf.borrow(), |v| &v[start..start + self.cols]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_packed() {
        let m = Matrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let collected: Vec<Vec<f64>> = m.rows().map(|r| r.to_vec()).collect();
        assert_eq!(collected, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_rows_of_view_stay_inside_logical_width() {
        // Sentinels everywhere outside the view window; iterating the view
        // must never surface one.
        let mut m: Matrix<f64> = Matrix::zeros(10, 10);
        for i in 0..10 {
            for j in 0..10 {
                if !(3..5).contains(&i) || !(5..8).contains(&j) {
                    m.set(i, j, -1.0).unwrap();
                }
            }
        }
        let v = m.slice(3, 2, 5, 3).unwrap();
        let mut count = 0;
        for row in v.rows() {
            assert_eq!(&row[..], &[0.0, 0.0, 0.0]);
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_rows_restartable() {
        let m = Matrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let first: Vec<f64> = m.rows().flat_map(|r| r.to_vec()).collect();
        let second: Vec<f64> = m.rows().flat_map(|r| r.to_vec()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rows_early_stop() {
        let m: Matrix<f64> = Matrix::zeros(100, 3);
        let mut iter = m.rows();
        assert_eq!(iter.len(), 100);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 98);
        drop(iter);
        // The matrix is still usable after an abandoned pass.
        assert_eq!(m.rows().count(), 100);
    }

    #[test]
    fn test_row_accessor() {
        let m = Matrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(&m.row(1).unwrap()[..], &[3.0, 4.0]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_row_of_view_honors_stride() {
        let m = Matrix::from_data(3, 3, (1..=9).map(f64::from).collect()).unwrap();
        let v = m.slice(0, 2, 1, 2).unwrap();
        assert_eq!(&v.row(0).unwrap()[..], &[2.0, 3.0]);
        assert_eq!(&v.row(1).unwrap()[..], &[5.0, 6.0]);
    }
}

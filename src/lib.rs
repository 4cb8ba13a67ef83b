//! Strided dense matrices over a flat shared buffer.
//!
//! This crate provides [`Matrix`], a small generic dense-matrix type built
//! around one idea: a matrix is a `(rows, cols, stride)` descriptor over a
//! flat, reference-counted buffer. Sub-matrices created with
//! [`Matrix::slice`] alias the parent's buffer under the parent's stride, so
//! a view's rows are generally not contiguous with respect to its own logical
//! width. Every operation in the crate (row iteration, elementwise
//! arithmetic, integration) addresses elements through the stride rather than
//! assuming a tightly packed layout.
//!
//! # Core Types
//!
//! - [`Matrix`]: owned-or-aliased `(rows, cols, stride)` descriptor over a
//!   shared buffer
//! - [`Rows`]: lazy, restartable iterator over contiguous row borrows
//! - [`Scalar`]: closed numeric capability bound (satisfied by `f64` and
//!   [`num_complex::Complex64`], among others)
//!
//! # Operations
//!
//! - Construction: [`Matrix::zeros`], [`Matrix::from_data`]
//! - Access: [`Matrix::get`], [`Matrix::set`], [`Matrix::row`]
//! - Views: [`Matrix::slice`] (aliasing), [`Matrix::slice_copy`] (independent)
//! - Arithmetic: [`Matrix::add`], [`Matrix::sub`], [`Matrix::mul`],
//!   [`Matrix::div`], [`Matrix::apply_in_place`], [`Matrix::sum`]
//! - Integration: [`trapezoidal`], [`Matrix::integrate_rows`]
//! - Helpers: [`linspace`], [`real_to_complex`]
//!
//! # Example
//!
//! ```rust
//! use rowmat::Matrix;
//!
//! let m = Matrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//!
//! // Aliasing 2x2 view starting at (0, 1); stride stays 3.
//! let mut v = m.slice(0, 2, 1, 2).unwrap();
//! assert_eq!(v.get(1, 0).unwrap(), 5.0);
//!
//! // Mutation through the view is visible through the parent.
//! v.set(0, 0, 20.0).unwrap();
//! assert_eq!(m.get(0, 1).unwrap(), 20.0);
//! ```
//!
//! # Aliasing and mutation
//!
//! The backing buffer is shared between a matrix and every view sliced from
//! it; [`Matrix::set`] and [`Matrix::apply_in_place`] are the only mutators
//! and their effects are visible through every alias. The crate is
//! single-threaded by design (`Matrix` is not `Send`); callers introducing
//! concurrency must synchronize externally. Row borrows handed out by
//! [`Matrix::rows`] and [`Matrix::row`] must be dropped before mutating.

mod auxiliary;
mod integrate;
mod matrix;
mod ops;
mod rows;
mod scalar;

// ============================================================================
// Core types
// ============================================================================
pub use matrix::Matrix;
pub use rows::{RowRef, Rows};
pub use scalar::Scalar;

// ============================================================================
// Free functions
// ============================================================================
pub use auxiliary::{linspace, real_to_complex};
pub use integrate::trapezoidal;
pub use ops::vec_sum;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during matrix operations.
///
/// Every violation is detected eagerly at the offending call and returned to
/// the caller; there is no internal recovery. Bad slice corners and oversized
/// slice extents are reported as distinct variants so callers can tell them
/// apart.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Buffer length does not match the requested matrix shape.
    #[error("data length {len} does not match {rows}x{cols} matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// Two matrices have different logical dimensions.
    #[error("dimension mismatch: {0}x{1} vs {2}x{3}")]
    DimMismatch(usize, usize, usize, usize),

    /// Two vectors have different lengths.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// Element or slice-corner index outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Slice extent runs past the source matrix.
    #[error("slice {k}x{l} at ({row}, {col}) runs past {rows}x{cols} matrix")]
    SliceOutOfBounds {
        row: usize,
        col: usize,
        k: usize,
        l: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

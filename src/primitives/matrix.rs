//! Dense matrix container with construction-time shape checking.
//!
//! ## Purpose
//!
//! This module provides the `Matrix` type: a dense, row-major,
//! two-dimensional container of floating-point values with fixed
//! dimensions. It is the only data structure the elimination engine
//! mutates, and the payload carried by trace snapshots.
//!
//! ## Design notes
//!
//! * **Shape-checked**: Ragged or empty inputs are rejected at
//!   construction, never deep inside the algorithm.
//! * **Row-major**: Element `(r, c)` lives at `data[r * cols + c]`,
//!   so row operations work on contiguous slices.
//! * **Restricted mutation**: Dimensions never change after construction;
//!   mutation goes through defined operations (element set, row swap,
//!   in-place row combination).
//! * **Generics**: Generic over `Float` types for f32/f64 precision.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * `rows >= 1` and `cols >= 1`.
//! * Row operations never reallocate.
//!
//! ## Non-goals
//!
//! * General linear-algebra operations (products, inverses, norms).
//! * Sparse or non-contiguous storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DetError;

// ============================================================================
// Matrix
// ============================================================================

/// Dense row-major matrix with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a matrix from nested rows.
    ///
    /// Fails with [`DetError::EmptyMatrix`] when there are no rows or no
    /// columns, and [`DetError::RaggedRows`] when row lengths differ.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, DetError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(DetError::EmptyMatrix);
        }

        let cols = rows[0].len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DetError::RaggedRows {
                    row: r,
                    got: row.len(),
                    expected: cols,
                });
            }
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a matrix from a flat row-major buffer and explicit dimensions.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DetError> {
        if rows == 0 || cols == 0 {
            return Err(DetError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(DetError::ShapeMismatch {
                got: data.len(),
                expected: rows * cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build an all-zero matrix of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, DetError> {
        if rows == 0 || cols == 0 {
            return Err(DetError::EmptyMatrix);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Build the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, DetError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.set(i, i, T::one());
        }
        Ok(m)
    }

    /// Build an `n x n` matrix with the given values on the diagonal.
    pub fn diagonal(diag: &[T]) -> Result<Self, DetError> {
        let mut m = Self::zeros(diag.len(), diag.len())?;
        for (i, &v) in diag.iter().enumerate() {
            m.set(i, i, v);
        }
        Ok(m)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Row `r` as a contiguous slice.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// The diagonal entries (length `min(rows, cols)`).
    pub fn diag(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self.get(i, i))
            .collect()
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Whether every entry is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Position of the first non-finite entry, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|idx| (idx / self.cols, idx % self.cols))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set the element at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Exchange rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// In-place row combination: `row[target] -= factor * row[source]`,
    /// restricted to columns `[from_col, cols)`.
    ///
    /// Entries left of `from_col` are already zero during elimination, so
    /// they are not touched.
    pub fn row_axpy(&mut self, target: usize, source: usize, factor: T, from_col: usize) {
        debug_assert_ne!(target, source);
        let cols = self.cols;
        let (lo, hi) = if source < target {
            (source, target)
        } else {
            (target, source)
        };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        let lo_row = &mut head[lo * cols..(lo + 1) * cols];
        let hi_row = &mut tail[..cols];
        let (src, dst) = if source < target {
            (&*lo_row, hi_row)
        } else {
            (&*hi_row, lo_row)
        };
        for c in from_col..cols {
            dst[c] = dst[c] - factor * src[c];
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>9.4}", self.get(r, c))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

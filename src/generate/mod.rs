//! Layer 5: Random matrix constructors.
//!
//! ## Purpose
//!
//! This module builds random integer-valued matrices of various shapes
//! for demonstration and testing: square, row/column vectors,
//! rectangular, diagonal, and triangular. Deterministic shapes
//! (identity, zeros) live on [`Matrix`] itself.
//!
//! ## Design notes
//!
//! * **Caller-supplied RNG**: Every constructor takes `&mut impl Rng`,
//!   so seeding (and therefore reproducibility) is the caller's choice.
//! * **Integer-valued**: Entries are drawn uniformly from a half-open
//!   `i32` range and converted to the float type, which keeps generated
//!   determinants exact enough for hand-checking.
//!
//! ## Invariants
//!
//! * Zero-sized shapes are rejected with [`DetError::EmptyMatrix`].
//! * Triangular constructors produce exact zeros off their triangle.
//!
//! ## Non-goals
//!
//! * Continuous or non-uniform distributions.
//! * Structured matrices beyond the shapes above (orthogonal, banded).

// External dependencies
use core::ops::Range;
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::primitives::errors::DetError;
use crate::primitives::matrix::Matrix;

#[inline]
fn draw<T: Float, R: Rng + ?Sized>(rng: &mut R, range: &Range<i32>) -> T {
    T::from(rng.gen_range(range.clone())).unwrap()
}

/// Random square matrix of order `n` with entries in `range`.
pub fn square<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    rectangular(rng, n, n, range)
}

/// Random `1 x n` row vector with entries in `range`.
pub fn row_vector<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    rectangular(rng, 1, n, range)
}

/// Random `m x 1` column vector with entries in `range`.
pub fn column_vector<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    m: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    rectangular(rng, m, 1, range)
}

/// Random `rows x cols` matrix with entries in `range`.
pub fn rectangular<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    let mut m = Matrix::zeros(rows, cols)?;
    for r in 0..rows {
        for c in 0..cols {
            m.set(r, c, draw(rng, &range));
        }
    }
    Ok(m)
}

/// Random diagonal matrix of order `n` with diagonal entries in `range`.
pub fn diagonal<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    let mut m = Matrix::zeros(n, n)?;
    for i in 0..n {
        m.set(i, i, draw(rng, &range));
    }
    Ok(m)
}

/// Random upper-triangular matrix of order `n` with entries in `range`.
pub fn upper_triangular<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    let mut m = Matrix::zeros(n, n)?;
    for r in 0..n {
        for c in r..n {
            m.set(r, c, draw(rng, &range));
        }
    }
    Ok(m)
}

/// Random lower-triangular matrix of order `n` with entries in `range`.
pub fn lower_triangular<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: Range<i32>,
) -> Result<Matrix<T>, DetError> {
    let mut m = Matrix::zeros(n, n)?;
    for r in 0..n {
        for c in 0..=r {
            m.set(r, c, draw(rng, &range));
        }
    }
    Ok(m)
}

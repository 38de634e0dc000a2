//! Working state for one elimination run.
//!
//! ## Purpose
//!
//! This module wraps the mutable state one determinant computation owns:
//! a float copy of the input matrix, the `+1`/`-1` sign accumulator, and
//! the running product of pivots. The caller's matrix is never mutated;
//! the engine works on the copy held here.
//!
//! ## Design notes
//!
//! * **Exclusive**: A `WorkingState` belongs to exactly one engine
//!   invocation and is discarded when it returns.
//! * **Split bookkeeping**: Row swaps touch only the sign; diagonal
//!   folding touches only the product. The reported determinant is the
//!   signed view `sign * product`.
//!
//! ## Invariants
//!
//! * The sign accumulator is always exactly `+1` or `-1`.
//! * The wrapped matrix is square with `n >= 1`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;

// ============================================================================
// Working State
// ============================================================================

/// Mutable state owned by a single elimination run.
#[derive(Debug, Clone)]
pub struct WorkingState<T> {
    /// Working copy of the input matrix (mutated in place).
    pub matrix: Matrix<T>,

    /// Sign accumulator, flipped once per row swap.
    sign: i8,

    /// Running product of accepted pivots.
    product: T,
}

impl<T: Float> WorkingState<T> {
    /// Create the working state from a caller-supplied square matrix.
    ///
    /// The input is cloned; the original is never touched.
    pub fn new(input: &Matrix<T>) -> Self {
        debug_assert!(input.is_square());
        Self {
            matrix: input.clone(),
            sign: 1,
            product: T::one(),
        }
    }

    /// Matrix order `n`.
    #[inline]
    pub fn order(&self) -> usize {
        self.matrix.rows()
    }

    /// Current sign accumulator (`+1` or `-1`).
    #[inline]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Flip the sign accumulator. Called exactly once per row swap.
    #[inline]
    pub fn flip_sign(&mut self) {
        self.sign = -self.sign;
    }

    /// Fold a pivot into the running product.
    #[inline]
    pub fn multiply_pivot(&mut self, pivot: T) {
        self.product = self.product * pivot;
    }

    /// Force the determinant to exactly zero (zero-pivot termination).
    #[inline]
    pub fn annihilate(&mut self) {
        self.product = T::zero();
    }

    /// Signed determinant view: `sign * product`.
    ///
    /// A zero product reports exactly `+0`, never `-0`, regardless of
    /// the accumulated sign.
    #[inline]
    pub fn determinant(&self) -> T {
        if self.product == T::zero() {
            T::zero()
        } else if self.sign >= 0 {
            self.product
        } else {
            -self.product
        }
    }
}

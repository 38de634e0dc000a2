//! Zero-pivot detection and early termination.
//!
//! ## Purpose
//!
//! This module decides whether the pivot left on the diagonal after
//! partial pivoting is numerically indistinguishable from zero. Because
//! partial pivoting already selected the largest-magnitude candidate in
//! the column, a zero pivot means every remaining candidate is zero: the
//! matrix is singular and the determinant is exactly `0`.
//!
//! ## Design notes
//!
//! * **Explicit tolerance**: The closeness test is a named, configurable
//!   policy rather than an opaque library call. The pivot is considered
//!   zero when `|p| <= abs + rel * |p|`, the standard absolute-plus-
//!   relative closeness test against zero. With the compared value being
//!   zero the relative term contributes `rel * |p|`, so the absolute
//!   tolerance dominates for small pivots.
//! * **Not an error**: Detection is a valid terminal outcome reported
//!   through the trace and the returned determinant, never through an
//!   error value.
//!
//! ## Invariants
//!
//! * On detection the running determinant is forced to exactly `0`.
//! * The appended `Result` entry is the last entry of the trace.
//!
//! ## Non-goals
//!
//! * Condition-number estimation or near-singularity warnings.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::state::WorkingState;
use crate::trace::entry::{StepDetail, TraceEntry};
use crate::trace::recorder::TraceRecorder;

// ============================================================================
// Pivot Tolerance
// ============================================================================

/// Default absolute tolerance for the zero-pivot test.
pub const DEFAULT_ABS_TOLERANCE: f64 = 1e-8;

/// Default relative tolerance for the zero-pivot test.
pub const DEFAULT_REL_TOLERANCE: f64 = 1e-5;

/// Tolerance policy for deciding that a pivot is numerically zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotTolerance<T> {
    /// Absolute tolerance (dominant term when comparing against zero).
    pub abs: T,

    /// Relative tolerance, scaled by the pivot magnitude.
    pub rel: T,
}

impl<T: Float> PivotTolerance<T> {
    /// Tolerance with an explicit absolute part and the default relative part.
    pub fn absolute(abs: T) -> Self {
        Self {
            abs,
            rel: T::from(DEFAULT_REL_TOLERANCE).unwrap(),
        }
    }

    /// Whether `pivot` is numerically indistinguishable from zero.
    #[inline]
    pub fn is_zero(&self, pivot: T) -> bool {
        pivot.abs() <= self.abs + self.rel * pivot.abs()
    }
}

impl<T: Float> Default for PivotTolerance<T> {
    fn default() -> Self {
        Self {
            abs: T::from(DEFAULT_ABS_TOLERANCE).unwrap(),
            rel: T::from(DEFAULT_REL_TOLERANCE).unwrap(),
        }
    }
}

// ============================================================================
// Guard
// ============================================================================

/// Check the pivot at `(col, col)`; terminate the run if it is zero.
///
/// Returns `true` when a zero pivot was detected. The running
/// determinant is then exactly `0` and the trace ends with a `Result`
/// entry stating the condition.
pub fn guard_zero_pivot<T: Float>(
    state: &mut WorkingState<T>,
    col: usize,
    tolerance: &PivotTolerance<T>,
    recorder: &mut TraceRecorder<T>,
) -> bool {
    let pivot = state.matrix.get(col, col);
    if !tolerance.is_zero(pivot) {
        return false;
    }

    state.annihilate();
    recorder.append(TraceEntry::result(
        format!("Step {}.2: Zero pivot - det = 0", col + 1),
        StepDetail::ZeroPivot { column: col },
    ));

    true
}

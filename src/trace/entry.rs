//! Structured trace entries for elimination steps.
//!
//! ## Purpose
//!
//! This module defines the schema of the machine-readable trace the
//! engine produces: one `TraceEntry` per state-changing event, with an
//! optional matrix snapshot and an optional structured payload
//! describing the operation.
//!
//! ## Design notes
//!
//! * **Immutable**: Entries are never modified after being appended.
//! * **Self-describing**: A downstream renderer can walk the entries in
//!   order and format each one without knowing the algorithm.
//! * **Snapshots attached**: "Before" states are standalone `Snapshot`
//!   entries; "after" states ride on the `Operation` entry itself.
//!
//! ## Key concepts
//!
//! * **`EntryKind`**: Snapshot, Operation, or Result.
//! * **`StepDetail`**: Typed payload per operation kind (swap, diagonal
//!   multiplication, row combination, zero pivot, final derivation).
//!
//! ## Invariants
//!
//! * Every `Operation` entry carries a `StepDetail`.
//! * Row and column indices in details are zero-based; titles use
//!   one-based labels for human readers.
//!
//! ## Non-goals
//!
//! * This module does not format entries (see the `render` layer).
//! * This module does not enforce ordering (see the recorder).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::matrix::Matrix;

// ============================================================================
// Entry Kind
// ============================================================================

/// Category of a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A plain matrix state, typically recorded before a mutation.
    Snapshot,

    /// A state-changing operation (swap, diagonal fold, row combination).
    Operation,

    /// A terminal statement (zero pivot, final derivation).
    Result,
}

// ============================================================================
// Step Detail
// ============================================================================

/// Structured payload describing what an entry records.
#[derive(Debug, Clone, PartialEq)]
pub enum StepDetail<T> {
    /// Rows `rows.0` and `rows.1` were exchanged, flipping the sign.
    Swap {
        /// The two exchanged row indices `(i, max_row)`.
        rows: (usize, usize),
        /// Sign accumulator before the swap.
        sign_before: i8,
        /// Sign accumulator after the swap.
        sign_after: i8,
        /// Signed determinant view before the swap.
        det_before: T,
        /// Signed determinant view after the swap.
        det_after: T,
    },

    /// The pivot was folded into the running determinant.
    DiagonalMultiply {
        /// Pivot row/column index.
        row: usize,
        /// Pivot value `mat[row, row]`.
        pivot: T,
        /// Signed determinant view before the fold.
        det_before: T,
        /// Signed determinant view after the fold.
        det_after: T,
    },

    /// `row[target] <- row[target] - factor * row[source]`.
    ///
    /// This operation does not change the determinant.
    RowCombine {
        /// Pivot row index.
        source: usize,
        /// Eliminated row index.
        target: usize,
        /// Elimination factor `mat[target, source] / mat[source, source]`.
        factor: T,
    },

    /// A numerically zero pivot terminated the elimination early.
    ZeroPivot {
        /// Column at which the zero pivot was found.
        column: usize,
    },

    /// Final derivation: `determinant = sign * product(diagonal)`.
    Determinant {
        /// Accumulated sign from all row swaps.
        sign: i8,
        /// Diagonal entries of the final triangular matrix.
        diagonal: Vec<T>,
        /// The reported determinant.
        determinant: T,
    },
}

// ============================================================================
// Trace Entry
// ============================================================================

/// One ordered entry of the elimination trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry<T> {
    /// Short human-readable label of the step.
    pub title: String,

    /// Entry category.
    pub kind: EntryKind,

    /// Full matrix state at this point, when recorded.
    pub snapshot: Option<Matrix<T>>,

    /// Structured payload, present on `Operation` and most `Result` entries.
    pub detail: Option<StepDetail<T>>,
}

impl<T> TraceEntry<T> {
    /// A `Snapshot` entry holding the given matrix state.
    pub fn snapshot(title: String, matrix: Matrix<T>) -> Self {
        Self {
            title,
            kind: EntryKind::Snapshot,
            snapshot: Some(matrix),
            detail: None,
        }
    }

    /// An `Operation` entry with its payload and the post-operation state.
    pub fn operation(title: String, detail: StepDetail<T>, after: Matrix<T>) -> Self {
        Self {
            title,
            kind: EntryKind::Operation,
            snapshot: Some(after),
            detail: Some(detail),
        }
    }

    /// A `Result` entry with a payload and no snapshot.
    pub fn result(title: String, detail: StepDetail<T>) -> Self {
        Self {
            title,
            kind: EntryKind::Result,
            snapshot: None,
            detail: Some(detail),
        }
    }
}

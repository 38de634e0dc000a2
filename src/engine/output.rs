//! Output types for determinant computations.
//!
//! ## Purpose
//!
//! This module defines the `DetReport` struct which encapsulates the
//! outputs of one determinant computation: the determinant itself, the
//! sign and swap bookkeeping, the final matrix state, and the full
//! ordered trace.
//!
//! ## Design notes
//!
//! * **Trace included**: The trace is handed to the caller as an
//!   immutable sequence; it outlives the engine's working state.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `determinant == 0` whenever `termination` is `ZeroPivot`.
//! * The trace is never reordered after the run.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not render traces (see the `render` layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Matrix;
use crate::trace::entry::{EntryKind, TraceEntry};

// ============================================================================
// Termination
// ============================================================================

/// How the elimination loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// All columns were processed; the matrix is upper triangular.
    Triangularized,

    /// A numerically zero pivot stopped the loop at the given column.
    ZeroPivot {
        /// Column at which the zero pivot was found.
        column: usize,
    },
}

// ============================================================================
// Report
// ============================================================================

/// Complete output of one determinant computation.
#[derive(Debug, Clone)]
pub struct DetReport<T> {
    /// The determinant of the input matrix.
    pub determinant: T,

    /// Accumulated sign from all row swaps (`+1` or `-1`).
    pub sign: i8,

    /// Number of row swaps performed.
    pub swaps: usize,

    /// Order `n` of the input matrix.
    pub order: usize,

    /// How the elimination ended.
    pub termination: Termination,

    /// Final state of the working matrix.
    ///
    /// Upper triangular on `Triangularized`; partially eliminated when a
    /// zero pivot stopped the run early.
    pub triangular: Matrix<T>,

    /// Ordered trace of every state-changing step.
    pub trace: Vec<TraceEntry<T>>,
}

impl<T: Float> DetReport<T> {
    /// Whether the input matrix was found to be singular.
    pub fn is_singular(&self) -> bool {
        matches!(self.termination, Termination::ZeroPivot { .. })
    }

    /// Number of trace entries of the given kind.
    pub fn count_entries(&self, kind: EntryKind) -> usize {
        self.trace.iter().filter(|e| e.kind == kind).count()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for DetReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Order:       {}", self.order)?;
        writeln!(f, "  Determinant: {}", self.determinant)?;
        writeln!(f, "  Sign:        {:+}", self.sign)?;
        writeln!(f, "  Row swaps:   {}", self.swaps)?;
        match self.termination {
            Termination::Triangularized => writeln!(f, "  Outcome:     triangularized")?,
            Termination::ZeroPivot { column } => {
                writeln!(f, "  Outcome:     zero pivot at column {}", column + 1)?
            }
        }
        writeln!(f)?;

        writeln!(f, "Steps:")?;
        for entry in &self.trace {
            let tag = match entry.kind {
                EntryKind::Snapshot => "snapshot",
                EntryKind::Operation => "op",
                EntryKind::Result => "result",
            };
            writeln!(f, "  [{:>8}] {}", tag, entry.title)?;
        }

        Ok(())
    }
}

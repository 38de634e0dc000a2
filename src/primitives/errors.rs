//! Error types for determinant operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during matrix
//! construction, engine configuration, and determinant computation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual dimensions).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Empty matrices, ragged rows, non-square inputs.
//! 2. **Value validation**: Non-finite entries detected before elimination starts.
//! 3. **Parameter validation**: Invalid pivot tolerance, duplicate builder parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A singular matrix is NOT an error: it is a valid terminal outcome
//!   reported through the engine's normal return value.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "std")]
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for determinant operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DetError {
    /// Matrix has zero rows or zero columns.
    EmptyMatrix,

    /// Rows passed to a constructor do not all have the same length.
    RaggedRows {
        /// Index of the first row with a mismatched length.
        row: usize,
        /// Number of elements in that row.
        got: usize,
        /// Expected number of elements (length of row 0).
        expected: usize,
    },

    /// Element count does not match the requested dimensions.
    ShapeMismatch {
        /// Number of elements provided.
        got: usize,
        /// Number of elements required (`rows * cols`).
        expected: usize,
    },

    /// Determinants are only defined for square matrices.
    NotSquare {
        /// Number of rows in the input.
        rows: usize,
        /// Number of columns in the input.
        cols: usize,
    },

    /// Input matrix contains a NaN or infinite entry.
    NonFiniteEntry {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
    },

    /// Pivot tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyMatrix => write!(f, "Matrix has no elements"),
            Self::RaggedRows { row, got, expected } => {
                write!(
                    f,
                    "Ragged rows: row {row} has {got} elements, expected {expected}"
                )
            }
            Self::ShapeMismatch { got, expected } => {
                write!(f, "Shape mismatch: got {got} elements, expected {expected}")
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square: got {rows}x{cols}")
            }
            Self::NonFiniteEntry { row, col } => {
                write!(f, "Non-finite entry at ({row}, {col})")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DetError {}

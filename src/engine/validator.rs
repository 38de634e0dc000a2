//! Input validation for engine configuration and matrices.
//!
//! ## Purpose
//!
//! This module provides validation functions for determinant engine
//! configuration and input matrices. It checks requirements such as
//! squareness, finite values, and tolerance bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Before any state**: Shape violations are reported before a
//!   working state or trace exists.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input matrices.
//! * This module does not perform the elimination itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DetError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and input data.
///
/// All methods return `Result<(), DetError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate that the input matrix is square.
    pub fn validate_square<T: Float>(matrix: &Matrix<T>) -> Result<(), DetError> {
        if !matrix.is_square() {
            return Err(DetError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(())
    }

    /// Validate that every entry is finite (no NaN or infinity).
    pub fn validate_finite<T: Float>(matrix: &Matrix<T>) -> Result<(), DetError> {
        if let Some((row, col)) = matrix.first_non_finite() {
            return Err(DetError::NonFiniteEntry { row, col });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a pivot tolerance component.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), DetError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(DetError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), DetError> {
        if let Some(parameter) = duplicate_param {
            return Err(DetError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

//! High-level API for traced determinant computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It
//! implements a fluent builder pattern for configuring the engine
//! (tolerance policy, step recording) and exposes the `determinant`
//! operation on the built model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   input matrices are validated when `.determinant()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GaussdetBuilder`] via `Gaussdet::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.record_steps()`, ...).
//! 3. Call `.build()` to obtain a reusable [`GaussdetModel`].
//! 4. Call `.determinant(&matrix)` as often as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::zero_pivot::PivotTolerance;
use crate::engine::executor::{DetExecutor, EngineConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::zero_pivot::{DEFAULT_ABS_TOLERANCE, DEFAULT_REL_TOLERANCE};
pub use crate::engine::output::{DetReport, Termination};
pub use crate::primitives::errors::DetError;
pub use crate::primitives::matrix::Matrix;
pub use crate::trace::entry::{EntryKind, StepDetail, TraceEntry};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the determinant engine.
#[derive(Debug, Clone)]
pub struct GaussdetBuilder<T> {
    /// Absolute zero-pivot tolerance.
    pub tolerance: Option<T>,

    /// Relative zero-pivot tolerance.
    pub relative_tolerance: Option<T>,

    /// Whether to record per-row elimination entries.
    pub record_steps: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GaussdetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GaussdetBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            relative_tolerance: None,
            record_steps: None,
            duplicate_param: None,
        }
    }

    /// Set the absolute zero-pivot tolerance (default `1e-8`).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the relative zero-pivot tolerance (default `1e-5`).
    pub fn relative_tolerance(mut self, tolerance: T) -> Self {
        if self.relative_tolerance.is_some() {
            self.duplicate_param = Some("relative_tolerance");
        }
        self.relative_tolerance = Some(tolerance);
        self
    }

    /// Enable or disable per-row elimination entries (default enabled).
    pub fn record_steps(mut self, enabled: bool) -> Self {
        if self.record_steps.is_some() {
            self.duplicate_param = Some("record_steps");
        }
        self.record_steps = Some(enabled);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<GaussdetModel<T>, DetError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
        }
        if let Some(tol) = self.relative_tolerance {
            Validator::validate_tolerance(tol)?;
        }

        let defaults = PivotTolerance::default();
        let tolerance = PivotTolerance {
            abs: self.tolerance.unwrap_or(defaults.abs),
            rel: self.relative_tolerance.unwrap_or(defaults.rel),
        };

        Ok(GaussdetModel {
            config: EngineConfig {
                tolerance,
                record_steps: self.record_steps.unwrap_or(true),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured determinant engine, reusable across inputs.
#[derive(Debug, Clone)]
pub struct GaussdetModel<T> {
    config: EngineConfig<T>,
}

impl<T: Float> GaussdetModel<T> {
    /// Compute the determinant of `input`, producing the full trace.
    ///
    /// The input matrix is only read; the engine operates on an internal
    /// copy. Fails with [`DetError::NotSquare`] for non-square inputs and
    /// [`DetError::NonFiniteEntry`] when an entry is NaN or infinite,
    /// before any state is created.
    pub fn determinant(&self, input: &Matrix<T>) -> Result<DetReport<T>, DetError> {
        Validator::validate_square(input)?;
        Validator::validate_finite(input)?;

        let output = DetExecutor::run_with_config(input, self.config);

        Ok(DetReport {
            determinant: output.determinant,
            sign: output.sign,
            swaps: output.swaps,
            order: input.rows(),
            termination: output.termination,
            triangular: output.triangular,
            trace: output.trace,
        })
    }
}

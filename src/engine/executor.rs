//! Execution engine for traced determinant computation.
//!
//! ## Purpose
//!
//! This module provides the orchestrator that drives one pass of
//! Gaussian elimination with partial pivoting over the working copy of
//! the input matrix, producing the determinant and the complete ordered
//! trace. It coordinates the per-column algorithm steps and owns the
//! trace recorder for the duration of the run.
//!
//! ## Design notes
//!
//! * **State machine**: `Initial -> Pivoting(i) -> {ZeroPivotDetected |
//!   Eliminating(i)} -> Pivoting(i + 1) -> ... -> Triangularized`.
//! * **Strictly sequential**: Single-threaded and deterministic, `O(n^3)`
//!   worst case; the engine holds no process-wide mutable state, so
//!   concurrent invocations are independent.
//! * **Data flows downward**: The engine passes the recorder to each
//!   sub-step; no component reads the trace back.
//!
//! ## Invariants
//!
//! * The caller's matrix is never mutated; the engine works on a copy.
//! * On zero-pivot termination the returned determinant is exactly `0`
//!   and the trace ends with the detection entry; columns from the
//!   detection point onward are left unprocessed.
//! * On completion the trace ends with the final triangular snapshot
//!   and the derivation `det = sign * product(diagonal)`.
//!
//! ## Non-goals
//!
//! * This module does not validate input shape (handled by `validator`).
//! * This module does not format results (see `output` and `render`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::diagonal::accumulate_diagonal;
use crate::algorithms::elimination::eliminate_below;
use crate::algorithms::pivot::select_pivot;
use crate::algorithms::swap::swap_into_place;
use crate::algorithms::zero_pivot::{guard_zero_pivot, PivotTolerance};
use crate::engine::output::Termination;
use crate::primitives::matrix::Matrix;
use crate::primitives::state::WorkingState;
use crate::trace::entry::{StepDetail, TraceEntry};
use crate::trace::recorder::TraceRecorder;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one determinant computation.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig<T> {
    /// Tolerance policy for the zero-pivot test.
    pub tolerance: PivotTolerance<T>,

    /// Whether to record per-row elimination entries.
    ///
    /// When disabled, row-combination arithmetic still runs but produces
    /// no trace entries; pivoting, diagonal, and terminal entries are
    /// always recorded.
    pub record_steps: bool,
}

impl<T: Float> Default for EngineConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: PivotTolerance::default(),
            record_steps: true,
        }
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output of one executor run, assembled into a report by the api layer.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// The computed determinant.
    pub determinant: T,

    /// Final sign accumulator.
    pub sign: i8,

    /// Number of row swaps performed.
    pub swaps: usize,

    /// How the loop ended.
    pub termination: Termination,

    /// Final state of the working matrix.
    pub triangular: Matrix<T>,

    /// The accumulated trace.
    pub trace: Vec<TraceEntry<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrator for traced Gaussian elimination.
pub struct DetExecutor;

impl DetExecutor {
    /// Run one elimination pass over a copy of `input`.
    ///
    /// Precondition: `input` is square (enforced by the validator before
    /// this is reached).
    pub fn run_with_config<T: Float>(input: &Matrix<T>, config: EngineConfig<T>) -> ExecutorOutput<T> {
        debug_assert!(input.is_square());

        let mut state = WorkingState::new(input);
        let mut recorder = TraceRecorder::new();
        let mut swaps = 0usize;
        let n = state.order();

        recorder.append(TraceEntry::snapshot(
            String::from("Original matrix"),
            state.matrix.clone(),
        ));

        for col in 0..n {
            let max_row = select_pivot(&state, col);

            if swap_into_place(&mut state, col, max_row, &mut recorder) {
                swaps += 1;
            }

            if guard_zero_pivot(&mut state, col, &config.tolerance, &mut recorder) {
                return ExecutorOutput {
                    determinant: state.determinant(),
                    sign: state.sign(),
                    swaps,
                    termination: Termination::ZeroPivot { column: col },
                    triangular: state.matrix.clone(),
                    trace: recorder.finish(),
                };
            }

            accumulate_diagonal(&mut state, col, &mut recorder);
            eliminate_below(&mut state, col, config.record_steps, &mut recorder);
        }

        recorder.append(TraceEntry::snapshot(
            String::from("Final triangular matrix"),
            state.matrix.clone(),
        ));
        recorder.append(TraceEntry::result(
            String::from("Determinant"),
            StepDetail::Determinant {
                sign: state.sign(),
                diagonal: state.matrix.diag(),
                determinant: state.determinant(),
            },
        ));

        ExecutorOutput {
            determinant: state.determinant(),
            sign: state.sign(),
            swaps,
            termination: Termination::Triangularized,
            triangular: state.matrix.clone(),
            trace: recorder.finish(),
        }
    }
}

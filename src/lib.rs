//! # gaussdet — Traced determinant computation for Rust
//!
//! A determinant engine that performs Gaussian elimination with partial
//! pivoting over a square real matrix while producing a complete,
//! ordered, machine-readable trace of every state-changing event: pivot
//! search, row swap, zero-pivot termination, diagonal multiplication,
//! row elimination, and the final triangular derivation.
//!
//! ## Why a trace?
//!
//! The determinant alone is one number; the trace is the whole
//! derivation. Each step is a structured [`prelude::TraceEntry`] that a
//! downstream renderer can walk in order and typeset (the built-in
//! `render` layer produces LaTeX) without knowing anything about the
//! algorithm beyond the entry schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use gaussdet::prelude::*;
//!
//! let m = Matrix::from_rows(&[vec![0.0, 2.0], vec![3.0, 4.0]])?;
//!
//! let model = Gaussdet::new()
//!     .tolerance(1e-8)     // zero-pivot absolute tolerance
//!     .record_steps(true)  // per-row elimination entries
//!     .build()?;
//!
//! let report = model.determinant(&m)?;
//!
//! assert_eq!(report.determinant, -6.0);
//! assert_eq!(report.sign, -1);
//! assert_eq!(report.swaps, 1);
//! println!("{}", report);
//! # Result::<(), DetError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Order:       2
//!   Determinant: -6
//!   Sign:        -1
//!   Row swaps:   1
//!   Outcome:     triangularized
//!
//! Steps:
//!   [snapshot] Original matrix
//!   [snapshot] Before step 1.1: current state
//!   [      op] Step 1.1: Swap R1 <-> R2
//!   [      op] Step 1.2: Diagonal factor a[1,1] = 3.00
//!   [snapshot] Before step 1.2: current state
//!   [      op] Step 1.2: R2 <- R2 - 0.00 * R1
//!   [      op] Step 2.2: Diagonal factor a[2,2] = 2.00
//!   [snapshot] Final triangular matrix
//!   [  result] Determinant
//! ```
//!
//! ## Singular matrices
//!
//! A numerically zero pivot is not an error: the run terminates early,
//! the determinant is exactly `0`, and the trace ends with the detection
//! entry.
//!
//! ```rust
//! use gaussdet::prelude::*;
//!
//! let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]])?;
//! let report = Gaussdet::new().build()?.determinant(&m)?;
//!
//! assert_eq!(report.determinant, 0.0);
//! assert!(report.is_singular());
//! # Result::<(), DetError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `determinant` returns a `Result<DetReport<T>, DetError>`. Errors are
//! structural (non-square input, non-finite entries, misconfiguration),
//! never transient; the `?` operator is idiomatic.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Disable for `no_std`
//!   (`alloc` is still required).
//! - `generate` (default): Random matrix constructors via `rand`.
//! - `dev`: Expose internal modules for development and testing.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - matrix, working state, errors.
mod primitives;

// Layer 2: Trace - entry schema and append-only recorder.
mod trace;

// Layer 3: Algorithms - per-column elimination steps.
mod algorithms;

// Layer 4: Engine - orchestration, validation, output types.
mod engine;

// Layer 5: Collaborators - matrix generation and trace rendering.
#[cfg(feature = "generate")]
pub mod generate;
pub mod render;

// High-level fluent API.
mod api;

// Standard gaussdet prelude.
pub mod prelude {
    pub use crate::api::{
        DetError, DetReport, EntryKind, GaussdetBuilder as Gaussdet, Matrix, StepDetail,
        Termination, TraceEntry, DEFAULT_ABS_TOLERANCE, DEFAULT_REL_TOLERANCE,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod trace {
        pub use crate::trace::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

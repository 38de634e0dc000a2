//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the determinant computation by coordinating
//! between primitives (matrix, working state) and algorithms (pivoting,
//! elimination). It provides the per-column driving loop, input
//! validation, and the public result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Collaborators (generate, render)
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Trace
//!   ↓
//! Layer 1: Primitives
//! ```

/// Orchestrator for traced Gaussian elimination.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for determinant computations.
pub mod output;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared error
//! types used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Collaborators (generate, render)
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Trace
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Dense matrix container.
pub mod matrix;

/// Per-run mutable elimination state.
pub mod state;

//! Layer 3: Algorithms
//!
//! This layer implements the per-column steps of Gaussian elimination
//! with partial pivoting: pivot selection, conditional row exchange,
//! zero-pivot detection, diagonal accumulation, and sub-diagonal
//! elimination. It contains the "business logic" of the determinant
//! computation but is orchestrated by the engine layer.

// Partial-pivot selection.
pub mod pivot;

// Conditional row exchange with sign tracking.
pub mod swap;

// Zero-pivot detection and tolerance policy.
pub mod zero_pivot;

// Diagonal accumulation of the running determinant.
pub mod diagonal;

// Sub-diagonal elimination.
pub mod elimination;

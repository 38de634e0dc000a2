//! Layer 5: Trace rendering.
//!
//! This layer consumes the engine's trace and formats it for
//! presentation. It depends only on the public entry schema.

// LaTeX rendering.
pub mod latex;

//! Layer 2: Trace
//!
//! This layer defines the machine-readable trace the engine emits: the
//! entry schema and the append-only recorder. It depends only on the
//! primitives layer.

// Trace entry schema.
pub mod entry;

// Append-only recorder.
pub mod recorder;

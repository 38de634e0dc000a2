//! Append-only trace recorder.
//!
//! ## Purpose
//!
//! This module owns the ordered log of trace entries produced during one
//! engine run. Every sub-step appends through the same recorder, so
//! insertion order is exactly the chronological order of algorithm
//! events.
//!
//! ## Design notes
//!
//! * **Append-only**: No entry is ever removed or mutated after being
//!   appended; the recorder exposes append and finalize only.
//! * **Explicitly owned**: The engine owns the recorder and passes it by
//!   mutable reference to each sub-step. There is no shared global
//!   state.
//!
//! ## Invariants
//!
//! * Entries are never reordered or deduplicated.
//! * `finish` consumes the recorder; the returned trace outlives the
//!   working state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::trace::entry::TraceEntry;

// ============================================================================
// Trace Recorder
// ============================================================================

/// Ordered, append-only log of trace entries for one engine run.
#[derive(Debug, Clone)]
pub struct TraceRecorder<T> {
    entries: Vec<TraceEntry<T>>,
}

impl<T> TraceRecorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry at the end of the log.
    #[inline]
    pub fn append(&mut self, entry: TraceEntry<T>) {
        self.entries.push(entry);
    }

    /// Number of entries recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalize the recorder, handing the accumulated sequence to the caller.
    pub fn finish(self) -> Vec<TraceEntry<T>> {
        self.entries
    }
}

impl<T> Default for TraceRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

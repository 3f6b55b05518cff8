//! Progress reporting seam and result counters.
//!
//! The engine never performs I/O; it invokes a [`ProgressObserver`] at
//! checkpoints (every `progress_interval` discovered shapes and at phase
//! boundaries), and the caller decides what to do with the snapshot.

use serde::{Deserialize, Serialize};

/// Snapshot of the engine's working state at a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Discovered shapes so far, weighted by symmetry-orbit size.
    pub shapes: u64,
    /// Distinct single-sector slices observed.
    pub sectors: usize,
    /// Halves expanded so far (expansion cursor).
    pub halves_expanded: usize,
    /// Halves catalogued so far.
    pub halves_total: usize,
    /// Frontier entries still pending.
    pub frontier_pending: usize,
    /// Frontier queue length, including tombstoned entries.
    pub frontier_queued: usize,
    /// Shapes currently classified in category 2.
    pub residual: usize,
}

/// Callback invoked by the engine at progress checkpoints.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: &SearchProgress);
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _progress: &SearchProgress) {}
}

/// Final tallies of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounts {
    /// Total reachable shapes, weighted by symmetry-orbit size.
    pub shapes: u64,
    /// Size of the halves catalogue.
    pub halves: usize,
    /// Category-2 shapes: reachable, but with no known construction whose
    /// last step is a half swap.
    pub residual_shapes: usize,
    /// Distinct single-sector slices observed.
    pub sectors: usize,
}

//! Benchmark state profiles for the Silt delta engine.
//!
//! Provides pre-built snapshot pairs at known churn levels:
//!
//! - [`sparse_edit_pair`]: a zeroed world with `edits` scattered cell
//!   writes, for measuring cost against diff density
//! - [`simulated_pair`]: two frames of mock-simulated state, for
//!   realistic mixed churn across every field class

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_core::consts::AIR_CELLS;
use silt_core::Snapshot;
use silt_test_utils::MockSimulator;

/// A snapshot pair differing in `edits` scattered air-pressure cells.
///
/// Edit positions stride the grid with a constant coprime to its size,
/// so every edit hits a distinct cell and hunks stay short.
///
/// # Panics
///
/// Panics if `edits` exceeds the grid size.
pub fn sparse_edit_pair(edits: usize) -> (Snapshot, Snapshot) {
    assert!(edits <= AIR_CELLS, "at most one edit per cell");
    let old = Snapshot::zeroed();
    let mut new = old.clone();
    for i in 0..edits {
        let cell = (i * 97) % AIR_CELLS;
        new.air_pressure[cell] = 1.0 + i as f32;
    }
    (old, new)
}

/// Two successive frames of mock-simulated state, `frames` steps into a
/// seeded run.
pub fn simulated_pair(seed: u64, frames: usize) -> (Snapshot, Snapshot) {
    let mut sim = MockSimulator::new(seed);
    let a = sim.run(frames);
    let b = sim.step();
    (a, b)
}

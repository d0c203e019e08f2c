//! Silt: bidirectional snapshot-delta time travel for cellular particle
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // The simulator hands over two snapshots of its state.
//! let older = Snapshot::zeroed();
//! let mut newer = older.clone();
//! newer.air_pressure[5] = 1.5;
//! newer.frame_count = 1;
//!
//! // One delta reconstructs either snapshot from the other, exactly.
//! let delta = SnapshotDelta::between(&older, &newer);
//! assert!(bitwise_eq(&delta.forward(&older), &newer));
//! assert!(bitwise_eq(&delta.restore(&newer), &older));
//!
//! // A bounded timeline strings deltas into undo/redo.
//! let mut timeline = Timeline::new(64, older);
//! timeline.record(newer);
//! assert_eq!(timeline.undo().map(|s| s.frame_count), Some(0));
//! assert_eq!(timeline.redo().map(|s| s.frame_count), Some(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `silt-core` | Snapshot schema, packed records, shape constants |
//! | [`delta`] | `silt-delta` | Hunk machinery, word views, fingerprint, compare |
//! | [`history`] | `silt-history` | The bounded undo/redo timeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Snapshot data model (re-export of `silt-core`).
pub use silt_core as model;

/// Delta engine (re-export of `silt-delta`).
pub use silt_delta as delta;

/// Undo/redo timeline (re-export of `silt-history`).
pub use silt_history as history;

/// The types most hosts need.
pub mod prelude {
    pub use silt_core::{
        AuthorsDoc, Justification, Particle, RngState, ShapeError, Sign, Snapshot, Stickman,
    };
    pub use silt_delta::{bitwise_eq, fingerprint, Side, SnapshotDelta};
    pub use silt_history::{RecordOutcome, Timeline};
}

//! Core data model for the Silt snapshot-delta engine.
//!
//! This is the leaf crate with no internal Silt dependencies. It defines
//! the compile-time simulation shape, the packed particle and stickman
//! records, sign and RNG state types, and the [`Snapshot`] struct that the
//! delta engine diffs and reconstructs.

// No `forbid(unsafe_code)` here: the packed records derive `Pod`, and
// that derive expands to the (machine-checked) unsafe trait impls. No
// hand-written unsafe exists in this crate.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod consts;
pub mod error;
pub mod particle;
pub mod rng;
pub mod sign;
pub mod snapshot;
pub mod stickman;

// Re-export core types at crate root for convenience.
pub use error::ShapeError;
pub use particle::Particle;
pub use rng::RngState;
pub use sign::{Justification, Sign};
pub use snapshot::{AuthorsDoc, Snapshot};
pub use stickman::Stickman;

//! Bidirectional snapshot-delta engine.
//!
//! A [`SnapshotDelta`] is built once from two snapshots `A` (older) and
//! `B` (newer) and can then reconstruct either from the other, any number
//! of times: [`SnapshotDelta::forward`] turns `A` into `B`,
//! [`SnapshotDelta::restore`] turns `B` back into `A`, both bit-exactly.
//! Deltas are the only persistent history unit — a host keeps one live
//! snapshot and a chain of deltas.
//!
//! Three difference strategies cover the snapshot schema:
//!
//! * [`HunkVector`] — run-length hunks over equal-length item sequences,
//!   for the static-size grids and tables. Float items compare bitwise.
//! * word-stream hunks — packed records ([`silt_core::Particle`],
//!   [`silt_core::Stickman`]) reinterpreted as flat 32-bit words via
//!   [`words()`], then hunk-diffed uniformly.
//! * [`SingleDiff`] — whole-value replacement for fields that change
//!   rarely or monolithically (signs, authors, frame count, RNG state).
//!
//! The particle table gets a fourth, hybrid treatment: the common prefix
//! of the two tables is word-diffed and the differing tails are copied
//! verbatim (see [`SnapshotDelta`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod delta;
pub mod fingerprint;
pub mod hunk;
pub mod single;
pub mod words;

pub use compare::{bitwise_eq, divergences, Divergence};
pub use delta::SnapshotDelta;
pub use fingerprint::fingerprint;
pub use hunk::{BitEq, Diff, DiffRun, Hunk, HunkVector, Side};
pub use single::SingleDiff;
pub use words::{words, words_mut, words_per, Word, WORD_BYTES};

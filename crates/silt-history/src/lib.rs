//! Host-side time travel: a bounded timeline of snapshot deltas.
//!
//! The delta engine makes one snapshot reconstructible from its
//! neighbour; this crate strings that into undo/redo. A [`Timeline`]
//! keeps exactly one live [`silt_core::Snapshot`] plus a capped chain of
//! deltas behind it and the deltas undone ahead of it — never more than
//! one full snapshot in memory, no matter how deep the history.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod timeline;

pub use timeline::{RecordOutcome, Timeline};

//! Field-level bitwise comparison of snapshots.
//!
//! The engine's own tests (and hosts chasing a divergence) need a
//! stronger statement than "the fingerprints differ": which field, and
//! where. [`divergences`] walks the schema and reports the first
//! disagreeing index per field under the same bitwise equality the
//! differ uses, so `divergences(a, b).is_empty()` is exactly the
//! round-trip notion of snapshot equality.

use silt_core::{with_snapshot_schema, Snapshot};

use crate::hunk::BitEq;
use crate::words::words;

/// One diverging field between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Schema name of the field.
    pub field: &'static str,
    /// First disagreeing index: an element index for grids, a word
    /// index for packed-record fields and the particle table, zero for
    /// whole-value fields. A length mismatch reports the shorter
    /// length.
    pub index: usize,
}

fn first_divergence<T: BitEq>(a: &[T], b: &[T]) -> Option<usize> {
    let n = a.len().min(b.len());
    for i in 0..n {
        if !a[i].bit_eq(&b[i]) {
            return Some(i);
        }
    }
    (a.len() != b.len()).then_some(n)
}

/// Report every field where the two snapshots disagree at the bit
/// level, in schema order.
pub fn divergences(a: &Snapshot, b: &Snapshot) -> Vec<Divergence> {
    let mut out = Vec::new();

    macro_rules! grid {
        ($f:ident) => {
            if let Some(index) = first_divergence(&a.$f, &b.$f) {
                out.push(Divergence {
                    field: stringify!($f),
                    index,
                });
            }
        };
    }
    macro_rules! recs {
        ($f:ident) => {
            if let Some(index) = first_divergence(words(&a.$f), words(&b.$f)) {
                out.push(Divergence {
                    field: stringify!($f),
                    index,
                });
            }
        };
    }
    macro_rules! single {
        ($f:ident) => {
            if a.$f != b.$f {
                out.push(Divergence {
                    field: stringify!($f),
                    index: 0,
                });
            }
        };
    }
    with_snapshot_schema!(grid, recs, single);

    if let Some(index) = first_divergence(words(&a.particles), words(&b.particles)) {
        out.push(Divergence {
            field: "particles",
            index,
        });
    }
    out
}

/// Whether two snapshots are bit-for-bit identical across every field.
pub fn bitwise_eq(a: &Snapshot, b: &Snapshot) -> bool {
    divergences(a, b).is_empty()
}

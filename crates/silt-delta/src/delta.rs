//! The [`SnapshotDelta`] type: build once, apply in either direction.

use silt_core::{with_snapshot_schema, AuthorsDoc, Particle, RngState, Sign, Snapshot};

use crate::hunk::{HunkVector, Side};
use crate::single::SingleDiff;
use crate::words::{words, words_mut, words_per, Word};

/// The bidirectional difference between two snapshots.
///
/// `d = SnapshotDelta::between(a, b)` yields a delta for which
/// `d.forward(a)` reconstructs `b` and `d.restore(b)` reconstructs `a`,
/// bit-exactly. The delta mirrors the snapshot field-for-field: grids
/// become hunk vectors, packed-record tables become hunk vectors over
/// their word streams, and the rarely-changing fields become single
/// whole-value diffs.
///
/// The particle table is special. It is logically static-size (a bounded
/// slot space) but mostly unoccupied, so snapshots carry only the live
/// prefix and its length varies. The delta therefore word-diffs the
/// common prefix — `min(a.particles.len(), b.particles.len())` records,
/// which is Static Enough for the hunk machinery — and copies each
/// side's tail beyond it verbatim into [`extra_parts_old`] /
/// [`extra_parts_new`].
///
/// A delta is immutable once built and never consumed by application;
/// both appliers clone the supplied base and write into the clone.
/// Applying a delta to a base it was not built against is not detected
/// and produces a silently wrong snapshot.
///
/// [`extra_parts_old`]: SnapshotDelta::extra_parts_old
/// [`extra_parts_new`]: SnapshotDelta::extra_parts_new
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotDelta {
    /// Air pressure hunks.
    pub air_pressure: HunkVector<f32>,
    /// Horizontal air velocity hunks.
    pub air_velocity_x: HunkVector<f32>,
    /// Vertical air velocity hunks.
    pub air_velocity_y: HunkVector<f32>,
    /// Ambient heat hunks.
    pub ambient_heat: HunkVector<f32>,
    /// Gravity mass hunks.
    pub grav_mass: HunkVector<f32>,
    /// Horizontal gravity force hunks.
    pub grav_force_x: HunkVector<f32>,
    /// Vertical gravity force hunks.
    pub grav_force_y: HunkVector<f32>,
    /// Gravity wall mask hunks.
    pub grav_mask: HunkVector<u32>,
    /// Wall/block map hunks.
    pub block_map: HunkVector<u8>,
    /// Electricity map hunks.
    pub elec_map: HunkVector<u8>,
    /// Air blocking flag hunks.
    pub block_air: HunkVector<u8>,
    /// Ambient-heat blocking flag hunks.
    pub block_air_h: HunkVector<u8>,
    /// Fan velocity x hunks.
    pub fan_velocity_x: HunkVector<f32>,
    /// Fan velocity y hunks.
    pub fan_velocity_y: HunkVector<f32>,
    /// Wireless channel hunks.
    pub wireless_data: HunkVector<u32>,
    /// Portal buffer hunks, over the reinterpreted word stream.
    pub portal_particles: HunkVector<Word>,
    /// Stickman hunks, over the reinterpreted word stream.
    pub stickmen: HunkVector<Word>,
    /// Whole-vector sign replacement.
    pub signs: SingleDiff<Vec<Sign>>,
    /// Whole-document authors replacement.
    pub authors: SingleDiff<AuthorsDoc>,
    /// Frame counter replacement.
    pub frame_count: SingleDiff<u64>,
    /// RNG state replacement.
    pub rng_state: SingleDiff<RngState>,
    /// Hunks over the word stream of the particle tables' common prefix.
    pub common_particles: HunkVector<Word>,
    /// The older table's records beyond the common prefix.
    pub extra_parts_old: Vec<Particle>,
    /// The newer table's records beyond the common prefix.
    pub extra_parts_new: Vec<Particle>,
}

// Compile-time assertion: a built delta is freely shareable across
// threads (it is immutable and applied by shared reference).
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SnapshotDelta>();
};

impl SnapshotDelta {
    /// Build the difference between two snapshots.
    ///
    /// Does not mutate its inputs; deterministic for a given pair. Both
    /// snapshots must come from the same simulator build — static-size
    /// field lengths are only `debug_assert!`ed equal.
    pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
        debug_assert!(old.validate().is_ok(), "old snapshot out of shape");
        debug_assert!(new.validate().is_ok(), "new snapshot out of shape");

        let mut delta = Self::default();

        macro_rules! grid {
            ($f:ident) => {
                delta.$f = HunkVector::between(&old.$f, &new.$f)
            };
        }
        macro_rules! recs {
            ($f:ident) => {
                delta.$f = HunkVector::between(words(&old.$f), words(&new.$f))
            };
        }
        macro_rules! single {
            ($f:ident) => {
                delta.$f = SingleDiff::between(&old.$f, &new.$f)
            };
        }
        with_snapshot_schema!(grid, recs, single);

        let common = old.particles.len().min(new.particles.len());
        let common_words = common * words_per::<Particle>();
        delta.common_particles = HunkVector::between(
            &words(&old.particles)[..common_words],
            &words(&new.particles)[..common_words],
        );
        delta.extra_parts_old = old.particles[common..].to_vec();
        delta.extra_parts_new = new.particles[common..].to_vec();

        delta
    }

    /// Reconstruct the newer snapshot from the older one.
    pub fn forward(&self, old: &Snapshot) -> Snapshot {
        self.reconstruct(old, Side::New)
    }

    /// Reconstruct the older snapshot from the newer one.
    pub fn restore(&self, new: &Snapshot) -> Snapshot {
        self.reconstruct(new, Side::Old)
    }

    fn reconstruct(&self, base: &Snapshot, side: Side) -> Snapshot {
        let mut out = base.clone();

        macro_rules! grid {
            ($f:ident) => {
                self.$f.apply(&mut out.$f, side)
            };
        }
        macro_rules! recs {
            ($f:ident) => {
                self.$f.apply(words_mut(&mut out.$f), side)
            };
        }
        macro_rules! single {
            ($f:ident) => {
                self.$f.apply(&mut out.$f, side)
            };
        }
        with_snapshot_schema!(grid, recs, single);

        // Common hunks first, while the clone still has the base's
        // length; they only touch the prefix both tables share. Then the
        // table takes its final length and the stored tail overwrites
        // everything past the common prefix.
        self.common_particles.apply(words_mut(&mut out.particles), side);
        let (common, tail) = match side {
            Side::New => (
                base.particles.len() - self.extra_parts_old.len(),
                &self.extra_parts_new,
            ),
            Side::Old => (
                base.particles.len() - self.extra_parts_new.len(),
                &self.extra_parts_old,
            ),
        };
        out.particles
            .resize(common + tail.len(), bytemuck::Zeroable::zeroed());
        out.particles[common..].copy_from_slice(tail);

        out
    }

    /// Whether the two snapshots were indistinguishable: no hunks in any
    /// field, no valid single diffs, empty particle tails.
    ///
    /// Hosts use this to skip recording no-op frames.
    pub fn is_empty(&self) -> bool {
        let mut empty = true;

        macro_rules! grid {
            ($f:ident) => {
                empty &= self.$f.is_empty()
            };
        }
        macro_rules! recs {
            ($f:ident) => {
                empty &= self.$f.is_empty()
            };
        }
        macro_rules! single {
            ($f:ident) => {
                empty &= !self.$f.is_valid()
            };
        }
        with_snapshot_schema!(grid, recs, single);

        empty
            && self.common_particles.is_empty()
            && self.extra_parts_old.is_empty()
            && self.extra_parts_new.is_empty()
    }
}

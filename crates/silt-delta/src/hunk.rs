//! Run-length hunk differences between equal-length item sequences.
//!
//! [`HunkVector::between`] scans two sequences once and records every
//! maximal run of disagreeing indices as a [`Hunk`]: the run's start
//! offset plus the old/new value pair at each position. Applying a hunk
//! vector writes one chosen [`Side`] of every recorded pair back into a
//! target sequence, unconditionally — the applier does not check that the
//! target currently holds the opposite side, so pairing a delta with the
//! wrong base silently produces a wrong (but memory-safe) result.

use smallvec::SmallVec;

/// Which side of a recorded difference to write when applying.
///
/// `New` moves a base snapshot forward in time; `Old` restores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Write the values captured from the older sequence.
    Old,
    /// Write the values captured from the newer sequence.
    New,
}

/// Item equality as the differ sees it.
///
/// Floats compare bitwise: `-0.0` differs from `+0.0` and NaNs with
/// different payloads differ from each other. Anything looser would let
/// a delta drop a difference it cannot reproduce, breaking the exact
/// round trip.
pub trait BitEq {
    /// Whether the two items are indistinguishable at the bit level.
    fn bit_eq(&self, other: &Self) -> bool;
}

impl BitEq for f32 {
    #[inline]
    fn bit_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

macro_rules! bit_eq_is_eq {
    ($($t:ty),*) => {
        $(impl BitEq for $t {
            #[inline]
            fn bit_eq(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

bit_eq_is_eq!(u8, u32, i32, u64);

/// The value a single position holds on each side of the difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff<T> {
    /// Value in the older sequence.
    pub old: T,
    /// Value in the newer sequence.
    pub new: T,
}

impl<T: Copy> Diff<T> {
    /// The value recorded for the given side.
    #[inline]
    pub fn side(&self, side: Side) -> T {
        match side {
            Side::Old => self.old,
            Side::New => self.new,
        }
    }
}

/// Backing store for one hunk's diff run.
///
/// Runs are overwhelmingly short — a lone cell, or a few words of one
/// record — so small runs live inline in the hunk.
pub type DiffRun<T> = SmallVec<[Diff<T>; 4]>;

/// A maximal contiguous run of disagreeing indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Hunk<T> {
    /// Index of the run's first item in the diffed sequences.
    pub offset: usize,
    /// Old/new pair for each position of the run, in index order.
    pub diffs: DiffRun<T>,
}

/// An ordered list of non-overlapping, non-abutting [`Hunk`]s over a
/// fixed-length logical index space.
///
/// Construction through [`HunkVector::between`] guarantees: hunks appear
/// in strictly ascending offset order, no hunk is empty, and two
/// consecutive hunks are separated by at least one agreeing index.
#[derive(Clone, Debug, PartialEq)]
pub struct HunkVector<T> {
    hunks: Vec<Hunk<T>>,
}

impl<T> Default for HunkVector<T> {
    fn default() -> Self {
        Self { hunks: Vec::new() }
    }
}

impl<T> HunkVector<T> {
    /// The hunks, in ascending offset order.
    pub fn hunks(&self) -> &[Hunk<T>] {
        &self.hunks
    }

    /// Whether the diffed sequences agreed everywhere.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of recorded old/new pairs across all hunks.
    pub fn diff_count(&self) -> usize {
        self.hunks.iter().map(|h| h.diffs.len()).sum()
    }
}

impl<T: Copy + BitEq> HunkVector<T> {
    /// Scan two equal-length sequences and record every run of
    /// disagreement.
    ///
    /// The sequences must be the same length; in release builds the scan
    /// stops at the shorter of the two.
    pub fn between(old: &[T], new: &[T]) -> Self {
        debug_assert_eq!(old.len(), new.len(), "hunk streams must be equal length");
        let len = old.len().min(new.len());

        let mut hunks = Vec::new();
        let mut open: Option<usize> = None;
        for i in 0..len {
            let differs = !old[i].bit_eq(&new[i]);
            match (differs, open) {
                (true, None) => open = Some(i),
                (false, Some(start)) => {
                    hunks.push(Hunk::capture(start, &old[start..i], &new[start..i]));
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            hunks.push(Hunk::capture(start, &old[start..len], &new[start..len]));
        }
        Self { hunks }
    }
}

impl<T: Copy> HunkVector<T> {
    /// Write the chosen side of every recorded pair into `target`.
    ///
    /// The target must cover every touched index; when it is the other
    /// snapshot's field of the same declared length, the build invariant
    /// guarantees that.
    pub fn apply(&self, target: &mut [T], side: Side) {
        for hunk in &self.hunks {
            for (j, diff) in hunk.diffs.iter().enumerate() {
                target[hunk.offset + j] = diff.side(side);
            }
        }
    }
}

impl<T: Copy> Hunk<T> {
    fn capture(offset: usize, old_run: &[T], new_run: &[T]) -> Self {
        let diffs = old_run
            .iter()
            .zip(new_run)
            .map(|(&old, &new)| Diff { old, new })
            .collect();
        Self { offset, diffs }
    }
}

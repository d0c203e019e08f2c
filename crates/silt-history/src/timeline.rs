//! The [`Timeline`]: one present snapshot, two chains of deltas.

use std::collections::VecDeque;

use silt_core::Snapshot;
use silt_delta::SnapshotDelta;

/// What [`Timeline::record`] did with a submitted snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The snapshot differed from the present one; its delta joined the
    /// undo chain.
    Recorded {
        /// Whether the oldest delta was evicted to stay within capacity.
        evicted: bool,
    },
    /// The snapshot was indistinguishable from the present one; nothing
    /// was recorded and the redo chain survives.
    Unchanged,
}

/// A bounded undo/redo timeline.
///
/// Holds the present snapshot, a `past` chain of deltas leading up to it
/// (oldest first) and a `future` chain of undone deltas. [`undo`]
/// crosses the newest past delta via `restore`, [`redo`] re-crosses it
/// via `forward`; because deltas are exact in both directions, bouncing
/// between undo and redo reproduces every state bit-for-bit.
///
/// `capacity` bounds the total number of retained deltas. When a
/// [`record`] would exceed it, the oldest delta falls off and the states
/// behind it become unreachable.
///
/// [`undo`]: Timeline::undo
/// [`redo`]: Timeline::redo
/// [`record`]: Timeline::record
pub struct Timeline {
    present: Snapshot,
    /// Deltas behind the present, oldest first.
    past: VecDeque<SnapshotDelta>,
    /// Deltas ahead of the present, in undo order (newest undo last-in).
    future: Vec<SnapshotDelta>,
    capacity: usize,
}

impl Timeline {
    /// Create a timeline anchored at `initial`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero — a timeline that cannot retain a
    /// single delta cannot undo anything.
    pub fn new(capacity: usize, initial: Snapshot) -> Self {
        assert!(capacity >= 1, "Timeline capacity must be >= 1, got {capacity}");
        debug_assert!(initial.validate().is_ok(), "initial snapshot out of shape");
        Self {
            present: initial,
            past: VecDeque::with_capacity(capacity),
            future: Vec::new(),
            capacity,
        }
    }

    /// The snapshot the timeline currently stands on.
    pub fn present(&self) -> &Snapshot {
        &self.present
    }

    /// Maximum number of retained deltas.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many states can be undone from here.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// How many undone states can be redone from here.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Adopt a new present snapshot, recording the delta from the old
    /// one.
    ///
    /// A snapshot identical to the present is dropped without touching
    /// history. Otherwise the redo chain is discarded (time branched),
    /// the delta joins the undo chain — evicting the oldest delta if the
    /// timeline is full — and `snapshot` becomes the present.
    pub fn record(&mut self, snapshot: Snapshot) -> RecordOutcome {
        debug_assert!(snapshot.validate().is_ok(), "recorded snapshot out of shape");

        let delta = SnapshotDelta::between(&self.present, &snapshot);
        if delta.is_empty() {
            return RecordOutcome::Unchanged;
        }

        self.future.clear();
        let evicted = self.past.len() == self.capacity;
        if evicted {
            self.past.pop_front();
        }
        self.past.push_back(delta);
        self.present = snapshot;
        RecordOutcome::Recorded { evicted }
    }

    /// Step one state back, or `None` at the oldest retained state.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let delta = self.past.pop_back()?;
        self.present = delta.restore(&self.present);
        self.future.push(delta);
        Some(&self.present)
    }

    /// Step one undone state forward again, or `None` at the newest.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let delta = self.future.pop()?;
        self.present = delta.forward(&self.present);
        self.past.push_back(delta);
        Some(&self.present)
    }
}

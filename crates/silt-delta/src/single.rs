//! Whole-value differences for rarely-changing fields.

use crate::hunk::{Diff, Side};

/// An optional whole-field replacement.
///
/// Captures the old/new pair only when the two sides differ; a clean
/// diff applies as a no-op. Used for fields where run-length structure
/// offers nothing: the sign vector and authors document change
/// monolithically, the frame counter and RNG state are single values.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleDiff<T> {
    diff: Option<Diff<T>>,
}

impl<T> Default for SingleDiff<T> {
    fn default() -> Self {
        Self { diff: None }
    }
}

impl<T> SingleDiff<T> {
    /// Whether the two sides differed at build time.
    pub fn is_valid(&self) -> bool {
        self.diff.is_some()
    }

    /// The captured pair, when the sides differed.
    pub fn diff(&self) -> Option<&Diff<T>> {
        self.diff.as_ref()
    }
}

impl<T: Clone + PartialEq> SingleDiff<T> {
    /// Capture the pair if `old` and `new` differ.
    pub fn between(old: &T, new: &T) -> Self {
        if old == new {
            Self { diff: None }
        } else {
            Self {
                diff: Some(Diff {
                    old: old.clone(),
                    new: new.clone(),
                }),
            }
        }
    }

    /// Overwrite `target` with the chosen side; leave it untouched when
    /// the sides were equal.
    pub fn apply(&self, target: &mut T, side: Side) {
        if let Some(diff) = &self.diff {
            target.clone_from(match side {
                Side::Old => &diff.old,
                Side::New => &diff.new,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_sides_capture_nothing() {
        let d = SingleDiff::between(&5u64, &5u64);
        assert!(!d.is_valid());

        let mut target = 9u64;
        d.apply(&mut target, Side::New);
        assert_eq!(target, 9, "clean diff must not touch the target");
    }

    #[test]
    fn differing_sides_apply_both_ways() {
        let d = SingleDiff::between(&vec![1, 2], &vec![1, 2, 3]);
        assert!(d.is_valid());

        let mut target = vec![1, 2];
        d.apply(&mut target, Side::New);
        assert_eq!(target, vec![1, 2, 3]);
        d.apply(&mut target, Side::Old);
        assert_eq!(target, vec![1, 2]);
    }
}

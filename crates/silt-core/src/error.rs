//! Error types for the snapshot data model.

use std::error::Error;
use std::fmt;

/// A snapshot violates the compile-time schema shape.
///
/// Returned by [`Snapshot::validate`](crate::Snapshot::validate) at the
/// simulator boundary. A shape violation inside the engine itself is a
/// bug, not a recoverable condition — the diff and apply paths assume
/// validated inputs and only `debug_assert!` them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A static-size field does not have its schema-declared length.
    LengthMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Length the schema declares.
        expected: usize,
        /// Length actually found.
        got: usize,
    },
    /// The particle table exceeds the compile-time cap.
    ParticleOverflow {
        /// Length actually found.
        got: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                field,
                expected,
                got,
            } => {
                write!(f, "field '{field}' has length {got}, schema declares {expected}")
            }
            Self::ParticleOverflow { got } => {
                write!(f, "particle table holds {got} records, over the cap")
            }
        }
    }
}

impl Error for ShapeError {}

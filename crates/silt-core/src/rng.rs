//! Simulator PRNG state.

use std::fmt;

/// The simulator's PRNG internal state: a pair of 64-bit words.
///
/// The delta engine never interprets these words; it only needs to carry
/// them between snapshots exactly, so that restoring a snapshot resumes
/// the simulation's random stream where it left off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RngState(pub [u64; 2]);

impl fmt::Display for RngState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}:{:016x}", self.0[0], self.0[1])
    }
}

impl From<[u64; 2]> for RngState {
    fn from(words: [u64; 2]) -> Self {
        Self(words)
    }
}

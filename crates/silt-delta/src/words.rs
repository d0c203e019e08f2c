//! Packed records viewed as 32-bit word streams.
//!
//! Per-field diffing of particle and stickman records would cost more
//! code than it saves: every field is a 4-byte value, so a record slice
//! reinterprets losslessly as a flat stream of unsigned words and the
//! ordinary hunk machinery diffs it. The `Pod` bound makes the
//! reinterpretation safe and — because `Pod` types cannot contain
//! padding — fully deterministic.

use bytemuck::Pod;
use silt_core::{Particle, Stickman};

/// The atomic unit of packed-record diffing.
pub type Word = u32;

/// Byte width of one [`Word`].
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

// Packed records must divide into whole words.
const _: () = assert!(core::mem::size_of::<Particle>() % WORD_BYTES == 0);
const _: () = assert!(core::mem::size_of::<Stickman>() % WORD_BYTES == 0);

/// Number of words one record of type `R` occupies.
pub const fn words_per<R>() -> usize {
    core::mem::size_of::<R>() / WORD_BYTES
}

/// View a record slice as its word stream.
pub fn words<R: Pod>(records: &[R]) -> &[Word] {
    bytemuck::cast_slice(records)
}

/// View a record slice as its word stream, mutably.
pub fn words_mut<R: Pod>(records: &mut [R]) -> &mut [Word] {
    bytemuck::cast_slice_mut(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn particle_word_count_matches_layout() {
        assert_eq!(words_per::<Particle>(), 12);
        assert_eq!(words_per::<Stickman>(), 32);
    }

    #[test]
    fn word_view_covers_all_records() {
        let parts = vec![Particle::zeroed(); 3];
        assert_eq!(words(&parts).len(), 3 * words_per::<Particle>());
    }

    #[test]
    fn writes_through_word_view_land_in_fields() {
        let mut parts = vec![Particle::zeroed(); 2];
        let temp_word = 5; // kind, x, y, vx, vy, then temp
        words_mut(&mut parts)[words_per::<Particle>() + temp_word] = 300.5f32.to_bits();
        assert_eq!(parts[1].temp, 300.5);
        assert_eq!(parts[0].temp, 0.0);
    }

    #[test]
    fn float_fields_pass_through_bitwise() {
        let mut parts = vec![Particle::zeroed(); 1];
        parts[0].vx = f32::from_bits(0x7fc0_0042); // NaN with payload
        assert_eq!(words(&parts)[3], 0x7fc0_0042);
    }
}

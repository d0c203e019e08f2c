//! The packed stickman (player character) record.

use bytemuck::{Pod, Zeroable};

/// One stickman player slot.
///
/// Same layout discipline as [`Particle`](crate::Particle): `#[repr(C)]`,
/// every field a 4-byte value, no padding (enforced by the `Pod` derive),
/// so the delta engine diffs stickmen as a flat 32-bit word stream. The
/// on/off fields (`spawned`, `rocket_boots`, `fan`) are stored as whole
/// words to preserve that property.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Stickman {
    /// Leg endpoint coordinates, interleaved x/y for eight segments.
    pub legs: [f32; 16],
    /// Per-segment acceleration terms.
    pub accs: [f32; 8],
    /// Current command bitmask (movement/action keys).
    pub comm: u32,
    /// Previous frame's command bitmask.
    pub pcomm: u32,
    /// Element the player currently produces.
    pub elem: u32,
    /// Nonzero while the player is spawned into the world.
    pub spawned: u32,
    /// Frames elapsed since the current animation state began.
    pub frames: u32,
    /// Nonzero while rocket boots are active.
    pub rocket_boots: u32,
    /// Nonzero while the player rides a fan stream.
    pub fan: u32,
    /// Identifier of the spawn point that produced this player.
    pub spawn_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_no_padding() {
        // 16 + 8 floats plus 8 scalar words.
        assert_eq!(core::mem::size_of::<Stickman>(), 128);
        assert_eq!(core::mem::align_of::<Stickman>(), 4);
    }

    #[test]
    fn zeroed_stickman_is_all_zero_words() {
        let s = Stickman::zeroed();
        let words: &[u32] = bytemuck::cast_slice(core::slice::from_ref(&s));
        assert!(words.iter().all(|&w| w == 0));
    }
}

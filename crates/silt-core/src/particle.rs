//! The packed particle record.
//!
//! [`Particle`] is the unit of the dynamic particle table and of the
//! portal holding buffer. Its layout is deliberately rigid: `#[repr(C)]`
//! with every field exactly four bytes wide, so the delta engine can view
//! a particle slice as a flat stream of 32-bit words without per-field
//! comparison code. The `Pod` derive rejects any layout with padding at
//! compile time, which keeps those words fully deterministic.

use bytemuck::{Pod, Zeroable};

/// One particle of simulation state.
///
/// All twelve fields are 4-byte values; floats participate in word-level
/// diffing bitwise, so two particles compare equal only when they are
/// byte-for-byte identical.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Element identifier. Zero marks a dead table slot.
    pub kind: u32,
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
    /// Horizontal velocity.
    pub vx: f32,
    /// Vertical velocity.
    pub vy: f32,
    /// Temperature in kelvin.
    pub temp: f32,
    /// Secondary element identifier (payload for transmuting elements).
    pub ctype: u32,
    /// Remaining lifetime in frames; element-specific meaning, may be
    /// negative.
    pub life: i32,
    /// General-purpose element scratch value.
    pub tmp: i32,
    /// Second general-purpose element scratch value.
    pub tmp2: i32,
    /// Decoration colour as packed ARGB.
    pub dcolour: u32,
    /// Per-particle behaviour flags.
    pub flags: u32,
}

//! Compile-time simulation shape.
//!
//! Every static-size snapshot field derives its length from the constants
//! here, so two snapshots produced by the same build can never disagree on
//! a field's size. The air, gravity and fan grids share one coarsened
//! resolution ([`AIR_CELLS`]); the particle table is bounded by
//! [`MAX_PARTICLES`] but usually far from full.

/// Width of the particle space in pixels.
pub const SIM_W: usize = 512;

/// Height of the particle space in pixels.
pub const SIM_H: usize = 320;

/// Edge length of one coarse cell in pixels.
pub const CELL: usize = 4;

/// Coarse grid width in cells.
pub const AIR_W: usize = SIM_W / CELL;

/// Coarse grid height in cells.
pub const AIR_H: usize = SIM_H / CELL;

/// Element count of every coarse-resolution grid (air, gravity, fans,
/// block and electricity maps).
pub const AIR_CELLS: usize = AIR_W * AIR_H;

/// Number of wireless transceiver channels.
pub const WIRELESS_CHANNELS: usize = 128;

/// Hard cap on the particle table. The live table is a prefix of this
/// logical space and its length varies between snapshots.
pub const MAX_PARTICLES: usize = SIM_W * SIM_H;

/// Number of stickman player slots.
pub const STICKMAN_SLOTS: usize = 2;

/// Capacity of the portal holding buffer, in particle records.
pub const PORTAL_SLOTS: usize = 256;

//! The [`Snapshot`] struct and the central field schema.
//!
//! A snapshot is a complete, immutable record of simulator state at one
//! frame. Fields fall into two groups:
//!
//! * **Static size** — grids and tables whose lengths derive from the
//!   constants in [`crate::consts`] and are therefore identical across
//!   every snapshot a build produces. These are diffed as run-length hunk
//!   vectors.
//! * **Dynamic size** — the particle table, signs, the authors document
//!   and the frame/RNG scalars, whose contents (and sometimes lengths)
//!   vary freely between snapshots.
//!
//! The schema itself is written exactly once, in
//! [`with_snapshot_schema!`]. The delta builder, both appliers, the
//! emptiness test and the fingerprint all expand that one table, so a new
//! field added there cannot be forgotten on one side of the round trip.

use crate::consts::{AIR_CELLS, MAX_PARTICLES, PORTAL_SLOTS, STICKMAN_SLOTS, WIRELESS_CHANNELS};
use crate::error::ShapeError;
use crate::particle::Particle;
use crate::rng::RngState;
use crate::sign::Sign;
use crate::stickman::Stickman;

/// The authorship document: a structured JSON-like tree carried through
/// snapshots and compared monolithically.
pub type AuthorsDoc = serde_json::Value;

/// A complete record of simulator state at one frame.
///
/// Snapshots are produced by the simulator and handed to the delta engine
/// by shared reference; the engine never mutates them. Reconstructed
/// snapshots are freshly owned by the caller.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Air pressure per coarse cell.
    pub air_pressure: Vec<f32>,
    /// Horizontal air velocity per coarse cell.
    pub air_velocity_x: Vec<f32>,
    /// Vertical air velocity per coarse cell.
    pub air_velocity_y: Vec<f32>,
    /// Ambient heat per coarse cell.
    pub ambient_heat: Vec<f32>,
    /// Newtonian gravity mass per coarse cell.
    pub grav_mass: Vec<f32>,
    /// Horizontal gravity force per coarse cell.
    pub grav_force_x: Vec<f32>,
    /// Vertical gravity force per coarse cell.
    pub grav_force_y: Vec<f32>,
    /// Gravity wall mask per coarse cell.
    pub grav_mask: Vec<u32>,
    /// Wall/block type per coarse cell.
    pub block_map: Vec<u8>,
    /// Electricity activation per coarse cell.
    pub elec_map: Vec<u8>,
    /// Air blocking flags per coarse cell.
    pub block_air: Vec<u8>,
    /// Ambient-heat blocking flags per coarse cell.
    pub block_air_h: Vec<u8>,
    /// Fan velocity x-component per coarse cell.
    pub fan_velocity_x: Vec<f32>,
    /// Fan velocity y-component per coarse cell.
    pub fan_velocity_y: Vec<f32>,
    /// Wireless transceiver state, one word per channel.
    pub wireless_data: Vec<u32>,
    /// Portal holding buffer: particles in transit, all slots present.
    pub portal_particles: Vec<Particle>,
    /// Player slots, all present whether spawned or not.
    pub stickmen: Vec<Stickman>,
    /// Live particle table. Length varies between snapshots, bounded by
    /// [`MAX_PARTICLES`].
    pub particles: Vec<Particle>,
    /// In-world signs.
    pub signs: Vec<Sign>,
    /// Authorship metadata document.
    pub authors: AuthorsDoc,
    /// Frames simulated since the world was created.
    pub frame_count: u64,
    /// Simulator PRNG state at this frame.
    pub rng_state: RngState,
}

// Compile-time assertion: snapshots move freely between threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Snapshot>();
};

impl Snapshot {
    /// The all-zero snapshot: every static-size field at its schema
    /// length and zero-filled, dynamic fields empty, a null authors
    /// document.
    pub fn zeroed() -> Self {
        Self {
            air_pressure: vec![0.0; AIR_CELLS],
            air_velocity_x: vec![0.0; AIR_CELLS],
            air_velocity_y: vec![0.0; AIR_CELLS],
            ambient_heat: vec![0.0; AIR_CELLS],
            grav_mass: vec![0.0; AIR_CELLS],
            grav_force_x: vec![0.0; AIR_CELLS],
            grav_force_y: vec![0.0; AIR_CELLS],
            grav_mask: vec![0; AIR_CELLS],
            block_map: vec![0; AIR_CELLS],
            elec_map: vec![0; AIR_CELLS],
            block_air: vec![0; AIR_CELLS],
            block_air_h: vec![0; AIR_CELLS],
            fan_velocity_x: vec![0.0; AIR_CELLS],
            fan_velocity_y: vec![0.0; AIR_CELLS],
            wireless_data: vec![0; WIRELESS_CHANNELS],
            portal_particles: vec![bytemuck::Zeroable::zeroed(); PORTAL_SLOTS],
            stickmen: vec![bytemuck::Zeroable::zeroed(); STICKMAN_SLOTS],
            particles: Vec::new(),
            signs: Vec::new(),
            authors: AuthorsDoc::Null,
            frame_count: 0,
            rng_state: RngState::default(),
        }
    }

    /// Check every static-size field against its schema-declared length
    /// and the particle table against its cap.
    ///
    /// Intended for the simulator boundary. Inside the engine a shape
    /// violation is a bug; the diff path only `debug_assert!`s it.
    pub fn validate(&self) -> Result<(), ShapeError> {
        fn check(field: &'static str, expected: usize, got: usize) -> Result<(), ShapeError> {
            if expected == got {
                Ok(())
            } else {
                Err(ShapeError::LengthMismatch {
                    field,
                    expected,
                    got,
                })
            }
        }

        check("air_pressure", AIR_CELLS, self.air_pressure.len())?;
        check("air_velocity_x", AIR_CELLS, self.air_velocity_x.len())?;
        check("air_velocity_y", AIR_CELLS, self.air_velocity_y.len())?;
        check("ambient_heat", AIR_CELLS, self.ambient_heat.len())?;
        check("grav_mass", AIR_CELLS, self.grav_mass.len())?;
        check("grav_force_x", AIR_CELLS, self.grav_force_x.len())?;
        check("grav_force_y", AIR_CELLS, self.grav_force_y.len())?;
        check("grav_mask", AIR_CELLS, self.grav_mask.len())?;
        check("block_map", AIR_CELLS, self.block_map.len())?;
        check("elec_map", AIR_CELLS, self.elec_map.len())?;
        check("block_air", AIR_CELLS, self.block_air.len())?;
        check("block_air_h", AIR_CELLS, self.block_air_h.len())?;
        check("fan_velocity_x", AIR_CELLS, self.fan_velocity_x.len())?;
        check("fan_velocity_y", AIR_CELLS, self.fan_velocity_y.len())?;
        check("wireless_data", WIRELESS_CHANNELS, self.wireless_data.len())?;
        check("portal_particles", PORTAL_SLOTS, self.portal_particles.len())?;
        check("stickmen", STICKMAN_SLOTS, self.stickmen.len())?;

        if self.particles.len() > MAX_PARTICLES {
            return Err(ShapeError::ParticleOverflow {
                got: self.particles.len(),
            });
        }
        Ok(())
    }
}

/// The one authoritative list of snapshot fields and their diff
/// strategies.
///
/// Callers pass three local macro names, one per strategy; each is
/// invoked once per field of that strategy, in schema order:
///
/// * `$grid!(field)` — static-size item sequence, diffed as a run-length
///   hunk vector with bitwise item equality.
/// * `$records!(field)` — static-size packed-record sequence, diffed as a
///   hunk vector over its reinterpreted 32-bit word stream.
/// * `$single!(field)` — whole-value field, diffed as a single
///   valid/old/new replacement.
///
/// The particle table is deliberately absent: its common/extra split is
/// handled case-by-case by the delta engine.
#[macro_export]
macro_rules! with_snapshot_schema {
    ($grid:ident, $records:ident, $single:ident) => {
        $grid!(air_pressure);
        $grid!(air_velocity_x);
        $grid!(air_velocity_y);
        $grid!(ambient_heat);
        $grid!(grav_mass);
        $grid!(grav_force_x);
        $grid!(grav_force_y);
        $grid!(grav_mask);
        $grid!(block_map);
        $grid!(elec_map);
        $grid!(block_air);
        $grid!(block_air_h);
        $grid!(fan_velocity_x);
        $grid!(fan_velocity_y);
        $grid!(wireless_data);
        $records!(portal_particles);
        $records!(stickmen);
        $single!(signs);
        $single!(authors);
        $single!(frame_count);
        $single!(rng_state);
    };
}

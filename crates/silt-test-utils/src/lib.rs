//! Test utilities for Silt development.
//!
//! [`MockSimulator`] is a deterministic, seeded stand-in for the real
//! simulator: it owns a live [`Snapshot`] and advances it one frame at a
//! time through bounded batches of random schema-preserving edits.
//! Successive snapshots from one mock are exactly the "valid snapshot
//! pairs from a single simulator" the delta engine's guarantees are
//! stated over, so tests and benches can churn realistic state without
//! dragging in a physics core.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use bytemuck::Zeroable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use silt_core::consts::{AIR_CELLS, MAX_PARTICLES, PORTAL_SLOTS, STICKMAN_SLOTS, WIRELESS_CHANNELS};
use silt_core::{Justification, Particle, RngState, Sign, Snapshot, Stickman};

/// Upper bound on edits per simulated frame.
const MAX_EDITS_PER_STEP: usize = 24;

/// A deterministic, seeded simulator stand-in.
///
/// Identical seeds produce identical snapshot sequences on every
/// platform (the edit stream comes from ChaCha8, never from host
/// randomness), which keeps failing property-test seeds replayable.
pub struct MockSimulator {
    rng: ChaCha8Rng,
    state: Snapshot,
}

impl MockSimulator {
    /// Create a mock with an all-zero world and a seed-derived carried
    /// RNG state.
    pub fn new(seed: u64) -> Self {
        let mut state = Snapshot::zeroed();
        state.rng_state = RngState([seed, seed.rotate_left(17) ^ 0x9e37_79b9_7f4a_7c15]);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            state,
        }
    }

    /// The current live snapshot.
    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    /// Advance one frame and return the fresh snapshot.
    pub fn step(&mut self) -> Snapshot {
        let edits = self.rng.gen_range(1..=MAX_EDITS_PER_STEP);
        for _ in 0..edits {
            self.random_edit();
        }
        self.state.frame_count += 1;

        // Scramble the carried PRNG words the way a real step would.
        let s = &mut self.state.rng_state.0;
        s[0] = s[0]
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        s[1] ^= s[0] >> 17;

        self.state.clone()
    }

    /// Advance `frames` frames and return the final snapshot.
    pub fn run(&mut self, frames: usize) -> Snapshot {
        for _ in 1..frames.max(1) {
            self.step();
        }
        self.step()
    }

    /// A random live particle record.
    pub fn particle(&mut self) -> Particle {
        Particle {
            kind: self.rng.gen_range(1..64),
            x: self.rng.gen::<f32>() * 512.0,
            y: self.rng.gen::<f32>() * 320.0,
            vx: self.rng.gen::<f32>() * 4.0 - 2.0,
            vy: self.rng.gen::<f32>() * 4.0 - 2.0,
            temp: 273.15 + self.rng.gen::<f32>() * 100.0,
            ctype: self.rng.gen_range(0..64),
            life: self.rng.gen_range(-1..1000),
            tmp: self.rng.gen_range(0..16),
            tmp2: 0,
            dcolour: self.rng.gen(),
            flags: 0,
        }
    }

    /// A random spawned stickman record.
    pub fn stickman(&mut self) -> Stickman {
        let mut man = Stickman {
            spawned: 1,
            elem: self.rng.gen_range(1..64),
            spawn_id: self.rng.gen_range(0..4),
            ..Stickman::zeroed()
        };
        for leg in &mut man.legs {
            *leg = self.rng.gen::<f32>() * 320.0;
        }
        man
    }

    fn cell(&mut self) -> usize {
        self.rng.gen_range(0..AIR_CELLS)
    }

    fn signed_unit(&mut self) -> f32 {
        self.rng.gen::<f32>() * 2.0 - 1.0
    }

    fn random_edit(&mut self) {
        match self.rng.gen_range(0..14u32) {
            0 => {
                let c = self.cell();
                self.state.air_pressure[c] = self.signed_unit() * 8.0;
                self.state.air_velocity_x[c] = self.signed_unit();
                self.state.air_velocity_y[c] = self.signed_unit();
            }
            1 => {
                let c = self.cell();
                self.state.ambient_heat[c] = 273.15 + self.rng.gen::<f32>() * 50.0;
            }
            2 => {
                let c = self.cell();
                self.state.grav_mass[c] = self.rng.gen::<f32>();
                self.state.grav_force_x[c] = self.signed_unit();
                self.state.grav_force_y[c] = self.signed_unit();
                self.state.grav_mask[c] = self.rng.gen_range(0..2);
            }
            3 => {
                let c = self.cell();
                self.state.block_map[c] = self.rng.gen_range(0..16);
                self.state.elec_map[c] = self.rng.gen_range(0..4);
            }
            4 => {
                let c = self.cell();
                self.state.block_air[c] = self.rng.gen_range(0..2);
                self.state.block_air_h[c] = self.rng.gen_range(0..2);
            }
            5 => {
                let c = self.cell();
                self.state.fan_velocity_x[c] = self.signed_unit() * 4.0;
                self.state.fan_velocity_y[c] = self.signed_unit() * 4.0;
            }
            6 => {
                let ch = self.rng.gen_range(0..WIRELESS_CHANNELS);
                self.state.wireless_data[ch] = self.rng.gen();
            }
            7 => {
                let slot = self.rng.gen_range(0..PORTAL_SLOTS);
                self.state.portal_particles[slot] = self.particle();
            }
            8 => {
                let slot = self.rng.gen_range(0..STICKMAN_SLOTS);
                match self.rng.gen_range(0..3u32) {
                    0 => {
                        let leg = self.rng.gen_range(0..16);
                        let nudge = self.signed_unit();
                        self.state.stickmen[slot].legs[leg] += nudge;
                    }
                    1 => {
                        self.state.stickmen[slot].rocket_boots ^= 1;
                    }
                    _ => {
                        self.state.stickmen[slot].comm = self.rng.gen_range(0..16);
                        self.state.stickmen[slot].frames =
                            self.state.stickmen[slot].frames.wrapping_add(1);
                    }
                }
            }
            9 => {
                if self.state.particles.len() < MAX_PARTICLES {
                    let p = self.particle();
                    self.state.particles.push(p);
                }
            }
            10 => {
                self.state.particles.pop();
            }
            11 => {
                if !self.state.particles.is_empty() {
                    let i = self.rng.gen_range(0..self.state.particles.len());
                    let p = &mut self.state.particles[i];
                    p.temp += 1.0;
                    p.vx = -p.vx;
                    p.life = p.life.saturating_sub(1);
                }
            }
            12 => {
                if self.state.signs.len() < 8 && self.rng.gen_bool(0.7) {
                    let text = format!("marker {}", self.rng.gen_range(0..100u32));
                    let sign = Sign::new(
                        self.rng.gen_range(0..512),
                        self.rng.gen_range(0..320),
                        Justification::Middle,
                        text,
                    );
                    self.state.signs.push(sign);
                } else {
                    self.state.signs.pop();
                }
            }
            _ => {
                self.state.authors = serde_json::json!({
                    "user": format!("tester-{}", self.rng.gen_range(0..8u32)),
                    "save": self.rng.gen_range(0..10_000u32),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_in_shape() {
        let mut sim = MockSimulator::new(7);
        for _ in 0..50 {
            let snap = sim.step();
            assert_eq!(snap.validate(), Ok(()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MockSimulator::new(99);
        let mut b = MockSimulator::new(99);
        for _ in 0..10 {
            let sa = a.step();
            let sb = b.step();
            assert_eq!(sa.frame_count, sb.frame_count);
            assert_eq!(sa.rng_state, sb.rng_state);
            assert_eq!(sa.particles, sb.particles);
            assert_eq!(sa.wireless_data, sb.wireless_data);
            assert_eq!(
                sa.air_pressure.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
                sb.air_pressure.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = MockSimulator::new(1);
        let mut b = MockSimulator::new(2);
        let sa = a.run(5);
        let sb = b.run(5);
        assert_ne!(sa.rng_state, sb.rng_state);
    }

    #[test]
    fn frame_count_tracks_steps() {
        let mut sim = MockSimulator::new(3);
        sim.step();
        sim.step();
        assert_eq!(sim.state().frame_count, 2);
    }
}

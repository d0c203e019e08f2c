//! Pinned end-to-end scenarios: exact hunk placement and the float edge
//! cases that bitwise equality exists for.

use bytemuck::Zeroable;

use silt_core::{Justification, Particle, Sign, Snapshot};
use silt_delta::{bitwise_eq, words_per, SnapshotDelta, Word};
use silt_test_utils::MockSimulator;

/// Word index of `temp` inside the particle layout
/// (after `kind`, `x`, `y`, `vx`, `vy`).
const PARTICLE_TEMP_WORD: usize = 5;

/// Word index of `rocket_boots` inside the stickman layout
/// (16 leg words, 8 acc words, then the scalar block).
const STICKMAN_ROCKET_BOOTS_WORD: usize = 16 + 8 + 5;

#[test]
fn untouched_world_produces_a_fully_empty_delta() {
    let a = Snapshot::zeroed();
    let b = Snapshot::zeroed();
    let delta = SnapshotDelta::between(&a, &b);

    assert!(delta.is_empty());
    assert!(delta.air_pressure.is_empty());
    assert!(delta.stickmen.is_empty());
    assert!(!delta.signs.is_valid());
    assert!(!delta.frame_count.is_valid());
    assert!(delta.extra_parts_old.is_empty());
    assert!(delta.extra_parts_new.is_empty());

    assert!(bitwise_eq(&delta.forward(&a), &a));
    assert!(bitwise_eq(&delta.restore(&a), &a));
}

#[test]
fn single_pressure_cell_becomes_one_unit_hunk() {
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    b.air_pressure[5] = 1.5;

    let delta = SnapshotDelta::between(&a, &b);
    let hunks = delta.air_pressure.hunks();
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].offset, 5);
    assert_eq!(hunks[0].diffs.len(), 1);
    assert_eq!(hunks[0].diffs[0].old, 0.0);
    assert_eq!(hunks[0].diffs[0].new, 1.5);

    let forwarded = delta.forward(&a);
    assert_eq!(forwarded.air_pressure[5], 1.5);
    assert!(bitwise_eq(&forwarded, &b));
}

#[test]
fn added_particle_lands_in_the_new_tail() {
    let mut sim = MockSimulator::new(11);
    let p1 = sim.particle();
    let p2 = sim.particle();

    let mut a = Snapshot::zeroed();
    a.particles = vec![p1];
    let mut b = a.clone();
    b.particles.push(p2);

    let delta = SnapshotDelta::between(&a, &b);
    assert!(delta.common_particles.is_empty());
    assert!(delta.extra_parts_old.is_empty());
    assert_eq!(delta.extra_parts_new, vec![p2]);

    assert_eq!(delta.forward(&a).particles, vec![p1, p2]);
    assert_eq!(delta.restore(&b).particles, vec![p1]);
}

#[test]
fn in_place_particle_edit_hits_the_temp_word() {
    let mut sim = MockSimulator::new(12);
    let p1 = sim.particle();
    let mut p1_hot = p1;
    p1_hot.temp += 40.0;

    let mut a = Snapshot::zeroed();
    a.particles = vec![p1];
    let mut b = a.clone();
    b.particles = vec![p1_hot];

    let delta = SnapshotDelta::between(&a, &b);
    assert!(delta.extra_parts_old.is_empty());
    assert!(delta.extra_parts_new.is_empty());

    let hunks = delta.common_particles.hunks();
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].offset, PARTICLE_TEMP_WORD);
    assert_eq!(hunks[0].diffs.len(), 1);
    assert_eq!(hunks[0].diffs[0].old, p1.temp.to_bits());
    assert_eq!(hunks[0].diffs[0].new, p1_hot.temp.to_bits());

    assert!(bitwise_eq(&delta.forward(&a), &b));
    assert!(bitwise_eq(&delta.restore(&b), &a));
}

#[test]
fn sign_vectors_replace_wholesale() {
    let s1 = Sign::new(10, 12, Justification::Left, "inlet");
    let s2 = Sign::new(80, 40, Justification::Right, "outlet");

    let mut a = Snapshot::zeroed();
    a.signs = vec![s1.clone()];
    let mut b = a.clone();
    b.signs.push(s2.clone());

    let delta = SnapshotDelta::between(&a, &b);
    assert!(delta.signs.is_valid());

    assert_eq!(delta.forward(&a).signs, vec![s1.clone(), s2]);
    assert_eq!(delta.restore(&b).signs, vec![s1]);
}

#[test]
fn rocket_boots_toggle_hits_its_word_in_the_stickman_stream() {
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    b.stickmen[0].rocket_boots = 1;

    let delta = SnapshotDelta::between(&a, &b);
    let hunks = delta.stickmen.hunks();
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].offset, STICKMAN_ROCKET_BOOTS_WORD);
    assert_eq!(hunks[0].diffs[0].old, 0);
    assert_eq!(hunks[0].diffs[0].new, 1);

    assert!(bitwise_eq(&delta.forward(&a), &b));
    assert!(bitwise_eq(&delta.restore(&b), &a));
}

#[test]
fn second_stickman_hunks_offset_past_the_first() {
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    b.stickmen[1].rocket_boots = 1;

    let delta = SnapshotDelta::between(&a, &b);
    assert_eq!(
        delta.stickmen.hunks()[0].offset,
        32 + STICKMAN_ROCKET_BOOTS_WORD
    );
}

#[test]
fn signed_zero_round_trips_exactly() {
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    b.fan_velocity_y[19] = -0.0;

    let delta = SnapshotDelta::between(&a, &b);
    assert_eq!(delta.fan_velocity_y.hunks().len(), 1);

    let forwarded = delta.forward(&a);
    assert_eq!(forwarded.fan_velocity_y[19].to_bits(), (-0.0f32).to_bits());
    let restored = delta.restore(&forwarded);
    assert_eq!(restored.fan_velocity_y[19].to_bits(), 0.0f32.to_bits());
}

#[test]
fn nan_payloads_round_trip_through_particle_words() {
    let mut p = Particle::zeroed();
    p.kind = 3;
    let mut a = Snapshot::zeroed();
    a.particles = vec![p];

    let mut b = a.clone();
    b.particles[0].vy = f32::from_bits(0x7fc0_0bad);

    let delta = SnapshotDelta::between(&a, &b);
    assert_eq!(delta.common_particles.hunks().len(), 1);

    let forwarded = delta.forward(&a);
    assert_eq!(forwarded.particles[0].vy.to_bits(), 0x7fc0_0bad);
    assert!(bitwise_eq(&delta.restore(&forwarded), &a));
}

#[test]
fn portal_slots_diff_as_one_word_stream() {
    let mut sim = MockSimulator::new(13);
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    let slot = 3;
    b.portal_particles[slot] = sim.particle();

    let delta = SnapshotDelta::between(&a, &b);
    let hunks = delta.portal_particles.hunks();
    assert!(!hunks.is_empty());
    let slot_words = slot * words_per::<Particle>();
    assert!(hunks[0].offset >= slot_words);
    assert!(
        hunks.last().unwrap().offset + hunks.last().unwrap().diffs.len()
            <= slot_words + words_per::<Particle>()
    );

    assert!(bitwise_eq(&delta.forward(&a), &b));
}

#[test]
fn frame_and_rng_state_travel_as_single_diffs() {
    let mut sim = MockSimulator::new(14);
    let a = sim.step();
    let b = sim.step();
    assert_ne!(a.frame_count, b.frame_count);

    let delta = SnapshotDelta::between(&a, &b);
    assert!(delta.frame_count.is_valid());
    assert!(delta.rng_state.is_valid());

    let restored = delta.restore(&b);
    assert_eq!(restored.frame_count, a.frame_count);
    assert_eq!(restored.rng_state, a.rng_state);
}

// Misuse is defined as silently wrong, never unsafe: applying a delta to
// an unrelated base of the same shape must still produce an in-shape
// snapshot.
#[test]
fn wrong_base_is_wrong_but_in_shape() {
    let mut sim = MockSimulator::new(15);
    let a = sim.step();
    let b = sim.step();
    let delta = SnapshotDelta::between(&a, &b);

    let mut unrelated = MockSimulator::new(16);
    // Keep the particle table at least as long as the delta expects so
    // the length arithmetic stays in range.
    let mut other = unrelated.step();
    while other.particles.len() < a.particles.len() {
        let p = unrelated.particle();
        other.particles.push(p);
    }

    let out = delta.forward(&other);
    assert_eq!(out.validate(), Ok(()));
}

#[test]
fn word_alias_matches_hunk_item_type() {
    let a = Snapshot::zeroed();
    let mut b = a.clone();
    b.stickmen[0].comm = 9;
    let delta = SnapshotDelta::between(&a, &b);
    let w: Word = delta.stickmen.hunks()[0].diffs[0].new;
    assert_eq!(w, 9);
}

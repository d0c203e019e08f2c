//! Fast deterministic state fingerprinting.
//!
//! FNV-1a over every snapshot field in schema order, folding the field
//! index at each boundary so that field order matters. Floats are hashed
//! via `to_bits`, matching the engine's bitwise equality everywhere
//! else. The fingerprint is not cryptographic — it exists for cheap
//! state comparison in hosts, tests and benches, never as a substitute
//! for the delta round-trip guarantees.

use silt_core::{with_snapshot_schema, AuthorsDoc, RngState, Sign, Snapshot};

use crate::words::words;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

#[inline]
fn fold_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fold_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fold_byte(hash, b);
    }
    hash
}

#[inline]
fn fold_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fold_byte(hash, b);
    }
    hash
}

fn fold_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fold_byte(hash, b);
    }
    hash
}

/// Items and whole fields that can feed themselves into the running
/// hash.
trait Fold {
    fn fold_into(&self, hash: u64) -> u64;
}

impl Fold for f32 {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_u32(hash, self.to_bits())
    }
}

impl Fold for u32 {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_u32(hash, *self)
    }
}

impl Fold for u8 {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_byte(hash, *self)
    }
}

impl Fold for u64 {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_u64(hash, *self)
    }
}

impl Fold for RngState {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_u64(fold_u64(hash, self.0[0]), self.0[1])
    }
}

impl Fold for Vec<Sign> {
    fn fold_into(&self, mut hash: u64) -> u64 {
        hash = fold_u64(hash, self.len() as u64);
        for sign in self {
            hash = fold_u32(hash, sign.x as u32);
            hash = fold_u32(hash, sign.y as u32);
            hash = fold_byte(hash, sign.justification as u8);
            hash = fold_u64(hash, sign.text.len() as u64);
            hash = fold_bytes(hash, sign.text.as_bytes());
        }
        hash
    }
}

impl Fold for AuthorsDoc {
    fn fold_into(&self, hash: u64) -> u64 {
        fold_value(hash, self)
    }
}

/// Structural fold over a JSON tree. Object entries iterate in the
/// map's own (sorted) key order, so the result is deterministic. A tag
/// byte per node keeps differently-shaped trees from colliding on equal
/// payload bytes.
fn fold_value(mut hash: u64, value: &serde_json::Value) -> u64 {
    use serde_json::Value;
    match value {
        Value::Null => fold_byte(hash, 0),
        Value::Bool(b) => fold_byte(fold_byte(hash, 1), *b as u8),
        Value::Number(n) => {
            hash = fold_byte(hash, 2);
            if let Some(i) = n.as_i64() {
                fold_u64(fold_byte(hash, 0), i as u64)
            } else if let Some(u) = n.as_u64() {
                fold_u64(fold_byte(hash, 1), u)
            } else {
                fold_u64(fold_byte(hash, 2), n.as_f64().unwrap_or(0.0).to_bits())
            }
        }
        Value::String(s) => {
            hash = fold_u64(fold_byte(hash, 3), s.len() as u64);
            fold_bytes(hash, s.as_bytes())
        }
        Value::Array(items) => {
            hash = fold_u64(fold_byte(hash, 4), items.len() as u64);
            for item in items {
                hash = fold_value(hash, item);
            }
            hash
        }
        Value::Object(entries) => {
            hash = fold_u64(fold_byte(hash, 5), entries.len() as u64);
            for (key, item) in entries {
                hash = fold_bytes(fold_u64(hash, key.len() as u64), key.as_bytes());
                hash = fold_value(hash, item);
            }
            hash
        }
    }
}

/// Compute the FNV-1a fingerprint of a snapshot.
///
/// Deterministic across runs; two snapshots with equal fingerprints are
/// equal with overwhelming probability, and bitwise-unequal snapshots
/// get unequal fingerprints unless FNV collides.
pub fn fingerprint(snap: &Snapshot) -> u64 {
    let mut hash = FNV_OFFSET;
    let mut index = 0u32;

    macro_rules! grid {
        ($f:ident) => {{
            hash = fold_u32(hash, index);
            index += 1;
            for v in &snap.$f {
                hash = v.fold_into(hash);
            }
        }};
    }
    macro_rules! recs {
        ($f:ident) => {{
            hash = fold_u32(hash, index);
            index += 1;
            for w in words(&snap.$f) {
                hash = w.fold_into(hash);
            }
        }};
    }
    macro_rules! single {
        ($f:ident) => {{
            hash = fold_u32(hash, index);
            index += 1;
            hash = snap.$f.fold_into(hash);
        }};
    }
    with_snapshot_schema!(grid, recs, single);

    // The particle table folds its length first: a table of zeroed
    // records must not collide with a shorter one.
    hash = fold_u32(hash, index);
    hash = fold_u64(hash, snap.particles.len() as u64);
    for w in words(&snap.particles) {
        hash = fold_u32(hash, *w);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use silt_core::Particle;

    #[test]
    fn equal_snapshots_equal_fingerprints() {
        let a = Snapshot::zeroed();
        let b = Snapshot::zeroed();
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn one_bit_changes_the_fingerprint() {
        let a = Snapshot::zeroed();
        let mut b = Snapshot::zeroed();
        b.air_velocity_y[100] = -0.0; // sign bit only
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn particle_count_is_folded_in() {
        let a = Snapshot::zeroed();
        let mut b = Snapshot::zeroed();
        b.particles = vec![Particle::zeroed(); 4];
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn authors_document_shape_matters() {
        let mut a = Snapshot::zeroed();
        let mut b = Snapshot::zeroed();
        a.authors = serde_json::json!({ "links": [] });
        b.authors = serde_json::json!({ "links": "" });
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let mut snap = Snapshot::zeroed();
        snap.wireless_data[9] = 0xdead;
        snap.frame_count = 123;
        assert_eq!(fingerprint(&snap), fingerprint(&snap));
    }
}

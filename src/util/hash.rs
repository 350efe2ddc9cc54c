//! Deterministic per-particle pseudo-random values.
//!
//! `hash2(x, y) = fract(sin(x·12.9898 + y·78.233) · 43758.5453)`
//!
//! The same expression lives in `assets/shaders/modules/hash.wgsl`. GPU
//! `sin` precision differs between back-ends, so CPU and GPU thresholds
//! agree to roughly 1e-3 rather than bit-for-bit; the CPU side is exact and
//! repeatable for a given input.

use glam::{Vec2, Vec3};

use super::easing::fract;

const HASH_DOT: Vec2 = Vec2::new(12.9898, 78.233);
const HASH_SCALE: f32 = 43_758.547;

/// Scale applied to a particle's `xz` coordinates before hashing.
pub const THRESHOLD_INPUT_SCALE: f32 = 0.01;

/// Hash two floats to a value in [0, 1).
#[inline]
#[must_use]
pub fn hash2(x: f32, y: f32) -> f32 {
    fract((x * HASH_DOT.x + y * HASH_DOT.y).sin() * HASH_SCALE)
}

/// Activation threshold for a particle at rest position `position`.
///
/// Seeded only by `position.xz`, so particles sharing those coordinates
/// ignite together regardless of height.
#[inline]
#[must_use]
pub fn particle_threshold(position: Vec3) -> f32 {
    hash2(
        position.x * THRESHOLD_INPUT_SCALE,
        position.z * THRESHOLD_INPUT_SCALE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_origin_is_zero() {
        assert_eq!(hash2(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_hash_in_unit_interval() {
        for i in -200..200 {
            let x = i as f32 * 3.7;
            let y = i as f32 * -1.3 + 0.5;
            let h = hash2(x, y);
            assert!((0.0..1.0).contains(&h), "hash2({x}, {y}) = {h}");
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = hash2(1.234, -5.678);
        let b = hash2(1.234, -5.678);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_threshold_ignores_y() {
        let a = particle_threshold(Vec3::new(40.0, -300.0, 12.0));
        let b = particle_threshold(Vec3::new(40.0, 900.0, 12.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_varies_across_field() {
        let thresholds: Vec<f32> = (0..64)
            .map(|i| particle_threshold(Vec3::new(i as f32 * 17.0, 0.0, i as f32 * -9.0)))
            .collect();
        let min = thresholds.iter().copied().fold(f32::INFINITY, f32::min);
        let max = thresholds.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.5, "thresholds should spread, got [{min}, {max}]");
    }
}

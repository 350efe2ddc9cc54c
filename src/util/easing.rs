//! Easing functions and shader-style interpolation primitives.
//!
//! The free functions here mirror `assets/shaders/modules/easing.wgsl`
//! one-for-one so the CPU evaluator and the vertex stage agree numerically.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out: `1 - (1-t)³`.
    CubicOut,
    /// Quintic ease-out: `1 - (1-t)⁵`. Fast start, long deceleration.
    #[default]
    QuinticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::QuinticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt * omt * omt
            }
        }
    }
}

/// Normalized position of `x` between two edges, clamped to [0, 1].
///
/// Edges are used as given: with `edge0 > edge1` the result falls from 1 to
/// 0 as `x` rises. Coincident edges act as a hard step (0 below the edge,
/// 1 at or above it).
#[inline]
#[must_use]
pub fn linear_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0)
}

/// Cubic Hermite ramp between two edges: `t²(3 - 2t)` with
/// `t = linear_step(edge0, edge1, x)`.
#[inline]
#[must_use]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = linear_step(edge0, edge1, x);
    t * t * (3.0 - 2.0 * t)
}

/// Blend `a` toward `b` as `a·(1-t) + b·t`.
///
/// Returns `a` exactly at `t = 0` and `b` exactly at `t = 1`.
#[inline]
#[must_use]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Shader-style fractional part, `v - floor(v)`. Always in [0, 1), also for
/// negative inputs (unlike [`f32::fract`]).
#[inline]
#[must_use]
pub fn fract(v: f32) -> f32 {
    v - v.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quintic_out_endpoints() {
        let quintic = EasingFunction::QuinticOut;
        assert_eq!(quintic.evaluate(0.0), 0.0);
        assert_eq!(quintic.evaluate(1.0), 1.0);
        // 1 - 0.5⁵
        assert!((quintic.evaluate(0.5) - 0.968_75).abs() < 1e-6);
    }

    #[test]
    fn test_quintic_out_is_fast_start() {
        let quintic = EasingFunction::QuinticOut;
        let cubic = EasingFunction::CubicOut;
        assert!(quintic.evaluate(0.2) > cubic.evaluate(0.2));
        assert!(cubic.evaluate(0.2) > 0.2);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quintic = EasingFunction::QuinticOut;
        assert_eq!(quintic.evaluate(-0.5), 0.0);
        assert_eq!(quintic.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_quintic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuinticOut);
    }

    #[test]
    fn test_smoothstep_clamps_and_hits_midpoint() {
        assert_eq!(smoothstep(0.0, 10.0, -3.0), 0.0);
        assert_eq!(smoothstep(0.0, 10.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 10.0, 5.0), 0.5);
        assert_eq!(smoothstep(0.0, 10.0, 10.0), 1.0);
        assert_eq!(smoothstep(0.0, 10.0, 42.0), 1.0);
    }

    #[test]
    fn test_smoothstep_inverted_edges_mirror() {
        // Edges applied literally: falls from 1 to 0 across [5, 10].
        assert_eq!(smoothstep(10.0, 5.0, 0.0), 1.0);
        assert_eq!(smoothstep(10.0, 5.0, 20.0), 0.0);
        assert!((smoothstep(10.0, 5.0, 7.5) - 0.5).abs() < 1e-6);
        assert!(smoothstep(10.0, 5.0, 6.0) > smoothstep(10.0, 5.0, 9.0));
    }

    #[test]
    fn test_smoothstep_coincident_edges_step() {
        assert_eq!(smoothstep(3.0, 3.0, 2.999), 0.0);
        assert_eq!(smoothstep(3.0, 3.0, 3.0), 1.0);
        assert_eq!(smoothstep(3.0, 3.0, 100.0), 1.0);
    }

    #[test]
    fn test_mix_is_exact_at_endpoints() {
        let a = Vec3::new(0.3, 0.7, 0.1);
        let b = Vec3::new(0.9, 0.2, 0.6);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn test_fract_negative() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert!((fract(2.5) - 0.5).abs() < 1e-6);
        assert_eq!(fract(0.0), 0.0);
    }
}

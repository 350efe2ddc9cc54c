//! The per-particle galaxy phase formula.

use glam::Vec3;

use super::drift::Drift;
use super::palette::ColorStops;
use super::particle::{GalaxyOutput, ParticleInput};
use super::phase::{GalaxyProgress, PhaseWindow};
use crate::util::easing::{smoothstep, EasingFunction};
use crate::util::hash::particle_threshold;

/// Eased progress at which a particle reaches its full point size.
pub const SCALE_RAMP_END: f32 = 0.2;

/// Evaluates the galaxy phase for one particle at one instant.
///
/// Stateless and `Copy`: evaluate as many particles in parallel as you like.
/// The caller should pass one `time` value per frame so the field stays
/// coherent.
///
/// # Pipeline
///
/// 1. threshold = `hash2(position.xz · 0.01)`
/// 2. raw = `smoothstep(start, end, time)`
/// 3. staggered = `smoothstep(threshold, 1, raw)`
/// 4. progress = `quintic_out(staggered)`
/// 5. drift each axis by `±100·sin/cos(time·f + coord)`
/// 6. scale = `base_scale · smoothstep(0, 0.2, progress)`
/// 7. position = `drifted · progress`
/// 8. color = radial gradient at `|position.xy|`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyPhaseEvaluator {
    /// Phase window driving raw progress.
    pub window: PhaseWindow,
    /// Radial color stops.
    pub colors: ColorStops,
    /// Per-axis drift.
    pub drift: Drift,
    /// Curve applied to staggered progress.
    pub easing: EasingFunction,
}

impl GalaxyPhaseEvaluator {
    /// Evaluator with default drift and quintic-out easing.
    #[must_use]
    pub fn new(window: PhaseWindow, colors: ColorStops) -> Self {
        Self {
            window,
            colors,
            drift: Drift::default(),
            easing: EasingFunction::QuinticOut,
        }
    }

    /// Override the drift parameters.
    #[must_use]
    pub fn with_drift(mut self, drift: Drift) -> Self {
        self.drift = drift;
        self
    }

    /// Override the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Progress values for a particle resting at `position`.
    #[inline]
    #[must_use]
    pub fn progress(&self, position: Vec3, time: f32) -> GalaxyProgress {
        GalaxyProgress::compute(
            &self.window,
            self.easing,
            particle_threshold(position),
            time,
        )
    }

    /// Evaluate `particle` at `time`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, particle: &ParticleInput, time: f32) -> GalaxyOutput {
        let progress = self.progress(particle.position, time).eased;

        let drifted = self.drift.apply(particle.position, time);
        let scale =
            particle.base_scale * smoothstep(0.0, SCALE_RAMP_END, progress);
        let position = drifted * progress;
        let radius = position.truncate().length();

        GalaxyOutput {
            position,
            scale,
            color: self.colors.sample(radius),
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn evaluator(start: f32, end: f32) -> GalaxyPhaseEvaluator {
        GalaxyPhaseEvaluator::new(
            PhaseWindow::new(start, end),
            ColorStops::new(RED, GREEN, BLUE),
        )
    }

    fn sample_particles() -> Vec<ParticleInput> {
        (0..50)
            .map(|i| {
                let f = i as f32;
                ParticleInput::new(
                    Vec3::new(f * 13.7 - 300.0, f * -4.1 + 20.0, f * 9.3 - 200.0),
                    1.0 + f * 0.1,
                )
            })
            .collect()
    }

    #[test]
    fn test_origin_at_phase_start() {
        let env_start = 3.0;
        let eval = evaluator(env_start, env_start + 10.0);
        let out = eval.evaluate(&ParticleInput::new(Vec3::ZERO, 5.0), env_start);

        assert_eq!(out.scale, 0.0);
        assert_eq!(out.position, Vec3::ZERO);
        assert_eq!(out.color, RED);
        assert_eq!(out.progress, 0.0);
    }

    #[test]
    fn test_everything_collapsed_at_phase_start() {
        let eval = evaluator(2.0, 12.0);
        for p in sample_particles() {
            let out = eval.evaluate(&p, 2.0);
            assert_eq!(out.scale, 0.0);
            assert_eq!(out.position, Vec3::ZERO);
            assert_eq!(out.color, RED);
        }
    }

    #[test]
    fn test_everything_settled_after_phase_end() {
        let eval = evaluator(0.0, 10.0);
        for p in sample_particles() {
            for time in [10.0, 25.0, 1000.0] {
                let out = eval.evaluate(&p, time);
                assert_eq!(out.progress, 1.0);
                assert_eq!(out.scale, p.base_scale);
                assert_eq!(out.position, eval.drift.apply(p.position, time));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let eval = evaluator(0.0, 10.0);
        for p in sample_particles() {
            let a = eval.evaluate(&p, 4.2);
            let b = eval.evaluate(&p, 4.2);
            assert_eq!(a.position.to_array().map(f32::to_bits), b.position.to_array().map(f32::to_bits));
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(a.color.to_array().map(f32::to_bits), b.color.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_scale_ramp_monotonic_then_saturates() {
        // Sweep time through the window and compare scale against progress.
        let eval = evaluator(0.0, 10.0);
        let particle = ParticleInput::new(Vec3::new(37.0, 5.0, -81.0), 4.0);

        let mut samples: Vec<(f32, f32)> = (0..=1000)
            .map(|i| {
                let out = eval.evaluate(&particle, i as f32 * 0.01);
                (out.progress, out.scale)
            })
            .collect();
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        for pair in samples.windows(2) {
            if pair[1].0 <= SCALE_RAMP_END {
                assert!(pair[1].1 >= pair[0].1);
            }
        }
        for (progress, scale) in samples {
            if progress > SCALE_RAMP_END {
                assert_eq!(scale, 4.0);
            }
        }
    }

    #[test]
    fn test_radius_excludes_z() {
        let eval = evaluator(0.0, 10.0);
        let p = ParticleInput::new(Vec3::new(10.0, 20.0, 500.0), 1.0);
        let out = eval.evaluate(&p, 50.0);
        let planar = (out.position.x * out.position.x
            + out.position.y * out.position.y)
            .sqrt();
        assert!((out.radius() - planar).abs() < 1e-4);
        assert_eq!(out.color, eval.colors.sample(out.radius()));
    }

    #[test]
    fn test_staggered_ignition() {
        // Mid-window some particles are moving while others are still dark.
        let eval = evaluator(0.0, 10.0);
        let outputs: Vec<GalaxyOutput> = sample_particles()
            .iter()
            .map(|p| eval.evaluate(p, 5.0))
            .collect();
        assert!(outputs.iter().any(|o| o.progress > 0.0));
        assert!(outputs.iter().any(|o| o.progress < 1.0));
        let first = outputs[1].progress;
        assert!(outputs.iter().any(|o| o.progress != first));
    }

    #[test]
    fn test_inverted_window_is_not_corrected() {
        // end < start: particles are fully out before `end` and collapse
        // after `start`, the literal smoothstep behavior.
        let eval = evaluator(10.0, 0.0);
        let p = ParticleInput::new(Vec3::new(55.0, 0.0, 12.0), 2.0);
        assert_eq!(eval.evaluate(&p, -5.0).progress, 1.0);
        assert_eq!(eval.evaluate(&p, 15.0).progress, 0.0);
        assert_eq!(eval.evaluate(&p, 15.0).scale, 0.0);
    }

    #[test]
    fn test_custom_easing_and_drift() {
        let eval = evaluator(0.0, 10.0)
            .with_easing(EasingFunction::Linear)
            .with_drift(Drift {
                amplitude: 0.0,
                frequency: Vec3::ZERO,
            });
        let p = ParticleInput::new(Vec3::new(0.0, 150.0, 0.0), 1.0);
        let out = eval.evaluate(&p, 100.0);
        assert_eq!(out.position, p.position);
        assert_eq!(out.color, GREEN.lerp(BLUE, 0.5));
    }
}

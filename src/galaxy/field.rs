//! Particle field generation and batch evaluation.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::evaluator::GalaxyPhaseEvaluator;
use super::particle::{GalaxyOutput, ParticleInput};
use crate::error::GalaxyError;
use crate::options::FieldOptions;

/// Fields at least this large are evaluated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// A fixed set of particles evaluated together each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<ParticleInput>,
}

impl ParticleField {
    /// Wrap an existing particle list.
    #[must_use]
    pub fn from_particles(particles: Vec<ParticleInput>) -> Self {
        Self { particles }
    }

    /// Generate a seeded spiral disc in the `xy` plane.
    ///
    /// Radius is square-root distributed for uniform area density. With
    /// `arms > 0`, angles cluster around logarithmic-looking spiral arms
    /// whose twist grows with radius. Thickness tapers toward the rim.
    pub fn generate(opts: &FieldOptions) -> Result<Self, GalaxyError> {
        opts.validate()?;

        let mut rng = StdRng::seed_from_u64(opts.seed);
        let arm_width = if opts.arms > 0 {
            TAU / opts.arms as f32 * opts.arm_spread
        } else {
            0.0
        };

        let particles = (0..opts.count)
            .map(|_| {
                let r_norm = rng.random::<f32>().sqrt();
                let r = r_norm * opts.radius;

                let theta = if opts.arms > 0 {
                    let arm = rng.random_range(0..opts.arms) as f32;
                    let jitter = (rng.random::<f32>() * 2.0 - 1.0) * arm_width;
                    arm * TAU / opts.arms as f32 + r * opts.arm_twist + jitter
                } else {
                    rng.random::<f32>() * TAU
                };

                let z = (rng.random::<f32>() * 2.0 - 1.0)
                    * opts.thickness
                    * (1.0 - r_norm);
                let base_scale =
                    rng.random_range(opts.min_scale..=opts.max_scale);

                ParticleInput::new(
                    Vec3::new(r * theta.cos(), r * theta.sin(), z),
                    base_scale,
                )
            })
            .collect();

        log::debug!(
            "generated {} particles (radius {}, {} arms, seed {})",
            opts.count,
            opts.radius,
            opts.arms,
            opts.seed
        );
        Ok(Self { particles })
    }

    /// The particles, in evaluation order.
    #[must_use]
    pub fn particles(&self) -> &[ParticleInput] {
        &self.particles
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Evaluate every particle at `time`. Output order matches
    /// [`particles`](Self::particles).
    #[must_use]
    pub fn evaluate(
        &self,
        evaluator: &GalaxyPhaseEvaluator,
        time: f32,
    ) -> Vec<GalaxyOutput> {
        let mut out = Vec::with_capacity(self.particles.len());
        self.evaluate_into(evaluator, time, &mut out);
        out
    }

    /// Evaluate every particle at `time` into `out`, reusing its allocation.
    pub fn evaluate_into(
        &self,
        evaluator: &GalaxyPhaseEvaluator,
        time: f32,
        out: &mut Vec<GalaxyOutput>,
    ) {
        if self.particles.len() >= PARALLEL_THRESHOLD {
            self.particles
                .par_iter()
                .map(|p| evaluator.evaluate(p, time))
                .collect_into_vec(out);
        } else {
            out.clear();
            out.extend(self.particles.iter().map(|p| evaluator.evaluate(p, time)));
        }
    }
}

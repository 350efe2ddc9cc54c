//! Per-particle input and output values.

use glam::Vec3;

/// A particle at rest, as supplied by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInput {
    /// Rest-frame coordinates. Unconstrained.
    pub position: Vec3,
    /// Base point size before the growth ramp.
    pub base_scale: f32,
}

impl ParticleInput {
    /// Particle at `position` with point size `base_scale`.
    #[must_use]
    pub fn new(position: Vec3, base_scale: f32) -> Self {
        Self {
            position,
            base_scale,
        }
    }
}

/// Result of evaluating one particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyOutput {
    /// Drifted position, scaled toward the origin by `progress`.
    pub position: Vec3,
    /// Point size after the growth ramp.
    pub scale: f32,
    /// Radial gradient color (RGB).
    pub color: Vec3,
    /// Eased phase progress this particle was evaluated at, in [0, 1].
    pub progress: f32,
}

impl GalaxyOutput {
    /// Planar radius (`xy` only) of the output position.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.position.truncate().length()
    }
}

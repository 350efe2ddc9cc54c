//! Radial color gradient.

use glam::Vec3;

use crate::util::easing::{linear_step, mix};

/// Default radius at which the gradient reaches the middle color.
pub const DEFAULT_INNER_RADIUS: f32 = 100.0;
/// Default radius beyond which the gradient is the outer color.
pub const DEFAULT_OUTER_RADIUS: f32 = 200.0;

/// Three color stops laid out by planar radius.
///
/// `inner` at radius 0, `middle` at `inner_radius`, `outer` at and beyond
/// `outer_radius`; linear in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStops {
    /// Core color (`color1`).
    pub inner: Vec3,
    /// Mid-radius color (`color2`).
    pub middle: Vec3,
    /// Rim color (`color3`).
    pub outer: Vec3,
    /// Radius of the middle stop.
    pub inner_radius: f32,
    /// Radius of the outer stop.
    pub outer_radius: f32,
}

impl ColorStops {
    /// Stops at the default radii (100 and 200).
    #[must_use]
    pub fn new(inner: Vec3, middle: Vec3, outer: Vec3) -> Self {
        Self {
            inner,
            middle,
            outer,
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_radius: DEFAULT_OUTER_RADIUS,
        }
    }

    /// Override the stop radii.
    #[must_use]
    pub fn with_radii(mut self, inner_radius: f32, outer_radius: f32) -> Self {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self
    }

    /// Color at planar radius `radius`.
    #[inline]
    #[must_use]
    pub fn sample(&self, radius: f32) -> Vec3 {
        let core = mix(
            self.inner,
            self.middle,
            linear_step(0.0, self.inner_radius, radius),
        );
        mix(
            core,
            self.outer,
            linear_step(self.inner_radius, self.outer_radius, radius),
        )
    }
}

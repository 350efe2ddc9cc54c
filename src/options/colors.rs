use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::galaxy::{ColorStops, DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS};

/// Radial color gradient for the galaxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color at the core.
    #[schemars(title = "Core")]
    pub color1: [f32; 3],
    /// RGB color at `inner_radius`.
    #[schemars(title = "Mid")]
    pub color2: [f32; 3],
    /// RGB color at and beyond `outer_radius`.
    #[schemars(title = "Rim")]
    pub color3: [f32; 3],
    /// Radius of the mid stop.
    #[schemars(skip)]
    pub inner_radius: f32,
    /// Radius of the rim stop.
    #[schemars(skip)]
    pub outer_radius: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            color1: [1.0, 0.82, 0.55],
            color2: [0.62, 0.36, 0.88],
            color3: [0.16, 0.26, 0.78],
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_radius: DEFAULT_OUTER_RADIUS,
        }
    }
}

impl ColorOptions {
    /// Runtime color stops.
    #[must_use]
    pub fn stops(&self) -> ColorStops {
        ColorStops::new(
            Vec3::from_array(self.color1),
            Vec3::from_array(self.color2),
            Vec3::from_array(self.color3),
        )
        .with_radii(self.inner_radius, self.outer_radius)
    }
}

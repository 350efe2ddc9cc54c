use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Field", inline)]
#[serde(default)]
/// Shape of the generated particle disc.
pub struct FieldOptions {
    /// Number of particles.
    #[schemars(title = "Particles", range(min = 1, max = 500_000))]
    pub count: usize,
    /// Disc radius in world units.
    #[schemars(title = "Radius", range(min = 10.0, max = 1000.0), extend("step" = 5.0))]
    pub radius: f32,
    /// Half-thickness at the center; tapers to zero at the rim.
    #[schemars(title = "Thickness", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub thickness: f32,
    /// Number of spiral arms (0 = uniform disc).
    #[schemars(title = "Arms", range(min = 0, max = 8))]
    pub arms: u32,
    /// Arm rotation per world unit of radius, in radians.
    #[schemars(title = "Arm Twist", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub arm_twist: f32,
    /// Angular spread of each arm as a fraction of the arm spacing.
    #[schemars(skip)]
    pub arm_spread: f32,
    /// Smallest base point size.
    #[schemars(skip)]
    pub min_scale: f32,
    /// Largest base point size.
    #[schemars(skip)]
    pub max_scale: f32,
    /// RNG seed; equal seeds give identical fields.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            count: 20_000,
            radius: 240.0,
            thickness: 12.0,
            arms: 3,
            arm_twist: 0.012,
            arm_spread: 0.35,
            min_scale: 1.0,
            max_scale: 4.0,
            seed: 7,
        }
    }
}

impl FieldOptions {
    /// Reject parameters that cannot produce a field.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.count == 0 {
            return Err(GalaxyError::InvalidField(
                "particle count must be at least 1".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GalaxyError::InvalidField(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(GalaxyError::InvalidField(format!(
                "thickness must be non-negative and finite, got {}",
                self.thickness
            )));
        }
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale > self.max_scale
        {
            return Err(GalaxyError::InvalidField(format!(
                "scale range [{}, {}] is empty",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.max_scale - self.min_scale).is_finite() {
            return Err(GalaxyError::InvalidField(format!(
                "scale range [{}, {}] is too wide",
                self.min_scale, self.max_scale
            )));
        }
        // Spiral angle is `r * arm_twist + jitter`; it must stay finite.
        if !self.arm_spread.is_finite()
            || !(self.radius * self.arm_twist).is_finite()
        {
            return Err(GalaxyError::InvalidField(format!(
                "arm twist {} and spread {} must be finite",
                self.arm_twist, self.arm_spread
            )));
        }
        Ok(())
    }
}

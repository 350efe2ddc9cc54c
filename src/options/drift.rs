use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::galaxy::{Drift, DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Per-axis drift tuning.
pub struct DriftOptions {
    /// Peak displacement per axis.
    pub amplitude: f32,
    /// Angular frequency for x, y and z.
    pub frequency: [f32; 3],
}

impl Default for DriftOptions {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY.to_array(),
        }
    }
}

impl DriftOptions {
    /// Runtime drift parameters.
    #[must_use]
    pub fn drift(&self) -> Drift {
        Drift {
            amplitude: self.amplitude,
            frequency: Vec3::from_array(self.frequency),
        }
    }
}

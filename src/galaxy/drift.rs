//! Oscillatory per-axis drift.

use glam::Vec3;

/// Default drift amplitude in world units.
pub const DEFAULT_AMPLITUDE: f32 = 100.0;
/// Default angular frequency per axis.
pub const DEFAULT_FREQUENCY: Vec3 = Vec3::new(0.01, 0.02, 0.026);

/// Swirling displacement applied before the progress scale.
///
/// Each axis oscillates at its own frequency with the particle's own
/// coordinate as phase: `x` and `z` use `sin`, `y` uses `cos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Peak displacement per axis.
    pub amplitude: f32,
    /// Angular frequency per axis.
    pub frequency: Vec3,
}

impl Default for Drift {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Drift {
    /// Displace `position` at `time`.
    #[inline]
    #[must_use]
    pub fn apply(&self, position: Vec3, time: f32) -> Vec3 {
        let phase = time * self.frequency + position;
        position
            + Vec3::new(phase.x.sin(), phase.y.cos(), phase.z.sin())
                * self.amplitude
    }
}

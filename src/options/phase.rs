use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::galaxy::PhaseWindow;
use crate::util::easing::EasingFunction;
use crate::util::frame_timing::FrameClock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Phase", inline)]
#[serde(default)]
/// Timing of the galaxy phase.
pub struct PhaseOptions {
    /// Time at which the phase begins ramping in.
    #[schemars(title = "Start", range(min = 0.0, max = 120.0), extend("step" = 0.5))]
    pub env_start: f32,
    /// Time at which the ramp completes (absolute, not a length).
    #[schemars(title = "End", range(min = 0.0, max = 240.0), extend("step" = 0.5))]
    pub duration: f32,
    /// Clock multiplier applied to elapsed time.
    #[schemars(title = "Time Scale", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub time_scale: f32,
    /// Curve applied to staggered progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for PhaseOptions {
    fn default() -> Self {
        Self {
            env_start: 0.0,
            duration: 10.0,
            time_scale: 1.0,
            easing: EasingFunction::QuinticOut,
        }
    }
}

impl PhaseOptions {
    /// The phase window these options describe.
    #[must_use]
    pub fn window(&self) -> PhaseWindow {
        PhaseWindow::new(self.env_start, self.duration)
    }

    /// Wall-clock frame clock running at `time_scale`.
    #[must_use]
    pub fn clock(&self) -> FrameClock {
        FrameClock::real_time().with_time_scale(self.time_scale)
    }
}

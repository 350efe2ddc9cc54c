//! Frame clock supplying per-frame animation time.

use web_time::{Duration, Instant};

/// How a [`FrameClock`] advances between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Advance by the wall-clock time since the previous tick.
    RealTime,
    /// Advance by a fixed amount every tick (deterministic replay).
    FixedStep(f32),
}

/// Per-frame animation clock.
///
/// Owns the global `time` fed to the galaxy evaluator so that every particle
/// in a frame sees the same value. Also tracks a smoothed FPS for display.
pub struct FrameClock {
    mode: ClockMode,
    /// Multiplier applied to every advance.
    time_scale: f32,
    /// Animation time the clock starts from and rewinds to.
    origin: f32,
    /// Accumulated animation time.
    elapsed: f32,
    /// Last tick timestamp
    last_frame: Instant,
    paused: bool,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Clock driven by wall-clock time.
    #[must_use]
    pub fn real_time() -> Self {
        Self::with_mode(ClockMode::RealTime)
    }

    /// Clock that advances by `step` on every tick.
    #[must_use]
    pub fn fixed_step(step: f32) -> Self {
        Self::with_mode(ClockMode::FixedStep(step))
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            time_scale: 1.0,
            origin: 0.0,
            elapsed: 0.0,
            last_frame: Instant::now(),
            paused: false,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Set the time multiplier (1.0 = unscaled).
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Start the clock at `elapsed` instead of zero. [`reset`](Self::reset)
    /// rewinds to this value.
    #[must_use]
    pub fn starting_at(mut self, elapsed: f32) -> Self {
        self.origin = elapsed;
        self.elapsed = elapsed;
        self
    }

    /// Call once per frame. Returns the animation time for this frame.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let wall = now.duration_since(self.last_frame);
        self.last_frame = now;

        let advance = match self.mode {
            ClockMode::RealTime => {
                self.record_frame_time(wall);
                wall.as_secs_f32()
            }
            ClockMode::FixedStep(step) => {
                self.record_frame_time(
                    Duration::try_from_secs_f32(step).unwrap_or(Duration::ZERO),
                );
                step
            }
        };

        if !self.paused {
            self.elapsed += advance * self.time_scale;
        }
        self.elapsed
    }

    fn record_frame_time(&mut self, frame: Duration) {
        let frame_time = frame.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Multiplier applied to every advance.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Animation time as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Freeze animation time; ticks still update FPS.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume advancing animation time.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the clock is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Rewind animation time to the starting offset (zero by default).
    pub fn reset(&mut self) {
        self.elapsed = self.origin;
        self.last_frame = Instant::now();
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

//! Phase window and staggered per-particle progress.

use crate::util::easing::{smoothstep, EasingFunction};

/// Time interval over which the galaxy phase ramps from inactive to active.
///
/// `start` and `end` correspond to the `env_start` and `duration` uniforms.
/// Despite the uniform's name, `end` is an absolute time, not a length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWindow {
    /// Time at which the ramp begins.
    pub start: f32,
    /// Time at which the ramp completes.
    pub end: f32,
}

impl PhaseWindow {
    /// Window ramping across `[start, end]`.
    #[must_use]
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Window of length `length` beginning at `start`.
    #[must_use]
    pub fn starting_at(start: f32, length: f32) -> Self {
        Self::new(start, start + length)
    }

    /// Whether `end <= start`. Such windows still evaluate: an inverted
    /// window ramps backwards and a zero-length one is a hard step at
    /// `start`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// Raw (un-staggered) progress at `time`.
    #[inline]
    #[must_use]
    pub fn raw_progress(&self, time: f32) -> f32 {
        smoothstep(self.start, self.end, time)
    }
}

/// Intermediate progress values for one particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyProgress {
    /// Per-particle activation threshold in [0, 1).
    pub threshold: f32,
    /// Progress through the phase window, shared by every particle.
    pub raw: f32,
    /// Raw progress re-ramped across `[threshold, 1]`.
    pub staggered: f32,
    /// Staggered progress after easing. Drives scale, position and color.
    pub eased: f32,
}

impl GalaxyProgress {
    /// Compute progress for a particle with `threshold` at `time`.
    #[inline]
    #[must_use]
    pub fn compute(
        window: &PhaseWindow,
        easing: EasingFunction,
        threshold: f32,
        time: f32,
    ) -> Self {
        let raw = window.raw_progress(time);
        let staggered = smoothstep(threshold, 1.0, raw);
        Self {
            threshold,
            raw,
            staggered,
            eased: easing.evaluate(staggered),
        }
    }

    /// The particle has started moving.
    #[must_use]
    pub fn is_ignited(&self) -> bool {
        self.eased > 0.0
    }

    /// The particle has reached its final state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.eased >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_progress_ramp() {
        let window = PhaseWindow::starting_at(5.0, 10.0);
        assert_eq!(window.raw_progress(0.0), 0.0);
        assert_eq!(window.raw_progress(5.0), 0.0);
        assert_eq!(window.raw_progress(10.0), 0.5);
        assert_eq!(window.raw_progress(15.0), 1.0);
        assert_eq!(window.raw_progress(1.0e6), 1.0);
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(!PhaseWindow::new(0.0, 1.0).is_degenerate());
        assert!(PhaseWindow::new(1.0, 1.0).is_degenerate());
        assert!(PhaseWindow::new(2.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_higher_threshold_ignites_later() {
        let window = PhaseWindow::new(0.0, 10.0);
        let early = GalaxyProgress::compute(&window, EasingFunction::QuinticOut, 0.1, 4.0);
        let late = GalaxyProgress::compute(&window, EasingFunction::QuinticOut, 0.8, 4.0);
        assert_eq!(early.raw, late.raw);
        assert!(early.is_ignited());
        assert!(!late.is_ignited());
        assert!(early.eased > late.eased);
    }

    #[test]
    fn test_settles_at_window_end() {
        let window = PhaseWindow::new(0.0, 10.0);
        for threshold in [0.0, 0.25, 0.5, 0.999] {
            let p = GalaxyProgress::compute(&window, EasingFunction::QuinticOut, threshold, 10.0);
            assert_eq!(p.eased, 1.0, "threshold {threshold}");
            assert!(p.is_settled());
        }
    }

    #[test]
    fn test_inverted_window_starts_active() {
        // end < start: raw progress is 1 before `end` and 0 after `start`.
        let window = PhaseWindow::new(10.0, 0.0);
        let before = GalaxyProgress::compute(&window, EasingFunction::QuinticOut, 0.3, -1.0);
        let after = GalaxyProgress::compute(&window, EasingFunction::QuinticOut, 0.3, 11.0);
        assert_eq!(before.raw, 1.0);
        assert!(before.is_settled());
        assert_eq!(after.raw, 0.0);
        assert!(!after.is_ignited());
    }

    #[test]
    fn test_zero_length_window_is_step() {
        let window = PhaseWindow::new(3.0, 3.0);
        assert_eq!(window.raw_progress(2.5), 0.0);
        assert_eq!(window.raw_progress(3.0), 1.0);
    }
}

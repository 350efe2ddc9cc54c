//! Per-frame summary of an evaluated field.

use std::fmt;

use super::particle::GalaxyOutput;

/// Aggregate numbers for one evaluated frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldStats {
    /// Number of particles evaluated.
    pub count: usize,
    /// Particles with non-zero progress.
    pub ignited: usize,
    /// Particles at full progress.
    pub settled: usize,
    /// Mean planar radius.
    pub mean_radius: f32,
    /// Largest planar radius.
    pub max_radius: f32,
    /// Mean point size.
    pub mean_scale: f32,
}

impl FieldStats {
    /// Summarise `outputs`.
    #[must_use]
    pub fn collect(outputs: &[GalaxyOutput]) -> Self {
        if outputs.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            count: outputs.len(),
            ..Self::default()
        };
        let mut radius_sum = 0.0_f64;
        let mut scale_sum = 0.0_f64;

        for out in outputs {
            let radius = out.radius();
            radius_sum += f64::from(radius);
            scale_sum += f64::from(out.scale);
            stats.max_radius = stats.max_radius.max(radius);
            if out.progress > 0.0 {
                stats.ignited += 1;
            }
            if out.progress >= 1.0 {
                stats.settled += 1;
            }
        }

        let n = outputs.len() as f64;
        stats.mean_radius = (radius_sum / n) as f32;
        stats.mean_scale = (scale_sum / n) as f32;
        stats
    }

    /// Fraction of particles that have ignited, in [0, 1].
    #[must_use]
    pub fn ignited_fraction(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.ignited as f32 / self.count as f32
        }
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ignited, {} settled, radius mean {:.1} max {:.1}, scale mean {:.2}",
            self.ignited,
            self.count,
            self.settled,
            self.mean_radius,
            self.max_radius,
            self.mean_scale
        )
    }
}

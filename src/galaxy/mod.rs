//! Galaxy phase animation.
//!
//! A particle field ignites in a staggered wave across a phase window: each
//! particle waits for its own hash-derived threshold, grows from zero size,
//! expands outward from the origin along a swirling drift, and takes its
//! color from a radial gradient.
//!
//! [`GalaxyPhaseEvaluator`] is the per-particle formula. [`ParticleField`]
//! generates and batch-evaluates a whole disc, and [`FieldStats`]
//! summarises a frame.

mod drift;
mod evaluator;
mod field;
mod palette;
mod particle;
mod phase;
mod stats;

pub use drift::{Drift, DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY};
pub use evaluator::{GalaxyPhaseEvaluator, SCALE_RAMP_END};
pub use field::{ParticleField, PARALLEL_THRESHOLD};
pub use palette::{ColorStops, DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS};
pub use particle::{GalaxyOutput, ParticleInput};
pub use phase::{GalaxyProgress, PhaseWindow};
pub use stats::FieldStats;

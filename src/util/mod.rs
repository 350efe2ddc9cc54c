//! Shared utilities.
//!
//! Easing curves and shader-style interpolation, the per-particle hash, and
//! the frame clock that supplies animation time.

pub mod easing;
pub mod frame_timing;
pub mod hash;

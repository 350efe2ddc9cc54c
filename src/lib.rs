// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Staggered galaxy particle-field animation.
//!
//! A particle field ignites across a phase window: each particle waits for
//! its own deterministic threshold, grows from zero size, swirls outward
//! from the origin and is colored by a radial gradient.
//!
//! # Key entry points
//!
//! - [`galaxy::GalaxyPhaseEvaluator`] - the pure per-particle formula
//! - [`galaxy::ParticleField`] - seeded disc generation and batch evaluation
//! - [`options::Options`] - TOML-backed configuration and presets
//! - [`util::frame_timing::FrameClock`] - the per-frame time source
//! - [`gpu`] - the same formula as a WGSL vertex stage, with its uniform
//!   layout
//!
//! The evaluator holds no state and reads no ambient time: the host passes
//! one `time` per frame, and particles may be evaluated in any order or in
//! parallel.

pub mod error;
pub mod galaxy;
pub mod gpu;
pub mod options;
pub mod util;

pub use error::GalaxyError;

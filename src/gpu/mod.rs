//! GPU interface for the galaxy shader.
//!
//! The WGSL port of the evaluator lives in `assets/shaders/galaxy.wgsl`. This
//! module composes it with naga-oil and defines the byte-exact uniform and
//! vertex layouts a host pipeline binds.

/// Uniform, vertex and instance layouts plus the uniform buffer wrapper.
pub mod galaxy_uniform;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;

pub use galaxy_uniform::{
    GalaxyUniform, GalaxyUniformBuffer, ParticleInstance, ParticleVertex,
};
pub use shader_composer::{ShaderComposer, GALAXY_SHADER, GALAXY_SHADER_PATH};

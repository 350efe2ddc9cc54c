use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::GalaxyError;

/// WGSL source of the galaxy particle shader (`vs_main` / `fs_main`).
pub const GALAXY_SHADER: &str = include_str!("../../assets/shaders/galaxy.wgsl");
/// File path reported for [`GALAXY_SHADER`] in composition errors.
pub const GALAXY_SHADER_PATH: &str = "galaxy.wgsl";

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Pre-loads the shared WGSL modules at construction time. Consuming shaders
/// use `#import galaxy::module_name::{item}` to pull in shared code. The
/// composer produces `naga::Module` IR directly, skipping WGSL re-parse at
/// runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Registered in dependency order.
const MODULES: &[ModuleDef] = &[
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/easing.wgsl"),
        file_path: "modules/easing.wgsl",
    },
    ModuleDef {
        source: include_str!("../../assets/shaders/modules/hash.wgsl"),
        file_path: "modules/hash.wgsl",
    },
];

impl ShaderComposer {
    /// Composer with every shared module registered.
    pub fn new() -> Result<Self, GalaxyError> {
        let mut composer = Composer::default();

        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    GalaxyError::Shader(format!(
                        "failed to register module '{}': {e}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, GalaxyError> {
        let naga_module = self.compose_naga(source, file_path)?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose the galaxy particle shader into a `wgpu::ShaderModule`.
    pub fn compose_galaxy(
        &mut self,
        device: &wgpu::Device,
    ) -> Result<wgpu::ShaderModule, GalaxyError> {
        self.compose(device, "Galaxy Shader", GALAXY_SHADER, GALAXY_SHADER_PATH)
    }

    /// Compose a shader source into a `naga::Module` without creating a
    /// wgpu shader module. Useful for testing shader composition without a
    /// GPU device.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, GalaxyError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                GalaxyError::Shader(format!(
                    "failed to compose '{file_path}': {e}"
                ))
            })
    }
}

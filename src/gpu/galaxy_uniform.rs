use wgpu::util::DeviceExt;

use crate::galaxy::{GalaxyOutput, GalaxyPhaseEvaluator, ParticleInput};

/// Per-frame galaxy parameters for `galaxy.wgsl`.
/// NOTE: Must match WGSL struct layout exactly (80 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GalaxyUniform {
    /// Global animation time for this frame.
    pub time: f32,
    /// Phase window start.
    pub env_start: f32,
    /// Phase window end.
    pub duration: f32,
    /// Drift amplitude.
    pub drift_amplitude: f32,
    /// Drift angular frequency per axis.
    pub drift_frequency: [f32; 3],
    /// Radius of the mid color stop.
    pub inner_radius: f32,
    /// Core color.
    pub color1: [f32; 3],
    /// Radius of the rim color stop.
    pub outer_radius: f32,
    /// Mid color.
    pub color2: [f32; 3],
    _pad0: f32,
    /// Rim color.
    pub color3: [f32; 3],
    _pad1: f32,
}

impl GalaxyUniform {
    /// Pack `evaluator`'s parameters for a frame at `time`.
    #[must_use]
    pub fn new(evaluator: &GalaxyPhaseEvaluator, time: f32) -> Self {
        Self {
            time,
            env_start: evaluator.window.start,
            duration: evaluator.window.end,
            drift_amplitude: evaluator.drift.amplitude,
            drift_frequency: evaluator.drift.frequency.to_array(),
            inner_radius: evaluator.colors.inner_radius,
            color1: evaluator.colors.inner.to_array(),
            outer_radius: evaluator.colors.outer_radius,
            color2: evaluator.colors.middle.to_array(),
            _pad0: 0.0,
            color3: evaluator.colors.outer.to_array(),
            _pad1: 0.0,
        }
    }
}

/// Per-instance vertex input for `galaxy.wgsl` (locations 0 and 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    /// Rest position.
    pub position: [f32; 3],
    /// Base point size.
    pub base_scale: f32,
}

impl ParticleVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

    /// Instance-rate buffer layout.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&ParticleInput> for ParticleVertex {
    fn from(p: &ParticleInput) -> Self {
        Self {
            position: p.position.to_array(),
            base_scale: p.base_scale,
        }
    }
}

/// CPU-evaluated particle, for hosts that run the formula on the CPU and
/// upload finished instances.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    /// Final position.
    pub position: [f32; 3],
    /// Final point size.
    pub scale: f32,
    /// Final color.
    pub color: [f32; 3],
    /// Eased progress.
    pub progress: f32,
}

impl From<&GalaxyOutput> for ParticleInstance {
    fn from(out: &GalaxyOutput) -> Self {
        Self {
            position: out.position.to_array(),
            scale: out.scale,
            color: out.color.to_array(),
            progress: out.progress,
        }
    }
}

/// GPU uniform buffer holding a [`GalaxyUniform`], bound at group 0.
pub struct GalaxyUniformBuffer {
    /// CPU copy of the last uploaded uniform.
    pub uniform: GalaxyUniform,
    /// The uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (binding 0, vertex stage).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl GalaxyUniformBuffer {
    /// Allocate the buffer and bind group, initialized for `time = 0`.
    #[must_use]
    pub fn new(device: &wgpu::Device, evaluator: &GalaxyPhaseEvaluator) -> Self {
        let uniform = GalaxyUniform::new(evaluator, 0.0);

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Galaxy Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Galaxy Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Galaxy Bind Group"),
        });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Refresh the CPU copy for `time` and upload it.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        evaluator: &GalaxyPhaseEvaluator,
        time: f32,
    ) {
        self.uniform = GalaxyUniform::new(evaluator, time);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

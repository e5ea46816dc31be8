//! GPU plumbing shared by the primitive and text renderers.

use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

/// Straight (non-premultiplied) alpha: `src * a + dst * (1 - a)`.
pub(super) fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

// ── shader creation ───────────────────────────────────────────────────────

/// Compiles WGSL and fails when the compiler reports any error.
///
/// A renderer must not be constructed around a broken module, so this is the
/// only place shader diagnostics surface.
pub(super) fn create_checked_shader(
    device: &wgpu::Device,
    label: &str,
    source: &'static str,
) -> Result<wgpu::ShaderModule> {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let errors: Vec<String> = info
        .messages
        .iter()
        .filter(|m| m.message_type == wgpu::CompilationMessageType::Error)
        .map(|m| match &m.location {
            Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, m.message),
            None => m.message.clone(),
        })
        .collect();

    if !errors.is_empty() {
        bail!("shader `{label}` failed to compile:\n{}", errors.join("\n"));
    }
    log::debug!("shader `{label}` compiled");
    Ok(module)
}

// ── per-frame buffer ──────────────────────────────────────────────────────

/// Rounds `value` up to a multiple of `align` (a power of two).
pub(super) fn align_up(value: u64, align: u64) -> u64 {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

/// Frame-scoped append-only GPU buffer.
///
/// Every `push` lands in a fresh region so draw calls recorded earlier in the
/// same frame keep their data. The write cursor rewinds when a new frame index
/// is seen. When a frame outgrows the buffer a larger one replaces it and
/// `generation` changes, so bind groups referencing the buffer must be rebuilt.
pub(super) struct FrameBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    align: u64,

    buffer: wgpu::Buffer,
    capacity: u64,
    cursor: u64,
    frame: Option<u64>,
    generation: u64,
}

impl FrameBuffer {
    pub(super) fn new(
        device: &wgpu::Device,
        label: &'static str,
        usage: wgpu::BufferUsages,
        capacity: u64,
        align: u64,
    ) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST;
        let capacity = capacity.max(align).next_power_of_two();
        Self {
            label,
            usage,
            align,
            buffer: create_buffer(device, label, usage, capacity),
            capacity,
            cursor: 0,
            frame: None,
            generation: 0,
        }
    }

    pub(super) fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    /// Writes `bytes` into a fresh region and returns its byte offset.
    pub(super) fn push(&mut self, ctx: &RenderCtx<'_>, bytes: &[u8]) -> u64 {
        if self.frame != Some(ctx.frame_index) {
            self.frame = Some(ctx.frame_index);
            self.cursor = 0;
        }

        let len = bytes.len() as u64;
        let mut offset = align_up(self.cursor, self.align);
        if offset + len > self.capacity {
            let needed = (self.capacity * 2).max(len).next_power_of_two();
            log::debug!("{}: growing {} -> {} bytes", self.label, self.capacity, needed);
            self.buffer = create_buffer(ctx.device, self.label, self.usage, needed);
            self.capacity = needed;
            self.generation += 1;
            offset = 0;
        }

        ctx.queue.write_buffer(&self.buffer, offset, bytes);
        self.cursor = offset + len;
        offset
    }
}

fn create_buffer(
    device: &wgpu::Device,
    label: &str,
    usage: wgpu::BufferUsages,
    size: u64,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage,
        mapped_at_creation: false,
    })
}

// ── uniforms ──────────────────────────────────────────────────────────────

/// Dynamic-offset uniform alignment for `device`.
pub(super) fn uniform_alignment(device: &wgpu::Device) -> u64 {
    u64::from(device.limits().min_uniform_buffer_offset_alignment).max(16)
}

/// Layout for one uniform buffer bound with a dynamic offset.
pub(super) fn dynamic_uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
    size: std::num::NonZeroU64,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: Some(size),
            },
            count: None,
        }],
    })
}

pub(super) fn dynamic_uniform_bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    size: std::num::NonZeroU64,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer,
                offset: 0,
                size: Some(size),
            }),
        }],
    })
}

// ── vertices ──────────────────────────────────────────────────────────────

/// Position-only vertex in NDC.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct SolidVertex {
    pub pos: [f32; 2],
}

impl SolidVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// NDC position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct TexturedVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── pipeline ──────────────────────────────────────────────────────────

pub(super) fn triangle_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader: &wgpu::ShaderModule,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    vertex_layout: wgpu::VertexBufferLayout<'static>,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

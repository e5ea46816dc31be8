use crate::paint::Color;

/// Device handles and frame identity passed to every draw call.
///
/// Renderers rewind their per-frame vertex and uniform stores whenever
/// `frame_index` differs from the last one they saw.
#[derive(Copy, Clone)]
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub frame_index: u64,
}

impl<'a> RenderCtx<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        frame_index: u64,
    ) -> Self {
        Self { device, queue, surface_format, frame_index }
    }
}

/// The frame's encoder and swapchain view. Each draw call opens its own
/// pass here, so passes run in the order the calls were made.
pub struct RenderTarget<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, view: &'a wgpu::TextureView) -> Self {
        Self { encoder, view }
    }

    /// Fills the whole target with `color`.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array().map(f64::from);
        let _pass = self.pass("aircon clear", wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }));
    }

    /// Pass that draws over what earlier passes left.
    pub(crate) fn load_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.pass(label, wgpu::LoadOp::Load)
    }

    fn pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

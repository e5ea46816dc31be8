/// Swapchain and device options.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Use an sRGB swapchain when offered. With `false` a unorm format is
    /// chosen and color values reach the screen unconverted.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Falls back to the first supported mode when unset or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Flat 2D drawing needs no optional features; the downlevel limits let
    /// the widest range of adapters qualify.
    pub limits: wgpu::Limits,

    pub max_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            limits: wgpu::Limits::downlevel_defaults(),
            max_frame_latency: 2,
        }
    }
}

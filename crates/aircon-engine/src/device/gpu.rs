use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{
    apply_resize, choose_alpha_mode, choose_surface_format, surface_config, surface_error_action,
};
use super::{GpuInit, SurfaceErrorAction};

/// Device, queue and swapchain for the single application window.
///
/// `'w` is the window borrow held by the surface.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

/// Swapchain image, its view and the encoder every draw call of the frame
/// records into. Dropped or submitted before the next `begin_frame`.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = open_adapter(&instance, &surface).await?;
        let (device, queue) = open_device(&adapter, &init).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps, init.prefer_srgb)
            .context("surface reports no formats")?;
        let alpha_mode = choose_alpha_mode(&caps, init.alpha_mode);
        let config = surface_config(format, alpha_mode, size, &init);
        surface.configure(&device, &config);

        log::info!(
            "swapchain {format:?} ({}), {:?}, {}x{}",
            if format.is_srgb() { "sRGB encode" } else { "colors written as given" },
            config.present_mode,
            size.width,
            size.height
        );

        Ok(Self { surface, device, queue, config })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the swapchain. Zero sizes are remembered but not applied.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if !apply_resize(&self.surface, &self.device, &mut self.config, new_size) {
            log::debug!("surface resize to {}x{} deferred", new_size.width, new_size.height);
        }
    }

    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("aircon frame"),
        });
        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits everything recorded into the frame, then presents.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }

    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        let action = surface_error_action(&err);
        if action == SurfaceErrorAction::Reconfigured && self.config.width > 0 && self.config.height > 0 {
            self.surface.configure(&self.device, &self.config);
        }
        match action {
            SurfaceErrorAction::Fatal => log::error!("surface error {err:?}"),
            _ => log::warn!("surface error {err:?}: {action:?}"),
        }
        action
    }
}

async fn open_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface<'_>) -> Result<wgpu::Adapter> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no GPU adapter can present to this window")?;

    let info = adapter.get_info();
    log::info!("adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);
    Ok(adapter)
}

async fn open_device(adapter: &wgpu::Adapter, init: &GpuInit) -> Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("aircon device"),
            required_features: wgpu::Features::empty(),
            required_limits: init.limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to open GPU device")
}

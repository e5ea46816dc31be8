use std::num::NonZeroU64;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::coords::{NdcMapper, Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::shape::{circle_fan, fan_to_triangle_list, frame_strips};

use super::common::{
    create_checked_shader, dynamic_uniform_bind_group, dynamic_uniform_layout,
    triangle_pipeline, uniform_alignment, FrameBuffer, SolidVertex,
};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SolidStyle {
    color: [f32; 4],
}

const STYLE_SIZE: NonZeroU64 = match NonZeroU64::new(std::mem::size_of::<SolidStyle>() as u64) {
    Some(size) => size,
    None => panic!("SolidStyle is not zero-sized"),
};

/// Immediate-mode renderer for filled rectangles, circles and frames.
///
/// Every draw call converts its pixel-space geometry to NDC with the
/// renderer's own viewport, appends it to the frame's vertex store, and
/// records one render pass. Passes execute in call order, so the draw order
/// is the painting order.
pub struct PrimitiveRenderer {
    viewport: Viewport,
    surface_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,

    style_layout: wgpu::BindGroupLayout,
    style_bind_group: wgpu::BindGroup,
    style_generation: u64,

    vertices: FrameBuffer,
    styles: FrameBuffer,
}

impl PrimitiveRenderer {
    /// Builds the solid-color pipeline.
    ///
    /// Fails when the shader does not compile; the renderer never exists in a
    /// half-initialized state.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Result<Self> {
        let shader = create_checked_shader(device, "aircon solid shader", include_str!("shaders/solid.wgsl"))?;

        let style_layout = dynamic_uniform_layout(
            device,
            "aircon solid style bgl",
            wgpu::ShaderStages::FRAGMENT,
            STYLE_SIZE,
        );
        let pipeline = triangle_pipeline(
            device,
            "aircon solid pipeline",
            &shader,
            &[&style_layout],
            SolidVertex::layout(),
            surface_format,
        );

        let vertices = FrameBuffer::new(
            device,
            "aircon solid vertices",
            wgpu::BufferUsages::VERTEX,
            64 * 1024,
            wgpu::COPY_BUFFER_ALIGNMENT,
        );
        let styles = FrameBuffer::new(
            device,
            "aircon solid styles",
            wgpu::BufferUsages::UNIFORM,
            16 * 1024,
            uniform_alignment(device),
        );
        let style_bind_group = dynamic_uniform_bind_group(
            device,
            "aircon solid style bind group",
            &style_layout,
            styles.buffer(),
            STYLE_SIZE,
        );

        log::info!("primitive renderer ready ({surface_format:?})");

        Ok(Self {
            viewport,
            surface_format,
            pipeline,
            style_layout,
            style_bind_group,
            style_generation: styles.generation(),
            vertices,
            styles,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Stores the new logical drawable size used for all later conversions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Two triangles covering `rect`.
    pub fn draw_rect(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, rect: Rect, color: Color) {
        let rect = rect.normalized();
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        let vertices = rect_vertices(NdcMapper::new(self.viewport), rect);
        self.draw_triangles(ctx, target, &vertices, color);
    }

    /// Filled circle built from a `segments`-slice fan (clamped to at least 3).
    pub fn draw_circle(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        center: Vec2,
        radius: f32,
        color: Color,
        segments: u32,
    ) {
        if !(radius > 0.0) || !center.is_finite() {
            return;
        }
        let vertices = circle_vertices(NdcMapper::new(self.viewport), center, radius, segments);
        self.draw_triangles(ctx, target, &vertices, color);
    }

    /// Hollow rectangle as four strips: top, bottom, left, right.
    pub fn draw_frame(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        rect: Rect,
        thickness: f32,
        color: Color,
    ) {
        for strip in frame_strips(rect, thickness) {
            self.draw_rect(ctx, target, strip, color);
        }
    }

    fn draw_triangles(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[SolidVertex],
        color: Color,
    ) {
        if vertices.is_empty() {
            return;
        }

        let style = SolidStyle { color: color.to_array() };
        let style_offset = self.styles.push(ctx, bytemuck::bytes_of(&style));
        if self.styles.generation() != self.style_generation {
            self.style_bind_group = dynamic_uniform_bind_group(
                ctx.device,
                "aircon solid style bind group",
                &self.style_layout,
                self.styles.buffer(),
                STYLE_SIZE,
            );
            self.style_generation = self.styles.generation();
        }

        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let vertex_offset = self.vertices.push(ctx, bytes);
        let vertex_end = vertex_offset + bytes.len() as u64;

        let mut rpass = target.load_pass("aircon solid pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.style_bind_group, &[style_offset as u32]);
        rpass.set_vertex_buffer(0, self.vertices.buffer().slice(vertex_offset..vertex_end));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }
}

/// Six NDC vertices for `rect` with consistent winding.
fn rect_vertices(mapper: NdcMapper, rect: Rect) -> [SolidVertex; 6] {
    mapper.rect(rect).triangles().map(|pos| SolidVertex { pos })
}

/// Circle fan in NDC, expanded to a triangle list of `3 * segments` vertices.
fn circle_vertices(mapper: NdcMapper, center: Vec2, radius: f32, segments: u32) -> Vec<SolidVertex> {
    let fan: Vec<SolidVertex> = circle_fan(center, radius, segments)
        .into_iter()
        .map(|p| SolidVertex { pos: mapper.point(p) })
        .collect();
    fan_to_triangle_list(&fan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> NdcMapper {
        NdcMapper::new(Viewport::new(200.0, 100.0))
    }

    #[test]
    fn rect_vertices_cover_the_rect() {
        let v = rect_vertices(mapper(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(v[0].pos, [-1.0, 1.0]);
        assert_eq!(v[1].pos, [0.0, 1.0]);
        assert_eq!(v[2].pos, [0.0, 0.0]);
        assert_eq!(v[5].pos, [-1.0, 0.0]);
        // Shared diagonal.
        assert_eq!(v[0], v[3]);
        assert_eq!(v[2], v[4]);
    }

    #[test]
    fn rect_triangles_share_winding() {
        let v = rect_vertices(mapper(), Rect::new(20.0, 10.0, 60.0, 30.0));
        let cross = |a: [f32; 2], b: [f32; 2], c: [f32; 2]| {
            (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
        };
        let first = cross(v[0].pos, v[1].pos, v[2].pos);
        let second = cross(v[3].pos, v[4].pos, v[5].pos);
        assert!(first != 0.0);
        assert_eq!(first.signum(), second.signum());
    }

    #[test]
    fn circle_vertices_are_three_per_segment() {
        let v = circle_vertices(mapper(), Vec2::new(100.0, 50.0), 10.0, 48);
        assert_eq!(v.len(), 48 * 3);
        assert_eq!(v[0].pos, [0.0, 0.0]);
    }

    #[test]
    fn circle_vertices_clamp_segments() {
        assert_eq!(circle_vertices(mapper(), Vec2::new(10.0, 10.0), 5.0, 1).len(), 9);
    }

    #[test]
    fn style_uniform_is_sixteen_bytes() {
        assert_eq!(STYLE_SIZE.get(), 16);
    }
}

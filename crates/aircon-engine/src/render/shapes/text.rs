use std::collections::HashMap;
use std::num::NonZeroU64;
use std::path::Path;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::coords::{NdcMapper, Rect, Viewport};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::text::{
    check_texture_size, layout_glyphs, measure_glyphs, FontFace, GlyphMetrics, TextError, TextMetrics, PRELOADED_CHARSET,
};

use super::common::{
    create_checked_shader, dynamic_uniform_bind_group, dynamic_uniform_layout,
    triangle_pipeline, uniform_alignment, FrameBuffer, TexturedVertex,
};

// ── uniform ───────────────────────────────────────────────────────────────

const MODE_COVERAGE: u32 = 0;
const MODE_RGBA: u32 = 1;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TexturedStyle {
    color: [f32; 4],
    mode: u32,
    _pad: [u32; 3],
}

const STYLE_SIZE: NonZeroU64 = match NonZeroU64::new(std::mem::size_of::<TexturedStyle>() as u64) {
    Some(size) => size,
    None => panic!("TexturedStyle is not zero-sized"),
};

// ── glyphs ────────────────────────────────────────────────────────────────

/// A texture plus the bind group that samples it.
struct BoundTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// One preloaded character. Blank glyphs (space) have no texture.
struct Glyph {
    metrics: GlyphMetrics,
    texture: Option<BoundTexture>,
}

/// Everything `load_font` replaces as a unit.
struct LoadedFont {
    face: FontFace,
    pixel_height: u32,
    glyphs: HashMap<char, Glyph>,
}

impl Drop for LoadedFont {
    fn drop(&mut self) {
        // Textures are freed once no recorded pass uses them.
        log::debug!("releasing {} glyph textures", self.glyphs.len());
    }
}

/// A string baked into a standalone RGBA texture by
/// [`TextRenderer::create_text_texture`].
///
/// Owned by the caller and independent of the preloaded glyph set; reloading
/// the font does not affect it.
pub struct TextTexture {
    bound: BoundTexture,
    width: u32,
    height: u32,
}

impl TextTexture {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Text renderer over individually rasterized glyph textures.
///
/// `load_font` rasterizes a fixed charset (see [`PRELOADED_CHARSET`]) into one
/// R8 texture per glyph. `draw_text` emits one textured quad per known
/// character along a left-to-right pen; unknown characters are skipped both
/// here and in `measure`, so drawn width always equals measured width.
pub struct TextRenderer {
    viewport: Viewport,
    pipeline: wgpu::RenderPipeline,

    style_layout: wgpu::BindGroupLayout,
    style_bind_group: wgpu::BindGroup,
    style_generation: u64,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    vertices: FrameBuffer,
    styles: FrameBuffer,

    font: Option<LoadedFont>,
}

impl TextRenderer {
    /// Builds the textured pipeline. No font is loaded yet.
    ///
    /// Fails when the shader does not compile.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, viewport: Viewport) -> Result<Self> {
        let shader = create_checked_shader(device, "aircon textured shader", include_str!("shaders/textured.wgsl"))?;

        let style_layout = dynamic_uniform_layout(
            device,
            "aircon textured style bgl",
            wgpu::ShaderStages::FRAGMENT,
            STYLE_SIZE,
        );
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("aircon textured texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = triangle_pipeline(
            device,
            "aircon textured pipeline",
            &shader,
            &[&style_layout, &texture_layout],
            TexturedVertex::layout(),
            surface_format,
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("aircon text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let vertices = FrameBuffer::new(
            device,
            "aircon textured vertices",
            wgpu::BufferUsages::VERTEX,
            64 * 1024,
            wgpu::COPY_BUFFER_ALIGNMENT,
        );
        let styles = FrameBuffer::new(
            device,
            "aircon textured styles",
            wgpu::BufferUsages::UNIFORM,
            16 * 1024,
            uniform_alignment(device),
        );
        let style_bind_group = dynamic_uniform_bind_group(
            device,
            "aircon textured style bind group",
            &style_layout,
            styles.buffer(),
            STYLE_SIZE,
        );

        log::info!("text renderer ready ({surface_format:?})");

        Ok(Self {
            viewport,
            pipeline,
            style_layout,
            style_bind_group,
            style_generation: styles.generation(),
            texture_layout,
            sampler,
            vertices,
            styles,
            font: None,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn has_font(&self) -> bool {
        self.font.as_ref().is_some_and(|f| !f.glyphs.is_empty())
    }

    /// Pixel height of the loaded glyph set, 0 when none is loaded.
    pub fn pixel_height(&self) -> u32 {
        self.font.as_ref().map_or(0, |f| f.pixel_height)
    }

    /// Reads a font file and replaces the glyph set. See [`Self::load_font_face`].
    pub fn load_font(&mut self, ctx: &RenderCtx<'_>, path: impl AsRef<Path>, pixel_height: u32) -> Result<usize, TextError> {
        let face = FontFace::open(path)?;
        self.load_font_face(ctx, face, pixel_height)
    }

    /// Rasterizes the preloaded charset from `face` and swaps it in.
    ///
    /// The new set is built completely before the old one is destroyed; on
    /// failure the previous glyphs stay usable. Returns the glyph count.
    pub fn load_font_face(&mut self, ctx: &RenderCtx<'_>, face: FontFace, pixel_height: u32) -> Result<usize, TextError> {
        let pixel_height = pixel_height.max(1);
        let limit = ctx.device.limits().max_texture_dimension_2d;
        let mut glyphs = HashMap::new();

        for ch in PRELOADED_CHARSET.chars() {
            let Some(raster) = face.rasterize(ch, pixel_height) else {
                log::debug!("font has no glyph for {ch:?}");
                continue;
            };
            let m = raster.metrics;
            if let Err(err) = check_texture_size(m.width, m.height, limit) {
                log::warn!("skipping glyph {ch:?}: {err}");
                continue;
            }
            let texture = (m.width > 0 && m.height > 0).then(|| {
                self.upload_texture(
                    ctx,
                    "aircon glyph",
                    wgpu::TextureFormat::R8Unorm,
                    m.width,
                    m.height,
                    &raster.coverage,
                )
            });
            glyphs.insert(ch, Glyph { metrics: m, texture });
        }

        if glyphs.is_empty() {
            return Err(TextError::NoGlyphs);
        }

        let count = glyphs.len();
        log::info!(
            "loaded font {} at {pixel_height}px: {count} glyphs",
            face.origin().map_or_else(|| "<memory>".to_string(), |p| p.display().to_string())
        );

        // The previous set (if any) is dropped here, after the new one is complete.
        self.font = Some(LoadedFont { face, pixel_height, glyphs });
        Ok(count)
    }

    fn lookup(&self, ch: char) -> Option<GlyphMetrics> {
        self.font.as_ref()?.glyphs.get(&ch).map(|g| g.metrics)
    }

    /// Width, height and ascent of `text` at `scale` over the loaded glyphs.
    pub fn measure(&self, text: &str, scale: f32) -> TextMetrics {
        measure_glyphs(text, scale, self.pixel_height(), |c| self.lookup(c))
    }

    /// Draws `text` with the top-left of its box at `(x, y)`; the baseline is
    /// `y + ascent`. Does nothing without a loaded font.
    pub fn draw_text(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        text: &str,
        x: f32,
        y: f32,
        scale: f32,
        color: Color,
    ) {
        if !self.has_font() {
            return;
        }

        let placed = layout_glyphs(text, x, y, scale, self.pixel_height(), |c| self.lookup(c));
        if placed.is_empty() {
            return;
        }

        let mapper = NdcMapper::new(self.viewport);
        let vertices: Vec<TexturedVertex> = placed.iter().flat_map(|p| quad_vertices(mapper, p.rect)).collect();

        let style_offset = self.push_style(ctx, color, MODE_COVERAGE);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let vertex_offset = self.vertices.push(ctx, bytes);
        let vertex_end = vertex_offset + bytes.len() as u64;

        let Some(font) = self.font.as_ref() else { return };
        let mut rpass = target.load_pass("aircon text pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.style_bind_group, &[style_offset]);
        rpass.set_vertex_buffer(0, self.vertices.buffer().slice(vertex_offset..vertex_end));

        for (i, p) in placed.iter().enumerate() {
            let Some(bound) = font.glyphs.get(&p.ch).and_then(|g| g.texture.as_ref()) else {
                continue;
            };
            let first = (i * 6) as u32;
            rpass.set_bind_group(1, &bound.bind_group, &[]);
            rpass.draw(first..first + 6, 0..1);
        }
    }

    /// Bakes `text` (UTF-8, any code points the face supports) into one RGBA
    /// texture sized to the measured text plus `padding` on each side.
    ///
    /// Uses the face of the last successful `load_font`, rasterized at
    /// `pixel_height`. No texture is created on failure.
    pub fn create_text_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        text: impl AsRef<[u8]>,
        text_color: Color,
        background: Color,
        padding: u32,
        pixel_height: u32,
    ) -> Result<TextTexture, TextError> {
        let font = self.font.as_ref().ok_or(TextError::NoFont)?;
        let bitmap = font
            .face
            .bake(text.as_ref(), text_color, background, padding, pixel_height.max(1))?;
        check_texture_size(bitmap.width, bitmap.height, ctx.device.limits().max_texture_dimension_2d)?;

        let bound = self.upload_texture(
            ctx,
            "aircon baked text",
            wgpu::TextureFormat::Rgba8Unorm,
            bitmap.width,
            bitmap.height,
            &bitmap.pixels,
        );
        log::info!("baked text texture {}x{}", bitmap.width, bitmap.height);

        Ok(TextTexture {
            bound,
            width: bitmap.width,
            height: bitmap.height,
        })
    }

    /// Draws a baked texture stretched over `rect`, tinted by `tint`.
    pub fn draw_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        texture: &TextTexture,
        rect: Rect,
        tint: Color,
    ) {
        let rect = rect.normalized();
        if rect.is_empty() {
            return;
        }

        let vertices = quad_vertices(NdcMapper::new(self.viewport), rect);
        let style_offset = self.push_style(ctx, tint, MODE_RGBA);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let vertex_offset = self.vertices.push(ctx, bytes);
        let vertex_end = vertex_offset + bytes.len() as u64;

        let mut rpass = target.load_pass("aircon texture pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.style_bind_group, &[style_offset]);
        rpass.set_bind_group(1, &texture.bound.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertices.buffer().slice(vertex_offset..vertex_end));
        rpass.draw(0..6, 0..1);
    }

    fn push_style(&mut self, ctx: &RenderCtx<'_>, color: Color, mode: u32) -> u32 {
        let style = TexturedStyle {
            color: color.to_array(),
            mode,
            _pad: [0; 3],
        };
        let offset = self.styles.push(ctx, bytemuck::bytes_of(&style));
        if self.styles.generation() != self.style_generation {
            self.style_bind_group = dynamic_uniform_bind_group(
                ctx.device,
                "aircon textured style bind group",
                &self.style_layout,
                self.styles.buffer(),
                STYLE_SIZE,
            );
            self.style_generation = self.styles.generation();
        }
        offset as u32
    }

    fn upload_texture(
        &self,
        ctx: &RenderCtx<'_>,
        label: &str,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> BoundTexture {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let bytes_per_pixel = format.block_copy_size(None).unwrap_or(1);
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * bytes_per_pixel),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        BoundTexture { _texture: texture, bind_group }
    }
}

/// Six textured vertices for `rect`; v = 0 at the top edge, matching bitmap rows.
fn quad_vertices(mapper: NdcMapper, rect: Rect) -> [TexturedVertex; 6] {
    let n = mapper.rect(rect);
    let v = |x: f32, y: f32, u: f32, t: f32| TexturedVertex { pos: [x, y], uv: [u, t] };
    [
        v(n.x0, n.y0, 0.0, 0.0),
        v(n.x1, n.y0, 1.0, 0.0),
        v(n.x1, n.y1, 1.0, 1.0),
        v(n.x0, n.y0, 0.0, 0.0),
        v(n.x1, n.y1, 1.0, 1.0),
        v(n.x0, n.y1, 0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_uvs_follow_positions() {
        let mapper = NdcMapper::new(Viewport::new(100.0, 100.0));
        let q = quad_vertices(mapper, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(q[0], TexturedVertex { pos: [-1.0, 1.0], uv: [0.0, 0.0] });
        assert_eq!(q[2], TexturedVertex { pos: [0.0, 0.0], uv: [1.0, 1.0] });
        assert_eq!(q[5], TexturedVertex { pos: [-1.0, 0.0], uv: [0.0, 1.0] });
    }

    #[test]
    fn quad_positions_match_solid_rect_triangles() {
        let mapper = NdcMapper::new(Viewport::new(640.0, 480.0));
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let positions: Vec<[f32; 2]> = quad_vertices(mapper, rect).iter().map(|v| v.pos).collect();
        assert_eq!(positions, mapper.rect(rect).triangles().to_vec());
    }

    #[test]
    fn textured_style_is_thirty_two_bytes() {
        assert_eq!(STYLE_SIZE.get(), 32);
    }
}

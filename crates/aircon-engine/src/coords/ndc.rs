use super::{Rect, Vec2, Viewport};

/// Corner coordinates of a rectangle in normalized device space.
///
/// `x0/y0` is the top-left pixel corner, `x1/y1` the bottom-right one; after
/// the y flip `y0 > y1` for any rectangle with positive height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NdcRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl NdcRect {
    /// Two triangles covering the rectangle, clockwise in pixel space:
    /// (tl, tr, br) then (tl, br, bl).
    pub fn triangles(self) -> [[f32; 2]; 6] {
        [
            [self.x0, self.y0],
            [self.x1, self.y0],
            [self.x1, self.y1],
            [self.x0, self.y0],
            [self.x1, self.y1],
            [self.x0, self.y1],
        ]
    }
}

/// Pixel space to NDC conversion for one viewport size.
///
/// `ndc_x = 2 * px / width - 1`, `ndc_y = 1 - 2 * py / height`.
///
/// The mapper is a plain value built from the current viewport on every call
/// site; renderers never keep a mapper across a resize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NdcMapper {
    width: f32,
    height: f32,
}

impl NdcMapper {
    /// Builds a mapper. Degenerate viewports are clamped to one pixel so the
    /// conversion never divides by zero (a minimized window reports 0×0).
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width.max(1.0),
            height: viewport.height.max(1.0),
        }
    }

    #[inline]
    pub fn point(self, p: Vec2) -> [f32; 2] {
        [
            2.0 * p.x / self.width - 1.0,
            1.0 - 2.0 * p.y / self.height,
        ]
    }

    #[inline]
    pub fn rect(self, r: Rect) -> NdcRect {
        let [x0, y0] = self.point(r.origin);
        let [x1, y1] = self.point(r.max());
        NdcRect { x0, y0, x1, y1 }
    }
}

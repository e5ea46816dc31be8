use std::f32::consts::TAU;

use crate::coords::{Rect, Vec2};

/// Segment count used when callers do not ask for one.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 48;

/// Fewer segments than this do not enclose an area.
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Triangle fan for a filled circle.
///
/// Layout: the center, then `segments + 1` rim points at angles
/// `i * 2π / segments` for `i = 0..=segments`. The last rim point repeats the
/// first so the fan closes. `segments` below [`MIN_CIRCLE_SEGMENTS`] is clamped.
pub fn circle_fan(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(MIN_CIRCLE_SEGMENTS);
    let mut fan = Vec::with_capacity(segments as usize + 2);
    fan.push(center);
    for i in 0..=segments {
        // i == segments lands on exactly 2π; reuse angle 0 so the seam is
        // bit-identical instead of off by a rounding error.
        let step = if i == segments { 0 } else { i };
        let angle = TAU * step as f32 / segments as f32;
        fan.push(center.polar_offset(radius, angle));
    }
    fan
}

/// Expands a fan (`center, p0, p1, ..., pn`) into an independent triangle list
/// `(center, p[i], p[i+1])`. wgpu has no fan topology.
pub fn fan_to_triangle_list<T: Copy>(fan: &[T]) -> Vec<T> {
    if fan.len() < 3 {
        return Vec::new();
    }
    let center = fan[0];
    let rim = &fan[1..];
    let mut out = Vec::with_capacity((rim.len() - 1) * 3);
    for pair in rim.windows(2) {
        out.extend_from_slice(&[center, pair[0], pair[1]]);
    }
    out
}

/// The four strips of a hollow frame: top, bottom, left, right.
///
/// Corners overlap; thickness is assumed to be at most `min(w, h) / 2`.
pub fn frame_strips(rect: Rect, thickness: f32) -> [Rect; 4] {
    let Rect { origin, size } = rect;
    [
        Rect::new(origin.x, origin.y, size.x, thickness),
        Rect::new(origin.x, origin.y + size.y - thickness, size.x, thickness),
        Rect::new(origin.x, origin.y, thickness, size.y),
        Rect::new(origin.x + size.x - thickness, origin.y, thickness, size.y),
    ]
}

/// Drawable size in logical pixels.
///
/// Renderers keep their own copy and only learn about changes through their
/// `resize` methods.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical size of a physical surface at `scale_factor`.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new((f64::from(width) / scale) as f32, (f64::from(height) / scale) as f32)
    }

    /// Something can be drawn: both sides finite and positive. A minimized
    /// window reports zero.
    pub fn has_area(self) -> bool {
        [self.width, self.height].iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_to_logical() {
        assert_eq!(Viewport::from_physical(1600, 1200, 2.0), Viewport::new(800.0, 600.0));
        assert_eq!(Viewport::from_physical(800, 600, 0.0), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn minimized_has_no_area() {
        assert!(!Viewport::new(0.0, 600.0).has_area());
        assert!(!Viewport::new(800.0, f32::INFINITY).has_area());
        assert!(Viewport::new(800.0, 600.0).has_area());
    }
}

use super::Vec2;

/// Axis-aligned rectangle in logical pixels: `origin` is the top-left corner.
///
/// A negative size is allowed on construction; renderers call
/// [`Rect::normalized`] before emitting geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_origin_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same area with a non-negative size.
    pub fn normalized(self) -> Self {
        let a = self.origin;
        let b = self.max();
        let lo = a.component_min(b);
        let hi = a.component_max(b);
        Self::from_origin_size(lo, hi - lo)
    }

    /// Shrunk by `d` on each side, clamped to zero size.
    pub fn inset(self, d: f32) -> Self {
        let size = Vec2::new((self.size.x - 2.0 * d).max(0.0), (self.size.y - 2.0 * d).max(0.0));
        Self::from_origin_size(self.origin + Vec2::new(d, d), size)
    }

    /// Top and left edges inside, bottom and right edges outside, so rects
    /// that share an edge never both claim a point.
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let far = r.max();
        (r.origin.x..far.x).contains(&p.x) && (r.origin.y..far.y).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect::new(578.0, 192.0, 40.0, 54.0);

    // ── hit testing ─────────────────────────────────────────────────────────

    #[test]
    fn stacked_halves_split_points_on_the_seam() {
        let upper = Rect::new(0.0, 0.0, 40.0, 27.0);
        let lower = Rect::new(0.0, 27.0, 40.0, 27.0);
        let seam = Vec2::new(20.0, 27.0);
        assert!(!upper.contains(seam));
        assert!(lower.contains(seam));
    }

    #[test]
    fn corners() {
        assert!(BUTTON.contains(BUTTON.origin));
        assert!(!BUTTON.contains(BUTTON.max()));
        assert!(!BUTTON.contains(BUTTON.origin - Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn flipped_rect_hits_like_its_normal_form() {
        let flipped = Rect::from_origin_size(BUTTON.max(), BUTTON.size * -1.0);
        assert_eq!(flipped.normalized(), BUTTON);
        assert!(flipped.contains(BUTTON.center()));
    }

    // ── derived geometry ────────────────────────────────────────────────────

    #[test]
    fn center_and_from_center_agree() {
        assert_eq!(BUTTON.center(), Vec2::new(598.0, 219.0));
        assert_eq!(Rect::from_center(BUTTON.center(), BUTTON.size), BUTTON);
    }

    #[test]
    fn inset_bowl_walls() {
        let bowl = Rect::new(270.0, 460.0, 260.0, 140.0);
        assert_eq!(bowl.inset(10.0), Rect::new(280.0, 470.0, 240.0, 120.0));
    }

    #[test]
    fn inset_past_the_middle_is_empty() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0).inset(3.0);
        assert_eq!(r.size, Vec2::new(4.0, 0.0));
        assert!(r.is_empty());
    }

    #[test]
    fn nan_size_counts_as_empty() {
        assert!(Rect::new(0.0, 0.0, f32::NAN, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 5.0).is_finite());
    }
}

use core::ops::{Add, Mul, Sub};

/// Point or offset in logical pixels, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared length; hit tests compare against `r²` to skip the root.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn component_min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn component_max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Point at `radius` from `self` in direction `angle` (radians). With +Y
    /// down, growing angles turn clockwise on screen.
    #[inline]
    pub fn polar_offset(self, radius: f32, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        self + Vec2::new(cos, sin) * radius
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, k: f32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_distance_is_squared() {
        assert_eq!(Vec2::new(3.0, 4.0).length_squared(), 25.0);
        assert_eq!((Vec2::new(5.0, 5.0) - Vec2::new(2.0, 1.0)).length_squared(), 25.0);
    }

    #[test]
    fn zero_angle_points_right_quarter_turn_points_down() {
        let c = Vec2::new(10.0, 10.0);
        assert_eq!(c.polar_offset(5.0, 0.0), Vec2::new(15.0, 10.0));
        let down = c.polar_offset(5.0, core::f32::consts::FRAC_PI_2);
        assert!((down.x - 10.0).abs() < 1e-5 && (down.y - 15.0).abs() < 1e-5);
    }

    #[test]
    fn component_extremes() {
        let a = Vec2::new(1.0, 8.0);
        let b = Vec2::new(4.0, -2.0);
        assert_eq!(a.component_min(b), Vec2::new(1.0, -2.0));
        assert_eq!(a.component_max(b), Vec2::new(4.0, 8.0));
    }
}

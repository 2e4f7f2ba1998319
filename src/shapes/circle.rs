use crate::collision::interval::{Boundary, Interval};
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub position: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle; a negative radius is taken by magnitude.
    pub fn new(position: Vec2, radius: f64) -> Self {
        Self { position, radius: radius.abs() }
    }

    pub fn range_x(&self) -> Interval {
        Interval::new(self.position.x - self.radius, self.position.x + self.radius)
    }

    pub fn range_y(&self) -> Interval {
        Interval::new(self.position.y - self.radius, self.position.y + self.radius)
    }

    pub fn project(&self, axis: Vec2) -> Interval {
        let center = self.position.dot(axis);
        let extent = self.radius * axis.magnitude();
        Interval::new(center - extent, center + extent)
    }

    pub fn bounds(&self) -> Rect {
        let r = Vec2::new(self.radius, self.radius);
        Rect::from_position_size(self.position - r, r * 2.0)
    }

    pub fn contains_point(&self, point: Vec2, boundary: Boundary) -> bool {
        let d2 = self.position.distance_squared(point);
        let r2 = self.radius * self.radius;
        match boundary {
            Boundary::Exclusive => d2 < r2,
            Boundary::Inclusive => d2 <= r2,
        }
    }

    /// Centre mapped by the transform, radius scaled by `|scale.x|`.
    pub fn positioned(&self, transform: &Transform) -> Self {
        Self {
            position: transform.apply(self.position),
            radius: self.radius * transform.scale.x.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0);
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_circle_new_negative_radius_is_magnitude() {
        let c = Circle::new(Vec2::ZERO, -1.0);
        assert_eq!(c.radius, 1.0);
    }

    #[test]
    fn test_circle_ranges_and_bounds() {
        let c = Circle::new(Vec2::new(0.0, 10.0), 50.0);
        assert_eq!(c.range_x(), Interval::new(-50.0, 50.0));
        assert_eq!(c.range_y(), Interval::new(-40.0, 60.0));
        assert_eq!(c.bounds(), Rect::new(-50.0, -40.0, 100.0, 100.0));
    }

    #[test]
    fn test_circle_project() {
        let c = Circle::new(Vec2::new(3.0, 4.0), 1.0);
        let i = c.project(Vec2::new(0.6, 0.8));
        assert!((i.min - 4.0).abs() < EPSILON);
        assert!((i.max - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_contains_point() {
        let c = Circle::new(Vec2::ZERO, 5.0);
        assert!(c.contains_point(Vec2::new(3.0, 3.0), Boundary::Exclusive));
        assert!(!c.contains_point(Vec2::new(5.0, 0.0), Boundary::Exclusive));
        assert!(c.contains_point(Vec2::new(5.0, 0.0), Boundary::Inclusive));
    }

    #[test]
    fn test_circle_positioned_uses_x_scale_magnitude() {
        let c = Circle::new(Vec2::new(1.0, 0.0), 2.0);
        let t = Transform::new(Vec2::new(5.0, 5.0), Vec2::new(-3.0, 0.5), 0.0);
        let p = c.positioned(&t);
        assert!((p.radius - 6.0).abs() < EPSILON);
        assert!((p.position.x - 2.0).abs() < EPSILON);
        assert!((p.position.y - 5.0).abs() < EPSILON);
    }
}

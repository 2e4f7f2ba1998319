use crate::collision::interval::Interval;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::rect::Rect;

/// Finite line between two arbitrary points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub point1: Vec2,
    pub point2: Vec2,
}

impl Line {
    pub fn new(point1: Vec2, point2: Vec2) -> Self {
        Self { point1, point2 }
    }

    /// Calculates the length of the line.
    pub fn length(&self) -> f64 {
        self.point1.distance(self.point2)
    }

    /// Calculates the squared length of the line.
    pub fn length_squared(&self) -> f64 {
        self.point1.distance_squared(self.point2)
    }

    /// Returns the direction vector of the line (from point1 to point2).
    pub fn direction(&self) -> Vec2 {
        self.point2 - self.point1
    }

    /// Unit perpendicular; zero for a degenerate line.
    pub fn normal(&self) -> Vec2 {
        self.direction().perpendicular().normalize()
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.point1 + self.point2) * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.length_squared() == 0.0 || !self.direction().is_finite()
    }

    pub fn project(&self, axis: Vec2) -> Interval {
        Interval::new(self.point1.dot(axis), self.point2.dot(axis))
    }

    /// Finds the point on the line closest to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let direction = self.direction();
        let length_sq = direction.magnitude_squared();
        if length_sq < 1e-12 {
            return self.point1;
        }
        let t = ((point - self.point1).dot(direction) / length_sq).clamp(0.0, 1.0);
        self.point1 + direction * t
    }

    pub fn distance_to_point(&self, point: Vec2) -> f64 {
        self.closest_point(point).distance(point)
    }

    pub fn bounds(&self) -> Rect {
        let x = Interval::new(self.point1.x, self.point2.x);
        let y = Interval::new(self.point1.y, self.point2.y);
        Rect::new(x.min, y.min, x.length(), y.length())
    }

    pub fn positioned(&self, transform: &Transform) -> Self {
        Self::new(transform.apply(self.point1), transform.apply(self.point2))
    }
}

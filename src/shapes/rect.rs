use crate::collision::interval::{Boundary, Interval};
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::polygon::Polygon;

/// Axis-aligned rectangle given by its upper-left corner and size (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            position: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Smallest rectangle containing every point. Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Self::from_position_size(min, max - min))
    }

    pub fn upper_left(&self) -> Vec2 {
        self.position
    }

    pub fn upper_right(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x, self.position.y)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y + self.size.y)
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.position + self.size
    }

    /// Corners in drawing order: upper-left, upper-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [self.upper_left(), self.upper_right(), self.bottom_right(), self.bottom_left()]
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Extent along the x axis.
    pub fn horizontal(&self) -> Interval {
        Interval::new(self.position.x, self.position.x + self.size.x)
    }

    /// Extent along the y axis.
    pub fn vertical(&self) -> Interval {
        Interval::new(self.position.y, self.position.y + self.size.y)
    }

    /// Same area with a non-negative size.
    pub fn normalized(&self) -> Self {
        let h = self.horizontal();
        let v = self.vertical();
        Self::new(h.min, v.min, h.length(), v.length())
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self::from_position_size(self.position + offset, self.size)
    }

    /// Scales position and size component-wise about the origin.
    pub fn scale(&self, scale: Vec2) -> Self {
        Self::from_position_size(self.position.component_mul(scale), self.size.component_mul(scale))
            .normalized()
    }

    /// Rotates about the origin by whole quarter turns; each turn maps `(x, y)` to `(-y, x)`.
    pub fn rotate(&self, turns: i32) -> Self {
        let mut rect = self.normalized();
        for _ in 0..turns.rem_euclid(4) {
            rect = Self::new(
                -(rect.position.y + rect.size.y),
                rect.position.x,
                rect.size.y,
                rect.size.x,
            );
        }
        rect
    }

    /// World-space copy: scale, snap the rotation to quarter turns, then translate.
    pub fn positioned(&self, transform: &Transform) -> Self {
        self.scale(transform.scale)
            .rotate(transform.quarter_turns())
            .translate(transform.position)
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }

    pub fn contains_point(&self, point: Vec2, boundary: Boundary) -> bool {
        self.horizontal().contains(point.x, boundary) && self.vertical().contains(point.y, boundary)
    }

    /// Projects the four corners onto `axis`.
    pub fn project(&self, axis: Vec2) -> Interval {
        let corners = self.corners();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for corner in corners {
            let projection = corner.dot(axis);
            min = min.min(projection);
            max = max.max(projection);
        }
        Interval { min, max }
    }

    pub fn area(&self) -> f64 {
        (self.size.x * self.size.y).abs()
    }
}

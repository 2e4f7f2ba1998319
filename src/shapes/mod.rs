pub mod circle;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod segment;

// Re-export the specific shape types
pub use circle::Circle;
pub use line::Line;
pub use polygon::Polygon;
pub use rect::Rect;
pub use segment::Segment;

use std::cmp::Ordering;

use crate::collision::interval::{Boundary, Interval};
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

/// Enum representing the geometry a collider can carry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point(Vec2),
    Segment(Segment),
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Polygon(Polygon),
}

/// Variant tag of a [`Shape`], ordered the way pair tests are canonicalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Point,
    Segment,
    Rect,
    Circle,
    Line,
    Polygon,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Scalar extent of the shape along `axis`.
    pub fn project(&self, axis: Vec2) -> Interval {
        match self {
            Shape::Point(p) => Interval::point(p.dot(axis)),
            Shape::Segment(s) => s.project(axis),
            Shape::Rect(r) => r.project(axis),
            Shape::Circle(c) => c.project(axis),
            Shape::Line(l) => l.project(axis),
            Shape::Polygon(p) => p.project(axis),
        }
    }

    /// Edge normals used as separating axis candidates.
    ///
    /// Points, circles and the axis-aligned shapes contribute none beyond the world axes.
    pub fn axes(&self) -> Vec<Vec2> {
        match self {
            Shape::Line(l) => vec![l.normal()],
            Shape::Polygon(p) => p.edge_normals(),
            Shape::Point(_) | Shape::Segment(_) | Shape::Rect(_) | Shape::Circle(_) => Vec::new(),
        }
    }

    /// Corner points; empty for a circle.
    pub fn vertices(&self) -> Vec<Vec2> {
        match self {
            Shape::Point(p) => vec![*p],
            Shape::Segment(s) => vec![s.position, s.end()],
            Shape::Rect(r) => r.corners().to_vec(),
            Shape::Circle(_) => Vec::new(),
            Shape::Line(l) => vec![l.point1, l.point2],
            Shape::Polygon(p) => p.points().to_vec(),
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Point(p) => Rect::from_position_size(*p, Vec2::ZERO),
            Shape::Segment(s) => s.bounds(),
            Shape::Rect(r) => r.normalized(),
            Shape::Circle(c) => c.bounds(),
            Shape::Line(l) => l.bounds(),
            Shape::Polygon(p) => p.bounds(),
        }
    }

    /// Inclusive containment test. Zero-measure shapes contain only the points lying on them.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Shape::Point(p) => *p == point,
            Shape::Segment(s) => s.closest_point(point) == point,
            Shape::Rect(r) => r.normalized().contains_point(point, Boundary::Inclusive),
            Shape::Circle(c) => c.contains_point(point, Boundary::Inclusive),
            Shape::Line(l) => l.distance_to_point(point) == 0.0,
            Shape::Polygon(p) => p.contains_point(point),
        }
    }

    /// Degenerate geometry never collides.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Point(p) => !p.is_finite(),
            Shape::Segment(s) => s.is_degenerate(),
            Shape::Rect(r) => !r.position.is_finite() || !r.size.is_finite(),
            Shape::Circle(c) => !c.position.is_finite() || !c.radius.is_finite() || c.radius < 0.0,
            Shape::Line(l) => l.is_degenerate(),
            Shape::Polygon(p) => !p.is_valid() || !p.is_convex(),
        }
    }

    /// Total order over shapes: by kind, then field by field with [`f64::total_cmp`].
    ///
    /// Same-kind pair tests run in this order so that swapping the arguments
    /// negates the result exactly, ties included.
    pub fn total_cmp(&self, other: &Shape) -> Ordering {
        match (self, other) {
            (Shape::Point(p), Shape::Point(q)) => p.total_cmp(q),
            (Shape::Segment(s1), Shape::Segment(s2)) => s1
                .position
                .total_cmp(&s2.position)
                .then_with(|| s1.length.total_cmp(&s2.length))
                .then_with(|| s1.vertical.cmp(&s2.vertical)),
            (Shape::Rect(r1), Shape::Rect(r2)) => {
                r1.position.total_cmp(&r2.position).then_with(|| r1.size.total_cmp(&r2.size))
            }
            (Shape::Circle(c1), Shape::Circle(c2)) => c1
                .position
                .total_cmp(&c2.position)
                .then_with(|| c1.radius.total_cmp(&c2.radius)),
            (Shape::Line(l1), Shape::Line(l2)) => {
                l1.point1.total_cmp(&l2.point1).then_with(|| l1.point2.total_cmp(&l2.point2))
            }
            (Shape::Polygon(p1), Shape::Polygon(p2)) => p1
                .points()
                .iter()
                .zip(p2.points())
                .map(|(a, b)| a.total_cmp(b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| p1.len().cmp(&p2.len())),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    /// World-space copy of a local shape.
    pub fn positioned(&self, transform: &Transform) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(transform.apply(*p)),
            Shape::Segment(s) => Shape::Segment(s.positioned(transform)),
            Shape::Rect(r) => Shape::Rect(r.positioned(transform)),
            Shape::Circle(c) => Shape::Circle(c.positioned(transform)),
            Shape::Line(l) => Shape::Line(l.positioned(transform)),
            Shape::Polygon(p) => Shape::Polygon(p.positioned(transform)),
        }
    }
}

impl From<Vec2> for Shape {
    fn from(point: Vec2) -> Self {
        Shape::Point(point)
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

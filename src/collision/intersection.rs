//! Geometric queries that do not produce a penetration response.

use crate::math::vec2::Vec2;
use crate::shapes::{Line, Polygon};

use super::interval::{interval_intersection, Boundary, Interval};

/// Outcome of intersecting two lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    pub intersecting: bool,
    pub parallel: bool,
    pub collinear: bool,
    /// Crossing point for non-parallel lines. For collinear lines, the per-axis
    /// translation separating the first line from the second.
    pub point: Vec2,
}

/// Intersects two lines given by their end points.
pub fn intersect_lines(line1: &Line, line2: &Line, boundary: Boundary) -> LineIntersection {
    let p1 = line1.point1;
    let v1 = line1.direction();
    let v2 = line2.direction();
    let delta = line2.point1 - p1;
    let denominator = v1.cross(v2);

    if denominator == 0.0 {
        if delta.cross(v1) != 0.0 {
            return LineIntersection {
                intersecting: false,
                parallel: true,
                collinear: false,
                point: Vec2::ZERO,
            };
        }
        let x = interval_intersection(
            Interval::new(line1.point1.x, line1.point2.x),
            Interval::new(line2.point1.x, line2.point2.x),
            boundary,
        );
        let y = interval_intersection(
            Interval::new(line1.point1.y, line1.point2.y),
            Interval::new(line2.point1.y, line2.point2.y),
            boundary,
        );
        // An axis-parallel pair spans nothing on one axis; either axis then decides.
        let intersecting = match boundary {
            Boundary::Inclusive => x.overlapping || y.overlapping,
            Boundary::Exclusive => x.overlapping && y.overlapping,
        };
        return LineIntersection {
            intersecting,
            parallel: true,
            collinear: true,
            point: Vec2::new(x.translation, y.translation),
        };
    }

    let s1 = delta.cross(v2) / denominator;
    let s2 = delta.cross(v1) / denominator;
    let within = |s: f64| match boundary {
        Boundary::Exclusive => s > 0.0 && s < 1.0,
        Boundary::Inclusive => (0.0..=1.0).contains(&s),
    };

    LineIntersection {
        intersecting: within(s1) && within(s2),
        parallel: false,
        collinear: false,
        point: p1 + v1 * s1,
    }
}

/// Ray-crossing parity test. Invalid polygons contain nothing.
pub fn point_in_polygon(point: Vec2, polygon: &Polygon) -> bool {
    if !polygon.is_valid() {
        return false;
    }

    let mut inside = false;
    for i in 0..polygon.len() {
        let edge = polygon.edge_line(i);
        let (a, b) = (edge.point1, edge.point2);
        if (b.y > point.y) != (a.y > point.y) {
            let crossing_x = (a.x - b.x) * (point.y - b.y) / (a.y - b.y) + b.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_intersect_lines_crossing() {
        let a = Line::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Line::new(Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.0));
        let r = intersect_lines(&a, &b, Boundary::Exclusive);
        assert!(r.intersecting);
        assert!(!r.parallel);
        assert!((r.point.x - 1.0).abs() < EPSILON);
        assert!((r.point.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_intersect_lines_endpoint_only_inclusive() {
        let a = Line::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let b = Line::new(Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(!intersect_lines(&a, &b, Boundary::Exclusive).intersecting);
        assert!(intersect_lines(&a, &b, Boundary::Inclusive).intersecting);
    }

    #[test]
    fn test_intersect_lines_parallel() {
        let a = Line::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let b = Line::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
        let r = intersect_lines(&a, &b, Boundary::Inclusive);
        assert!(r.parallel);
        assert!(!r.collinear);
        assert!(!r.intersecting);
    }

    #[test]
    fn test_intersect_lines_collinear_overlap() {
        let a = Line::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0));
        let b = Line::new(Vec2::new(2.0, 2.0), Vec2::new(5.0, 5.0));
        let r = intersect_lines(&a, &b, Boundary::Exclusive);
        assert!(r.parallel);
        assert!(r.collinear);
        assert!(r.intersecting);
        assert!((r.point.x - -1.0).abs() < EPSILON);
        assert!((r.point.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // U shape: the notch between x=1 and x=2 above y=1 is outside.
        let u = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(0.0, 3.0),
        ]);
        assert!(point_in_polygon(Vec2::new(0.5, 2.0), &u));
        assert!(point_in_polygon(Vec2::new(1.5, 0.5), &u));
        assert!(!point_in_polygon(Vec2::new(1.5, 2.0), &u));
        assert!(!point_in_polygon(Vec2::new(5.0, 0.5), &u));
    }

    #[test]
    fn test_point_in_invalid_polygon() {
        let line = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)]);
        assert!(!point_in_polygon(Vec2::new(1.0, 1.0), &line));
    }
}

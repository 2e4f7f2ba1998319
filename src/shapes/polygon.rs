use crate::collision::intersection::point_in_polygon;
use crate::collision::interval::Interval;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::line::Line;
use super::rect::Rect;

/// Polygon defined by its vertices in order.
///
/// Validity (more than two points) and convexity are recomputed whenever the
/// point list changes, so the narrow phase can trust the flags.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Vec2>", into = "Vec<Vec2>"))]
pub struct Polygon {
    points: Vec<Vec2>,
    valid: bool,
    convex: bool,
}

impl Polygon {
    /// Creates a new polygon from a vector of points. Any number of points is accepted;
    /// fewer than three yields an invalid polygon.
    pub fn new(points: Vec<Vec2>) -> Self {
        let mut polygon = Polygon {
            points,
            valid: false,
            convex: false,
        };
        polygon.refresh();
        polygon
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_convex(&self) -> bool {
        self.convex
    }

    pub fn append(&mut self, point: Vec2) {
        self.points.push(point);
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.refresh();
    }

    pub fn set_points(&mut self, points: Vec<Vec2>) {
        self.points = points;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.valid = self.points.len() > 2;
        self.convex = self.valid && self.check_convex();
    }

    /// Consecutive edge cross products must never change sign; zero crosses are ignored.
    fn check_convex(&self) -> bool {
        let mut direction = 0.0;
        for i in 0..self.points.len() {
            let cross = self.edge(i).cross(self.edge(i + 1));
            if direction == 0.0 {
                direction = cross;
            } else if direction * cross < 0.0 {
                return false;
            }
        }
        true
    }

    /// Vector along edge `i` (indices wrap around).
    pub fn edge(&self, i: usize) -> Vec2 {
        let n = self.points.len();
        if n == 0 {
            return Vec2::ZERO;
        }
        self.points[(i + 1) % n] - self.points[i % n]
    }

    pub fn edge_line(&self, i: usize) -> Line {
        let n = self.points.len();
        if n == 0 {
            return Line::new(Vec2::ZERO, Vec2::ZERO);
        }
        Line::new(self.points[i % n], self.points[(i + 1) % n])
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            area += self.points[i].cross(self.points[(i + 1) % n]);
        }
        (area / 2.0).abs()
    }

    /// Calculates the centroid (center of mass for uniform density) of the polygon.
    pub fn centroid(&self) -> Vec2 {
        let n = self.points.len();
        if n == 0 {
            return Vec2::ZERO;
        }

        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.points[0];

        for i in 1..n.saturating_sub(1) {
            let v2 = self.points[i];
            let v3 = self.points[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            // Collinear or too few points: average the vertices.
            let mut avg = Vec2::ZERO;
            for v in &self.points {
                avg += *v;
            }
            avg / (n as f64)
        } else {
            centroid / signed_area_sum
        }
    }

    /// Returns the unit normal of each edge (left-hand perpendicular of the edge vector).
    pub fn edge_normals(&self) -> Vec<Vec2> {
        (0..self.points.len())
            .map(|i| self.edge(i).perpendicular().normalize())
            .collect()
    }

    pub fn project(&self, axis: Vec2) -> Interval {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            let projection = point.dot(axis);
            min = min.min(projection);
            max = max.max(projection);
        }
        Interval { min, max }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(&self.points).unwrap_or_default()
    }

    /// Ray-crossing parity test; works for non-convex outlines too.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_polygon(point, self)
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.points.iter().map(|p| *p + offset).collect())
    }

    /// Maps every vertex through the transform and recomputes the flags.
    pub fn positioned(&self, transform: &Transform) -> Self {
        Self::new(self.points.iter().map(|p| transform.apply(*p)).collect())
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(points: Vec<Vec2>) -> Self {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ])
    }

    #[test]
    fn test_polygon_new() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert_eq!(polygon.len(), 3);
        assert!(polygon.is_valid());
        assert!(polygon.is_convex());
    }

    #[test]
    fn test_polygon_too_few_vertices_is_invalid() {
        let polygon = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert!(!polygon.is_valid());
        assert!(!polygon.is_convex());
    }

    #[test]
    fn test_polygon_non_convex_detected() {
        // Arrow head with a notch at (1, 0.5).
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.5),
            Vec2::new(2.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert!(polygon.is_valid());
        assert!(!polygon.is_convex());
    }

    #[test]
    fn test_polygon_flags_follow_edits() {
        let mut polygon = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert!(!polygon.is_valid());
        polygon.append(Vec2::new(1.0, 1.0));
        assert!(polygon.is_valid());
        assert!(polygon.is_convex());
        polygon.append(Vec2::new(0.9, 0.1));
        assert!(!polygon.is_convex());
        polygon.reset();
        assert!(polygon.is_empty());
        assert!(!polygon.is_valid());
    }

    #[test]
    fn test_polygon_collinear_crosses_are_ignored() {
        // Square with an extra point in the middle of the bottom edge.
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]);
        assert!(polygon.is_convex());
    }

    #[test]
    fn test_polygon_area_square() {
        assert!((unit_square().area() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_area_triangle() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);
        assert!((polygon.area() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_centroid_square_centered() {
        let centroid = unit_square().centroid();
        assert!(centroid.x.abs() < EPSILON);
        assert!(centroid.y.abs() < EPSILON);
    }

    #[test]
    fn test_polygon_centroid_square_offset() {
        let offset = Vec2::new(10.0, -5.0);
        let polygon = unit_square().translate(offset + Vec2::new(0.5, 0.5));
        let centroid = polygon.centroid();
        let expected_centroid = offset + Vec2::new(0.5, 0.5);
        assert!((centroid.x - expected_centroid.x).abs() < EPSILON);
        assert!((centroid.y - expected_centroid.y).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_centroid_triangle() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
        ]);
        let centroid = polygon.centroid();
        assert!((centroid.x - 1.0).abs() < EPSILON);
        assert!((centroid.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_edge_normals_are_unit_and_perpendicular() {
        let polygon = unit_square();
        let normals = polygon.edge_normals();
        assert_eq!(normals.len(), 4);
        for (i, n) in normals.iter().enumerate() {
            assert!((n.magnitude() - 1.0).abs() < EPSILON);
            assert!(n.dot(polygon.edge(i)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_polygon_edge_wraps() {
        let polygon = unit_square();
        assert_eq!(polygon.edge(3), Vec2::new(0.0, -1.0));
        assert_eq!(polygon.edge_line(3).point2, Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn test_polygon_project_and_bounds() {
        let polygon = unit_square();
        let i = polygon.project(Vec2::X);
        assert!((i.min - -0.5).abs() < EPSILON);
        assert!((i.max - 0.5).abs() < EPSILON);
        assert_eq!(polygon.bounds(), Rect::new(-0.5, -0.5, 1.0, 1.0));
    }

    #[test]
    fn test_polygon_positioned_recomputes() {
        let t = Transform::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), PI);
        let p = unit_square().positioned(&t);
        assert!(p.is_convex());
        assert!((p.area() - 4.0).abs() < EPSILON);
        let c = p.centroid();
        assert!((c.x - 1.0).abs() < EPSILON);
        assert!((c.y - 1.0).abs() < EPSILON);
    }
}

//! Generalized separating axis test over [`Shape`] projections.

use crate::math::vec2::Vec2;
use crate::shapes::Shape;

use super::interval::{interval_intersection, Boundary};
use super::result::CollisionResult;

/// Candidate axes in evaluation order: world X, world Y, the edge normals of
/// `a`, the edge normals of `b`, then the circle axis when one side is a circle.
pub fn candidate_axes(a: &Shape, b: &Shape) -> Vec<Vec2> {
    let mut axes = vec![Vec2::X, Vec2::Y];
    axes.extend(a.axes());
    axes.extend(b.axes());
    if let Some(axis) = circle_axis(a, b).or_else(|| circle_axis(b, a)) {
        axes.push(axis);
    }
    axes
}

/// Axis from a circle's centre toward the nearest vertex of the other shape.
fn circle_axis(circle: &Shape, other: &Shape) -> Option<Vec2> {
    let Shape::Circle(c) = circle else {
        return None;
    };
    let mut closest_vertex_dist_sq = f64::INFINITY;
    let mut closest_vertex = None;
    for vertex in other.vertices() {
        let dist_sq = vertex.distance_squared(c.position);
        if dist_sq < closest_vertex_dist_sq {
            closest_vertex_dist_sq = dist_sq;
            closest_vertex = Some(vertex);
        }
    }
    closest_vertex.map(|v| (v - c.position).normalize())
}

/// Runs the separating axis test. Both shapes must be convex; the caller filters
/// degenerate geometry.
pub fn separating_axis_test(a: &Shape, b: &Shape) -> CollisionResult {
    let mut min_overlap = f64::INFINITY;
    let mut mtv = Vec2::ZERO; // Minimum Translation Vector
    let mut max_gap: f64 = 0.0;
    let mut touching = false;

    for axis in candidate_axes(a, b) {
        // Ensure axis is valid (ignore zero vectors if normalization failed)
        if axis.magnitude_squared() < 1e-10 {
            continue;
        }

        let projection_a = a.project(axis);
        let projection_b = b.project(axis);

        let gap = projection_a.gap(&projection_b);
        if gap > 0.0 {
            max_gap = max_gap.max(gap);
            continue;
        }

        let overlap = interval_intersection(projection_a, projection_b, Boundary::Exclusive);
        if !overlap.overlapping {
            touching = true;
            continue;
        }

        if overlap.translation.abs() < min_overlap {
            min_overlap = overlap.translation.abs();
            mtv = axis * overlap.translation;
        }
    }

    if max_gap > 0.0 {
        CollisionResult::separated(max_gap)
    } else if touching {
        CollisionResult::separated(0.0)
    } else {
        CollisionResult::overlap(mtv)
    }
}

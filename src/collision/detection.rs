use std::cmp::Ordering;

use tracing::debug;

use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Line, Rect, Segment, Shape};

use super::interval::{interval_intersection, value_in_interval, Boundary, Interval};
use super::result::CollisionResult;
use super::sat::separating_axis_test;

/// Narrow-phase test between any two shapes.
///
/// The penetration of the result moves `a` out of `b`. Each unordered pair of
/// kinds has one implementation; the reversed order returns its negation.
/// Same-kind pairs run in [`Shape::total_cmp`] order, so equal escape
/// distances still negate when the arguments swap.
pub fn test(a: &Shape, b: &Shape) -> CollisionResult {
    if a.is_degenerate() || b.is_degenerate() {
        debug!(a = ?a.kind(), b = ?b.kind(), "degenerate shape in narrow phase");
        return CollisionResult::none();
    }

    if a.kind() == b.kind() && a.total_cmp(b) == Ordering::Greater {
        -dispatch(b, a)
    } else {
        dispatch(a, b)
    }
}

fn dispatch(a: &Shape, b: &Shape) -> CollisionResult {
    match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => check_point_point(*p, *q),
        (Shape::Point(p), Shape::Segment(s)) => check_point_segment(*p, s),
        (Shape::Point(p), Shape::Rect(r)) => check_point_rect(*p, r),
        (Shape::Point(p), Shape::Circle(c)) => check_point_circle(*p, c),
        (Shape::Point(p), Shape::Line(l)) => check_point_line(*p, l),
        (Shape::Point(_), Shape::Polygon(_)) => separating_axis_test(a, b),

        (Shape::Segment(s), Shape::Point(p)) => -check_point_segment(*p, s),
        (Shape::Segment(s1), Shape::Segment(s2)) => check_segment_segment(s1, s2),
        (Shape::Segment(s), Shape::Rect(r)) => check_segment_rect(s, r),
        (Shape::Segment(s), Shape::Circle(c)) => check_segment_circle(s, c),
        (Shape::Segment(_), Shape::Line(_) | Shape::Polygon(_)) => separating_axis_test(a, b),

        (Shape::Rect(r), Shape::Point(p)) => -check_point_rect(*p, r),
        (Shape::Rect(r), Shape::Segment(s)) => -check_segment_rect(s, r),
        (Shape::Rect(r1), Shape::Rect(r2)) => check_rect_rect(r1, r2),
        (Shape::Rect(r), Shape::Circle(c)) => check_rect_circle(r, c),
        (Shape::Rect(_), Shape::Line(_) | Shape::Polygon(_)) => separating_axis_test(a, b),

        (Shape::Circle(c), Shape::Point(p)) => -check_point_circle(*p, c),
        (Shape::Circle(c), Shape::Segment(s)) => -check_segment_circle(s, c),
        (Shape::Circle(c), Shape::Rect(r)) => -check_rect_circle(r, c),
        (Shape::Circle(c1), Shape::Circle(c2)) => check_circle_circle(c1, c2),
        (Shape::Circle(_), Shape::Line(_) | Shape::Polygon(_)) => separating_axis_test(a, b),

        (Shape::Line(l), Shape::Point(p)) => -check_point_line(*p, l),
        (Shape::Line(_), Shape::Segment(_) | Shape::Rect(_) | Shape::Circle(_)) => {
            -separating_axis_test(b, a)
        }
        (Shape::Line(_), Shape::Line(_) | Shape::Polygon(_)) => separating_axis_test(a, b),

        (Shape::Polygon(_), Shape::Point(_)) => -separating_axis_test(b, a),
        (
            Shape::Polygon(_),
            Shape::Segment(_) | Shape::Rect(_) | Shape::Circle(_) | Shape::Line(_),
        ) => -separating_axis_test(b, a),
        (Shape::Polygon(_), Shape::Polygon(_)) => separating_axis_test(a, b),
    }
}

/// Boolean view of [`test`]. `Boundary::Inclusive` also accepts touching shapes.
pub fn intersects(a: &Shape, b: &Shape, boundary: Boundary) -> bool {
    let result = test(a, b);
    match boundary {
        Boundary::Exclusive => result.overlapping(),
        Boundary::Inclusive => result.overlapping() || result.is_touching(),
    }
}

/// Resolution along the axis with the smaller magnitude; ties keep x.
fn pick_axis(x: f64, y: f64) -> Vec2 {
    if x.abs() <= y.abs() {
        Vec2::new(x, 0.0)
    } else {
        Vec2::new(0.0, y)
    }
}

/// Per-axis composition for shapes that are exactly their bounding boxes.
fn check_axis_aligned(
    a_x: Interval,
    a_y: Interval,
    b_x: Interval,
    b_y: Interval,
) -> CollisionResult {
    let x = interval_intersection(a_x, b_x, Boundary::Exclusive);
    let y = interval_intersection(a_y, b_y, Boundary::Exclusive);
    if x.overlapping && y.overlapping {
        CollisionResult::overlap(pick_axis(x.translation, y.translation))
    } else {
        CollisionResult::separated(a_x.gap(&b_x).hypot(a_y.gap(&b_y)))
    }
}

pub fn check_point_point(p: Vec2, q: Vec2) -> CollisionResult {
    CollisionResult::separated(p.distance(q))
}

/// A point has no area to resolve against a segment; only the distance is reported.
pub fn check_point_segment(point: Vec2, segment: &Segment) -> CollisionResult {
    CollisionResult::separated(segment.closest_point(point).distance(point))
}

pub fn check_point_rect(point: Vec2, rect: &Rect) -> CollisionResult {
    check_axis_aligned(
        Interval::point(point.x),
        Interval::point(point.y),
        rect.horizontal(),
        rect.vertical(),
    )
}

pub fn check_point_circle(point: Vec2, circle: &Circle) -> CollisionResult {
    let offset = point - circle.position;
    let distance = offset.magnitude();
    if distance < circle.radius {
        let penetration = if distance > 0.0 {
            offset.resize(circle.radius - distance)
        } else {
            // Point exactly at the centre: leave along +y.
            Vec2::Y * circle.radius
        };
        CollisionResult::overlap(penetration)
    } else {
        CollisionResult::separated(distance - circle.radius)
    }
}

pub fn check_point_line(point: Vec2, line: &Line) -> CollisionResult {
    CollisionResult::separated(line.distance_to_point(point))
}

pub fn check_segment_segment(s1: &Segment, s2: &Segment) -> CollisionResult {
    check_axis_aligned(s1.extent_x(), s1.extent_y(), s2.extent_x(), s2.extent_y())
}

pub fn check_segment_rect(segment: &Segment, rect: &Rect) -> CollisionResult {
    check_axis_aligned(segment.extent_x(), segment.extent_y(), rect.horizontal(), rect.vertical())
}

pub fn check_rect_rect(r1: &Rect, r2: &Rect) -> CollisionResult {
    check_axis_aligned(r1.horizontal(), r1.vertical(), r2.horizontal(), r2.vertical())
}

/// Segment against circle: inside the segment's range it escapes either across the
/// circle or along the chord it cuts; past the ends the nearest endpoint is resolved
/// like a point.
pub fn check_segment_circle(segment: &Segment, circle: &Circle) -> CollisionResult {
    let closest = segment.closest_point(circle.position);
    let distance = closest.distance(circle.position);
    if distance >= circle.radius {
        return CollisionResult::separated(distance - circle.radius);
    }

    let (along, across) = if segment.vertical {
        (circle.position.y, circle.position.x)
    } else {
        (circle.position.x, circle.position.y)
    };
    let range = segment.range();
    if !range.contains(along, Boundary::Inclusive) {
        // `closest` is the nearest endpoint here.
        return check_point_circle(closest, circle);
    }

    let offset = segment.offset();
    let across_distance = (across - offset).abs();
    let depth = circle.radius - across_distance;
    let across_shift = if across < offset { depth } else { -depth };

    let half_chord = (circle.radius * circle.radius - across_distance * across_distance)
        .max(0.0)
        .sqrt();
    let chord = Interval::new(along - half_chord, along + half_chord);
    let along_shift = interval_intersection(range, chord, Boundary::Exclusive).translation;

    let penetration = if segment.vertical {
        pick_axis(across_shift, along_shift)
    } else {
        pick_axis(along_shift, across_shift)
    };
    CollisionResult::overlap(penetration)
}

/// Rect against circle: face regions resolve through the radius-expanded ranges,
/// corner regions as the nearest corner against the circle.
pub fn check_rect_circle(rect: &Rect, circle: &Circle) -> CollisionResult {
    let horizontal = rect.horizontal();
    let vertical = rect.vertical();
    let center = circle.position;

    let strictly_inside = horizontal.contains(center.x, Boundary::Exclusive)
        && vertical.contains(center.y, Boundary::Exclusive);
    let closest = Vec2::new(
        center.x.clamp(horizontal.min, horizontal.max),
        center.y.clamp(vertical.min, vertical.max),
    );
    let distance = closest.distance(center);
    if !strictly_inside && distance >= circle.radius {
        return CollisionResult::separated(distance - circle.radius);
    }

    // Rect translations: the circle centre leaving the radius-expanded ranges, negated.
    let expanded_x = horizontal.expand(circle.radius);
    let expanded_y = vertical.expand(circle.radius);
    let escape_x = || -value_in_interval(center.x, expanded_x, Boundary::Exclusive).value();
    let escape_y = || -value_in_interval(center.y, expanded_y, Boundary::Exclusive).value();

    match (
        horizontal.contains(center.x, Boundary::Inclusive),
        vertical.contains(center.y, Boundary::Inclusive),
    ) {
        (true, true) => CollisionResult::overlap(pick_axis(escape_x(), escape_y())),
        (true, false) => CollisionResult::overlap(Vec2::new(0.0, escape_y())),
        (false, true) => CollisionResult::overlap(Vec2::new(escape_x(), 0.0)),
        // `closest` is the nearest corner here.
        (false, false) => check_point_circle(closest, circle),
    }
}

pub fn check_circle_circle(c1: &Circle, c2: &Circle) -> CollisionResult {
    let center_to_center = c1.position - c2.position;
    let distance = center_to_center.magnitude();
    let radii_sum = c1.radius + c2.radius;

    if distance < radii_sum {
        let penetration = if distance > 0.0 {
            center_to_center.resize(radii_sum - distance)
        } else {
            // Circles are exactly on top of each other, push along +y
            Vec2::Y * radii_sum
        };
        CollisionResult::overlap(penetration)
    } else {
        CollisionResult::separated(distance - radii_sum)
    }
}

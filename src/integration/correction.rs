//! Pushing bodies back out of walls and other bodies.

use crate::collision::interval::{value_in_interval, Boundary};
use crate::collision::CollisionResult;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::{Segment, Shape};

/// Runs `handler` when the two bodies overlap. Returns whether it ran.
pub fn handle_collision<F>(body: &mut Body, other: &mut Body, handler: F) -> bool
where
    F: FnOnce(CollisionResult, &mut Body, &mut Body),
{
    let result = body.test(other);
    if result.overlapping() {
        handler(result, body, other);
        true
    } else {
        false
    }
}

/// Tests `body` against every body in `others`, calling `handler` for each overlap.
/// Returns the number of overlaps handled.
pub fn handle_all_collisions<'a, I, F>(body: &mut Body, others: I, mut handler: F) -> usize
where
    I: IntoIterator<Item = &'a mut Body>,
    F: FnMut(CollisionResult, &mut Body, &mut Body),
{
    let mut handled = 0;
    for other in others {
        if handle_collision(body, other, &mut handler) {
            handled += 1;
        }
    }
    handled
}

/// Moves `body` by the full penetration vector of `result`.
pub fn move_out_of_collision(result: &CollisionResult, body: &mut Body) -> Vec2 {
    let shift = result.penetration();
    body.translate(shift);
    shift
}

/// Resolves `body` against a single static wall.
///
/// The body always leaves across the wall: its extent on the wall's
/// perpendicular axis is pushed off the wall offset through the nearer side,
/// even when the shortest escape would run along the wall past its end. The
/// shift only applies when it exceeds `tolerance`. The velocity component
/// heading into the wall is replaced by the body material's rebound.
pub fn move_out_of_wall(body: &mut Body, wall: &Segment, tolerance: f64) -> Vec2 {
    if !body.test_shape(&Shape::Segment(*wall)).overlapping() {
        return Vec2::ZERO;
    }

    let axis = if wall.vertical { Vec2::X } else { Vec2::Y };
    let extent = body.shape().project(axis);
    // Translation of the wall offset out of the extent; the body moves the other way.
    let depth = -value_in_interval(wall.offset(), extent, Boundary::Exclusive).value();
    if depth.abs() <= tolerance {
        return Vec2::ZERO;
    }

    let speed = body.velocity.dot(axis);
    if speed * depth < 0.0 {
        let rebound = body.material.rebound(speed);
        body.velocity += axis * (rebound - speed);
    }
    let shift = axis * depth;
    body.translate(shift);
    shift
}

/// Resolves `body` against each wall in turn and returns the total shift.
pub fn move_out_of_walls(body: &mut Body, walls: &[Segment], tolerance: f64) -> Vec2 {
    walls
        .iter()
        .fold(Vec2::ZERO, |total, wall| total + move_out_of_wall(body, wall, tolerance))
}

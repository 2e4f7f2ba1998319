use crate::collision::{self, CollisionResult};
use crate::math::{Transform, Vec2};
use crate::shapes::Shape;

/// Whether a collider's world-space copy reflects a pose yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderState {
    /// No pose applied; the positioned copy equals the local shape.
    Uninitialized,
    /// The positioned copy reflects the last pose passed to `update`.
    Positioned,
}

/// A local-space shape plus its cached world-space copy.
///
/// A fixed collider already lives in world space and ignores pose updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    local: Shape,
    positioned: Shape,
    pose: Option<Transform>,
    fixed: bool,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self {
            positioned: shape.clone(),
            local: shape,
            pose: None,
            fixed: false,
        }
    }

    /// A collider whose shape is given in world coordinates (static walls).
    pub fn fixed(shape: Shape) -> Self {
        Self {
            fixed: true,
            ..Self::new(shape)
        }
    }

    pub fn update(&mut self, position: Vec2, scale: Vec2, rotation: f64) {
        self.update_transform(&Transform::new(position, scale, rotation));
    }

    /// Recomputes the positioned copy from the local shape.
    pub fn update_transform(&mut self, transform: &Transform) {
        if self.fixed {
            return;
        }
        self.positioned = self.local.positioned(transform);
        self.pose = Some(*transform);
    }

    /// Tests the cached positioned shapes. Callers keep both caches fresh.
    pub fn test(&self, other: &Collider) -> CollisionResult {
        collision::test(&self.positioned, &other.positioned)
    }

    pub fn test_shape(&self, shape: &Shape) -> CollisionResult {
        collision::test(&self.positioned, shape)
    }

    /// The local-space shape.
    pub fn shape(&self) -> &Shape {
        &self.local
    }

    /// The world-space shape.
    pub fn positioned(&self) -> &Shape {
        &self.positioned
    }

    pub fn state(&self) -> ColliderState {
        if self.pose.is_some() {
            ColliderState::Positioned
        } else {
            ColliderState::Uninitialized
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// True when the positioned copy reflects `transform`. Fixed colliders are always current.
    pub fn is_positioned_for(&self, transform: &Transform) -> bool {
        self.fixed || self.pose.as_ref() == Some(transform)
    }

    /// Replaces the local shape. A non-fixed collider drops back to `Uninitialized`.
    pub fn set_shape(&mut self, shape: Shape) {
        self.positioned = shape.clone();
        self.local = shape;
        if !self.fixed {
            self.pose = None;
        }
    }
}

impl From<Shape> for Collider {
    fn from(shape: Shape) -> Self {
        Collider::new(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rect};
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_is_uninitialized() {
        let collider = Collider::new(Shape::Rect(Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert_eq!(collider.state(), ColliderState::Uninitialized);
        assert_eq!(collider.shape(), collider.positioned());
    }

    #[test]
    fn test_update_positions_shape() {
        let mut collider = Collider::new(Shape::Rect(Rect::new(0.0, 0.0, 2.0, 2.0)));
        collider.update(Vec2::new(10.0, 5.0), Vec2::ONE, 0.0);
        assert_eq!(collider.state(), ColliderState::Positioned);
        assert_eq!(collider.positioned(), &Shape::Rect(Rect::new(10.0, 5.0, 2.0, 2.0)));
        assert_eq!(collider.shape(), &Shape::Rect(Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert!(collider.is_positioned_for(&Transform::from_position(Vec2::new(10.0, 5.0))));
        assert!(!collider.is_positioned_for(&Transform::identity()));
    }

    #[test]
    fn test_fixed_ignores_updates() {
        let wall = Shape::Rect(Rect::new(5.0, 0.0, 1.0, 10.0));
        let mut collider = Collider::fixed(wall.clone());
        collider.update(Vec2::new(100.0, 100.0), Vec2::ONE, 0.0);
        assert_eq!(collider.positioned(), &wall);
        assert_eq!(collider.state(), ColliderState::Uninitialized);
        assert!(collider.is_positioned_for(&Transform::from_position(Vec2::new(3.0, 3.0))));
    }

    #[test]
    fn test_set_shape_resets_state() {
        let mut collider = Collider::new(Shape::Circle(Circle::new(Vec2::ZERO, 1.0)));
        collider.update(Vec2::new(1.0, 1.0), Vec2::ONE, 0.0);
        collider.set_shape(Shape::Circle(Circle::new(Vec2::ZERO, 2.0)));
        assert_eq!(collider.state(), ColliderState::Uninitialized);
        assert_eq!(collider.positioned(), &Shape::Circle(Circle::new(Vec2::ZERO, 2.0)));
    }

    #[test]
    fn test_collider_pair_uses_positioned_shapes() {
        let mut a = Collider::new(Shape::Circle(Circle::new(Vec2::ZERO, 5.0)));
        let mut b = Collider::new(Shape::Circle(Circle::new(Vec2::ZERO, 5.0)));
        a.update(Vec2::ZERO, Vec2::ONE, 0.0);
        b.update(Vec2::new(9.0, 0.0), Vec2::ONE, 0.0);
        let result = a.test(&b);
        assert!(result.overlapping());
        assert!((result.penetration().x - -1.0).abs() < EPSILON);
        assert!(result.penetration().y.abs() < EPSILON);

        let result = b.test_shape(a.positioned());
        assert!((result.penetration().x - 1.0).abs() < EPSILON);
    }
}

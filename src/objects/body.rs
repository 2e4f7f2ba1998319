use crate::collision::CollisionResult;
use crate::common::{KinematicsConfig, Material};
use crate::integration::integrator::{self, StepReport};
use crate::math::{Transform, Vec2};
use crate::shapes::Shape;

use super::collider::Collider;

/// A moving (or static) object that exclusively owns its collider.
///
/// Every transform mutation goes through a setter that re-positions the
/// collider, so tests against a body always see its current pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    transform: Transform,
    pub velocity: Vec2,
    mass: f64,
    pub material: Material,
    kinematic: bool,
    collider: Collider,
}

impl Body {
    /// Creates a kinematic body of unit mass with its local shape placed at `position`.
    pub fn new(shape: Shape, position: Vec2) -> Self {
        let transform = Transform::from_position(position);
        let mut collider = Collider::new(shape);
        collider.update_transform(&transform);
        Self {
            transform,
            velocity: Vec2::ZERO,
            mass: 1.0,
            material: Material::default(),
            kinematic: true,
            collider,
        }
    }

    /// Creates a body the integrator never moves.
    pub fn new_static(shape: Shape, position: Vec2) -> Self {
        Self {
            kinematic: false,
            mass: 0.0,
            ..Self::new(shape, position)
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.set_mass(mass);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
        self.sync_collider();
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.transform.position += offset;
        self.sync_collider();
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.transform.scale = scale;
        self.sync_collider();
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.transform.rotation = rotation;
        self.sync_collider();
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.collider.set_shape(shape);
        self.sync_collider();
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Non-positive or non-finite masses make the body massless.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = if mass.is_finite() && mass > 0.0 { mass } else { 0.0 };
    }

    pub fn inv_mass(&self) -> f64 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    pub fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    pub fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }

    /// Applies an instantaneous change of momentum. Massless bodies ignore it.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass();
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// The body's shape in world space.
    pub fn shape(&self) -> &Shape {
        self.collider.positioned()
    }

    pub fn test(&self, other: &Body) -> CollisionResult {
        other.debug_assert_synced();
        self.test_collider(&other.collider)
    }

    pub fn test_collider(&self, collider: &Collider) -> CollisionResult {
        self.debug_assert_synced();
        self.collider.test(collider)
    }

    pub fn test_shape(&self, shape: &Shape) -> CollisionResult {
        self.debug_assert_synced();
        self.collider.test_shape(shape)
    }

    /// Advances the body by `dt` seconds plus an extra displacement `step`,
    /// calling `on_substep` after every substep. See [`integrator::integrate`].
    pub fn integrate<F>(
        &mut self,
        dt: f64,
        step: Vec2,
        config: &KinematicsConfig,
        on_substep: F,
    ) -> StepReport
    where
        F: FnMut(&mut Body, f64) -> Vec2,
    {
        integrator::integrate(self, dt, step, config, on_substep)
    }

    fn sync_collider(&mut self) {
        self.collider.update_transform(&self.transform);
    }

    fn debug_assert_synced(&self) {
        debug_assert!(
            self.collider.is_positioned_for(&self.transform),
            "collider out of sync with body transform"
        );
    }
}

use tracing::debug;

use crate::common::KinematicsConfig;
use crate::integration::{correction, integrator::StepReport};
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::{Rect, Segment};

use super::platforms::merge_static_segments;
use super::room::Room;

/// Collects rooms and loose platforms before the wall table is frozen.
#[derive(Debug, Clone, Default)]
pub struct WorldBuilder {
    config: KinematicsConfig,
    rooms: Vec<Room>,
    platforms: Vec<Segment>,
}

impl WorldBuilder {
    pub fn new(config: KinematicsConfig) -> Self {
        Self {
            config,
            rooms: Vec::new(),
            platforms: Vec::new(),
        }
    }

    /// Adds a room; its four edges join the wall table.
    pub fn add_room(mut self, rect: Rect) -> Self {
        let room = Room::new(rect);
        self.platforms.extend(room.boundary_segments());
        self.rooms.push(room);
        self
    }

    pub fn add_platform(mut self, segment: Segment) -> Self {
        self.platforms.push(segment);
        self
    }

    /// Merges the wall table once and freezes it.
    pub fn build(self) -> World {
        let mut platforms = self.platforms;
        merge_static_segments(&mut platforms, self.config.merge_tolerance());
        debug!(rooms = self.rooms.len(), platforms = platforms.len(), "world built");
        World {
            config: self.config,
            rooms: self.rooms,
            platforms,
        }
    }
}

/// Static level geometry plus the kinematics settings used to move bodies through it.
///
/// The platform table is read-only once built.
#[derive(Debug, Clone)]
pub struct World {
    config: KinematicsConfig,
    rooms: Vec<Room>,
    platforms: Vec<Segment>,
}

impl World {
    pub fn builder(config: KinematicsConfig) -> WorldBuilder {
        WorldBuilder::new(config)
    }

    pub fn platforms(&self) -> &[Segment] {
        &self.platforms
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn is_point_inside_room(&self, point: Vec2) -> bool {
        self.rooms.iter().any(|room| room.is_point_inside(point))
    }

    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    /// Integrates `body` and pushes it out of the walls after every substep.
    pub fn step_body(&self, body: &mut Body, dt: f64, step: Vec2) -> StepReport {
        let tolerance = self.config.penetration_tolerance();
        let platforms = &self.platforms;
        body.integrate(dt, step, &self.config, |body, _| {
            correction::move_out_of_walls(body, platforms, tolerance)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Shape};
    const EPSILON: f64 = 1e-9;

    fn default_test_shape() -> Shape {
        Shape::Rect(Rect::new(0.0, 0.0, 2.0, 2.0))
    }

    fn no_gravity() -> KinematicsConfig {
        KinematicsConfig::new(Vec2::ZERO, 0.0, 0.5).unwrap()
    }

    #[test]
    fn test_world_new() {
        let world = WorldBuilder::new(KinematicsConfig::default()).build();
        assert!(world.platforms().is_empty());
        assert!(world.rooms().is_empty());
        assert_eq!(world.config().gravity(), Vec2::new(0.0, 981.0));
    }

    #[test]
    fn test_add_room_contributes_edges() {
        let world = World::builder(no_gravity()).add_room(Rect::new(0.0, 0.0, 100.0, 50.0)).build();
        assert_eq!(world.rooms().len(), 1);
        assert_eq!(world.platforms().len(), 4);
        assert!(world.is_point_inside_room(Vec2::new(50.0, 25.0)));
        assert!(!world.is_point_inside_room(Vec2::new(150.0, 25.0)));
    }

    #[test]
    fn test_adjacent_rooms_open_shared_wall() {
        let world = World::builder(no_gravity())
            .add_room(Rect::new(0.0, 0.0, 100.0, 50.0))
            .add_room(Rect::new(100.0, 0.0, 100.0, 50.0))
            .build();
        // Both right/left walls on x = 100 cancel out entirely.
        assert_eq!(world.platforms().len(), 6);
        assert!(world
            .platforms()
            .iter()
            .all(|s| !(s.vertical && (s.offset() - 100.0).abs() < EPSILON)));
    }

    #[test]
    fn test_step_gravity() {
        let config = KinematicsConfig::new(Vec2::new(0.0, -10.0), 0.0, 100.0).unwrap();
        let world = World::builder(config).build();
        let mut body = Body::new(default_test_shape(), Vec2::ZERO);

        world.step_body(&mut body, 0.1, Vec2::ZERO);

        assert!((body.velocity.x - 0.0).abs() < EPSILON);
        assert!((body.velocity.y - -1.0).abs() < EPSILON);
        assert!((body.position().y - -0.1).abs() < EPSILON);
    }

    #[test]
    fn test_step_no_gravity_on_static() {
        let world = World::builder(KinematicsConfig::default()).build();
        let mut body = Body::new_static(default_test_shape(), Vec2::ZERO);
        let initial_state = body.clone();
        world.step_body(&mut body, 0.1, Vec2::ZERO);
        assert_eq!(body, initial_state);
    }

    #[test]
    fn test_body_lands_on_floor() {
        let config = KinematicsConfig::new(Vec2::new(0.0, 100.0), 0.0, 0.5).unwrap();
        let world = World::builder(config).add_room(Rect::new(-50.0, -50.0, 100.0, 60.0)).build();
        let mut body = Body::new(Shape::Circle(Circle::new(Vec2::ZERO, 1.0)), Vec2::new(0.0, 5.0));

        for _ in 0..120 {
            world.step_body(&mut body, 1.0 / 60.0, Vec2::ZERO);
        }

        // Floor at y = 10; the circle rests on it.
        assert!(body.position().y <= 9.0 + config.penetration_tolerance() + EPSILON);
        assert!(body.position().y > 8.9);
        assert!(world.is_point_inside_room(body.position()));
    }
}

//! 2D collision detection and kinematic resolution.
//!
//! Shapes are tested pairwise through [`collision::test`]; bodies own a collider
//! and are moved through a [`World`] of static walls in bounded substeps.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{intersects, test, Boundary, CollisionResult};
pub use common::{ConfigError, KinematicsConfig, Material};
pub use integration::StepReport;
pub use math::{Transform, Vec2};
pub use objects::{Actor, ActorCollection, ActorId, Body, Collider, Lifecycle};
pub use shapes::{Circle, Line, Polygon, Rect, Segment, Shape, ShapeKind};
pub use world::{Room, World, WorldBuilder};

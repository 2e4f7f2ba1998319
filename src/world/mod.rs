pub mod physics_world;
pub mod platforms;
pub mod room;

pub use physics_world::{World, WorldBuilder};
pub use platforms::merge_static_segments;
pub use room::Room;

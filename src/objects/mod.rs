pub mod body;
pub mod collection;
pub mod collider;

pub use body::Body;
pub use collection::{Actor, ActorCollection, ActorId, FrameContext, Lifecycle};
pub use collider::{Collider, ColliderState};

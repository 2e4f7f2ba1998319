//! Homogeneous sets of actors that update, collide and despawn together.

use crate::collision::CollisionResult;
use crate::integration::correction::move_out_of_collision;
use crate::math::{Transform, Vec2};
use crate::world::World;

use super::body::Body;
use super::collider::Collider;

/// Stable handle to an actor inside an [`ActorCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(u64);

/// What an actor wants after its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Keep,
    Despawn,
}

/// Per-frame inputs passed to every actor.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub world: &'a World,
    pub dt: f64,
}

/// Anything that owns a body and updates once per frame.
pub trait Actor {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn update(&mut self, frame: &FrameContext) -> Lifecycle;
}

impl Actor for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }

    /// Falls under the world's kinematics and stays out of its walls.
    fn update(&mut self, frame: &FrameContext) -> Lifecycle {
        frame.world.step_body(self, frame.dt, Vec2::ZERO);
        Lifecycle::Keep
    }
}

/// Owns actors of one type. Ids are never reused.
#[derive(Debug, Clone)]
pub struct ActorCollection<T> {
    // Sorted by id: ids are handed out in increasing order and removal keeps order.
    actors: Vec<(ActorId, T)>,
    next_id: u64,
}

impl<T> Default for ActorCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ActorCollection<T> {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            next_id: 0,
        }
    }

    pub fn spawn(&mut self, actor: T) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.push((id, actor));
        id
    }

    pub fn despawn(&mut self, id: ActorId) -> Option<T> {
        let index = self.index_of(id)?;
        Some(self.actors.remove(index).1)
    }

    pub fn get(&self, id: ActorId) -> Option<&T> {
        self.index_of(id).map(|index| &self.actors[index].1)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        Some(&mut self.actors[index].1)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &T)> {
        self.actors.iter().map(|(id, actor)| (*id, actor))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut T)> {
        self.actors.iter_mut().map(|(id, actor)| (*id, actor))
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Keeps only the actors for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(ActorId, &mut T) -> bool,
    {
        self.actors.retain_mut(|(id, actor)| keep(*id, actor));
    }

    fn index_of(&self, id: ActorId) -> Option<usize> {
        self.actors.binary_search_by_key(&id, |(id, _)| *id).ok()
    }
}

impl<T: Actor> ActorCollection<T> {
    /// Updates every actor once, then removes those that asked to despawn.
    /// Returns the number removed.
    pub fn update_all(&mut self, world: &World, dt: f64) -> usize {
        let frame = FrameContext { world, dt };
        let mut despawned = Vec::new();
        for (id, actor) in self.actors.iter_mut() {
            if actor.update(&frame) == Lifecycle::Despawn {
                despawned.push(*id);
            }
        }
        if !despawned.is_empty() {
            self.actors.retain(|(id, _)| !despawned.contains(id));
        }
        despawned.len()
    }

    /// Visits the pose of every actor, in spawn order.
    pub fn for_each_transform<F>(&self, mut visit: F)
    where
        F: FnMut(ActorId, &Transform),
    {
        for (id, actor) in &self.actors {
            visit(*id, actor.body().transform());
        }
    }

    /// Tests every actor against `collider` and calls `handler` for each overlap.
    /// Returns the number of overlaps.
    pub fn handle_collisions<F>(&mut self, collider: &Collider, mut handler: F) -> usize
    where
        F: FnMut(CollisionResult, ActorId, &mut T),
    {
        let mut handled = 0;
        for (id, actor) in self.actors.iter_mut() {
            let result = actor.body().test_collider(collider);
            if result.overlapping() {
                handler(result, *id, actor);
                handled += 1;
            }
        }
        handled
    }

    /// Pushes every overlapping actor out of `collider` by its penetration.
    /// Returns the number of actors moved.
    pub fn resolve_collisions(&mut self, collider: &Collider) -> usize {
        self.handle_collisions(collider, |result, _, actor| {
            move_out_of_collision(&result, actor.body_mut());
        })
    }
}

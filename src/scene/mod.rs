use std::collections::{BTreeMap, VecDeque};

use egui::{Color32, Pos2, Rect, Vec2};

mod actor;
mod animation;
mod debug;
mod draggable;
mod drop_search;
mod drop_target;
mod geometry;
mod input;
mod options;
#[cfg(feature = "persistence")]
mod snapshot;
mod types;
mod view;

#[cfg(test)]
mod model_tests;

pub use actor::{Actor, ActorId, ActorKind};
pub use animation::{AnimationCommand, Easing};
pub use draggable::{DragHooks, Draggable, NoHooks};
pub use drop_target::DropTarget;
pub use options::SceneOptions;
#[cfg(feature = "persistence")]
pub use snapshot::{
    ActorKindSnapshot, ActorSnapshot, SCENE_SNAPSHOT_VERSION, SceneSnapshot, SnapshotError,
};
pub use types::{ButtonId, DragPhase, PointerEvent, PointerId};
pub use view::SceneView;

use animation::Animator;
use geometry::bounds_overlap;

/// A 2D stage of actors with drag-and-drop between draggables and drop targets.
///
/// The scene owns its actors and hands out [`ActorId`] handles. It also keeps:
/// - the z-order (back to front), used for hit testing and painting,
/// - an ordered registry of drop targets, walked by every release,
/// - the animator that runs lift/settle/slide tweens,
/// - the pointer captures of drags in progress.
#[derive(Debug)]
pub struct Scene {
    pub options: SceneOptions,

    actors: BTreeMap<ActorId, Actor>,
    z_order: Vec<ActorId>,
    drop_targets: Vec<ActorId>,
    next_actor_serial: u64,

    captures: ahash::HashMap<PointerId, ActorId>,
    animator: Animator,

    debug_log: VecDeque<String>,
    debug_frame: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneOptions::default())
    }
}

impl Scene {
    pub fn new(options: SceneOptions) -> Self {
        Self {
            options,
            actors: BTreeMap::new(),
            z_order: Vec::new(),
            drop_targets: Vec::new(),
            next_actor_serial: 1,
            captures: Default::default(),
            animator: Animator::default(),
            debug_log: VecDeque::new(),
            debug_frame: 0,
        }
    }

    fn insert(&mut self, actor: Actor) -> ActorId {
        let id = ActorId::from_u64(self.next_actor_serial);
        self.next_actor_serial += 1;
        if actor.as_drop_target().is_some() {
            self.drop_targets.push(id);
        }
        self.actors.insert(id, actor);
        self.z_order.push(id);
        id
    }

    /// Add an actor that takes no part in drag-and-drop. New actors go on top.
    pub fn add_actor(&mut self, position: Pos2, size: Vec2) -> ActorId {
        self.insert(Actor::new(position, size, ActorKind::Plain))
    }

    pub fn add_draggable(&mut self, position: Pos2, size: Vec2) -> ActorId {
        self.insert(Actor::new(
            position,
            size,
            ActorKind::Draggable(Draggable::default()),
        ))
    }

    /// Add a drop target; it joins the end of the drop-target registry.
    pub fn add_drop_target(&mut self, position: Pos2, size: Vec2) -> ActorId {
        self.insert(Actor::new(
            position,
            size,
            ActorKind::DropTarget(DropTarget::default()),
        ))
    }

    /// Remove an actor. Any drag it was part of ends without calling hooks, and draggables that
    /// were dropped on it stop reporting it as their drop target.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let actor = self.actors.remove(&id)?;
        self.z_order.retain(|&x| x != id);
        self.drop_targets.retain(|&x| x != id);
        self.captures.retain(|_, &mut captured| captured != id);
        self.animator.forget(id);
        Some(actor)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// All actors, back to front.
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
        self.z_order
            .iter()
            .filter_map(|&id| self.actors.get(&id).map(|a| (id, a)))
    }

    /// Actor handles, back to front.
    pub fn z_order(&self) -> &[ActorId] {
        &self.z_order
    }

    pub fn bring_to_front(&mut self, id: ActorId) {
        if !self.actors.contains_key(&id) {
            return;
        }
        self.z_order.retain(|&x| x != id);
        self.z_order.push(id);
    }

    pub fn position(&self, id: ActorId) -> Option<Pos2> {
        self.actors.get(&id).map(|a| a.position)
    }

    pub fn set_position(&mut self, id: ActorId, position: Pos2) {
        if let Some(a) = self.actors.get_mut(&id) {
            a.position = position;
        }
    }

    /// Relative move.
    pub fn move_by(&mut self, id: ActorId, delta: Vec2) {
        if let Some(a) = self.actors.get_mut(&id) {
            a.position += delta;
        }
    }

    pub fn size(&self, id: ActorId) -> Option<Vec2> {
        self.actors.get(&id).map(|a| a.size)
    }

    pub fn set_size(&mut self, id: ActorId, size: Vec2) {
        if let Some(a) = self.actors.get_mut(&id) {
            a.size = size;
        }
    }

    pub fn bounds(&self, id: ActorId) -> Option<Rect> {
        self.actors.get(&id).map(Actor::bounds)
    }

    /// True if both actors exist and their bounds share a region of positive area.
    pub fn overlaps(&self, a: ActorId, b: ActorId) -> bool {
        match (self.bounds(a), self.bounds(b)) {
            (Some(a), Some(b)) => bounds_overlap(a, b),
            _ => false,
        }
    }

    pub fn set_label(&mut self, id: ActorId, label: impl Into<String>) {
        if let Some(a) = self.actors.get_mut(&id) {
            a.label = Some(label.into());
        }
    }

    pub fn set_fill(&mut self, id: ActorId, fill: Color32) {
        if let Some(a) = self.actors.get_mut(&id) {
            a.fill = fill;
        }
    }
}

use egui::{Pos2, Vec2};

use super::Scene;
use super::actor::ActorId;
use super::animation::AnimationCommand;
use super::drop_search::nearest_overlapping;
use super::geometry::centered_in;
use super::types::{ButtonId, DragPhase, PointerId};

/// Per-actor drag-and-drop state.
#[derive(Clone, Debug)]
pub struct Draggable {
    pub(super) draggable: bool,
    pub(super) grab_offset: Vec2,
    pub(super) start_position: Pos2,
    pub(super) drop_target: Option<ActorId>,
    pub(super) phase: DragPhase,
}

impl Default for Draggable {
    fn default() -> Self {
        Self {
            draggable: true,
            grab_offset: Vec2::ZERO,
            start_position: Pos2::ZERO,
            drop_target: None,
            phase: DragPhase::Idle,
        }
    }
}

impl Draggable {
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Pointer offset inside the actor captured by the last press.
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Actor position captured by the last press.
    pub fn start_position(&self) -> Pos2 {
        self.start_position
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }
}

/// Extension points called by the drag state machine.
///
/// Both hooks get the scene back, so a typical `on_drop` looks at
/// [`Scene::drop_target`] and then calls [`Scene::move_to_actor`] or [`Scene::move_to_start`].
pub trait DragHooks {
    /// Called after a press has been accepted, once the drag state is captured.
    fn on_drag_start(&mut self, scene: &mut Scene, actor: ActorId) {
        let _ = (scene, actor);
    }

    /// Called at the end of a release, after the drop target has been decided.
    fn on_drop(&mut self, scene: &mut Scene, actor: ActorId) {
        let _ = (scene, actor);
    }
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl DragHooks for NoHooks {}

impl Scene {
    fn draggable_state(&self, actor: ActorId) -> Option<&Draggable> {
        self.actors.get(&actor).and_then(|a| a.as_draggable())
    }

    fn draggable_state_mut(&mut self, actor: ActorId) -> Option<&mut Draggable> {
        self.actors.get_mut(&actor).and_then(|a| a.as_draggable_mut())
    }

    pub fn set_draggable(&mut self, actor: ActorId, draggable: bool) {
        match self.draggable_state_mut(actor) {
            Some(d) => d.draggable = draggable,
            None => log::debug!("set_draggable: {actor:?} is not a draggable in this scene"),
        }
    }

    /// `false` for unknown handles and for actors that are not draggables.
    pub fn is_draggable(&self, actor: ActorId) -> bool {
        self.draggable_state(actor).is_some_and(Draggable::is_draggable)
    }

    pub fn drag_phase(&self, actor: ActorId) -> DragPhase {
        self.draggable_state(actor)
            .map(Draggable::phase)
            .unwrap_or_default()
    }

    pub fn start_position(&self, actor: ActorId) -> Option<Pos2> {
        self.draggable_state(actor).map(Draggable::start_position)
    }

    pub fn grab_offset(&self, actor: ActorId) -> Option<Vec2> {
        self.draggable_state(actor).map(Draggable::grab_offset)
    }

    /// The target `actor` was last dropped on.
    ///
    /// Returns `None` if the last drop found nothing, or if that target has since left the scene.
    pub fn drop_target(&self, actor: ActorId) -> Option<ActorId> {
        let target = self.draggable_state(actor)?.drop_target?;
        self.actors
            .get(&target)
            .and_then(|a| a.as_drop_target())
            .map(|_| target)
    }

    pub fn has_drop_target(&self, actor: ActorId) -> bool {
        self.drop_target(actor).is_some()
    }

    /// Press on `actor` at actor-local `local`. Returns whether the press was handled;
    /// only a handled press starts a drag, and it captures `pointer` until the release.
    ///
    /// A pointer that is already dragging another actor cannot start a second drag.
    pub fn press(
        &mut self,
        actor: ActorId,
        pointer: PointerId,
        button: ButtonId,
        local: Pos2,
        hooks: &mut dyn DragHooks,
    ) -> bool {
        if let Some(&other) = self.captures.get(&pointer) {
            log::trace!("press {actor:?} ignored: {pointer:?} already drags {other:?}");
            return false;
        }
        let Some(a) = self.actors.get_mut(&actor) else {
            return false;
        };
        let position = a.position;
        let Some(state) = a.as_draggable_mut() else {
            return false;
        };
        if !state.draggable || state.phase.is_dragging() {
            return false;
        }

        state.grab_offset = local.to_vec2();
        state.start_position = position;
        state.phase = DragPhase::Dragging { pointer };
        self.captures.insert(pointer, actor);

        log::debug!("press {actor:?} pointer={pointer:?} button={button:?} local={local:?}");
        self.debug_log_event(format!(
            "press actor={} local=({:.1},{:.1}) start=({:.1},{:.1})",
            actor.as_u64(),
            local.x,
            local.y,
            position.x,
            position.y
        ));

        // A running slide would fight the pointer.
        self.animator.cancel_move(actor);
        self.bring_to_front(actor);
        let lift = AnimationCommand::ScaleTo {
            target: Vec2::splat(self.options.lift_scale),
            duration: self.options.lift_duration,
        };
        self.animator.request(actor, lift);

        hooks.on_drag_start(self, actor);
        true
    }

    /// Drag of `actor` to actor-local `local`. Moves the actor by `local - grab_offset`,
    /// which keeps the grab point under the pointer. Ignored unless a drag is in progress.
    pub fn drag(&mut self, actor: ActorId, local: Pos2) {
        let Some(a) = self.actors.get_mut(&actor) else {
            return;
        };
        let Some(state) = a.as_draggable() else {
            return;
        };
        if !state.phase.is_dragging() {
            log::trace!("drag {actor:?} ignored: not dragging");
            return;
        }
        let delta = local.to_vec2() - state.grab_offset;
        a.position += delta;
    }

    /// Release of `actor` at actor-local `local`: pick the nearest overlapping targetable drop
    /// target, settle the scale back, and call [`DragHooks::on_drop`].
    /// Ignored unless a drag is in progress.
    pub fn release(&mut self, actor: ActorId, local: Pos2, hooks: &mut dyn DragHooks) {
        let Some(a) = self.actors.get(&actor) else {
            return;
        };
        let Some(state) = a.as_draggable() else {
            return;
        };
        let DragPhase::Dragging { pointer } = state.phase else {
            log::trace!("release {actor:?} ignored: not dragging");
            return;
        };
        let (position, bounds) = (a.position, a.bounds());
        self.captures.remove(&pointer);

        if let Some(state) = self.draggable_state_mut(actor) {
            state.drop_target = None;
        }
        let found = nearest_overlapping(position, bounds, self.drop_candidates());
        if let Some(state) = self.draggable_state_mut(actor) {
            state.drop_target = found;
            state.phase = DragPhase::Idle;
        }

        match found {
            Some(target) => log::debug!("drop {actor:?} onto {target:?} local={local:?}"),
            None => log::debug!("drop {actor:?} without target local={local:?}"),
        }
        self.debug_log_event(format!(
            "release actor={} pos=({:.1},{:.1}) target={}",
            actor.as_u64(),
            position.x,
            position.y,
            found.map_or_else(|| "none".to_owned(), |t| t.as_u64().to_string())
        ));

        let settle = AnimationCommand::ScaleTo {
            target: Vec2::splat(1.0),
            duration: self.options.settle_duration,
        };
        self.animator.request(actor, settle);

        hooks.on_drop(self, actor);
    }

    /// Slide `actor` so it is centered over `other`'s bounds.
    pub fn move_to_actor(&mut self, actor: ActorId, other: ActorId) {
        let (Some(a), Some(o)) = (self.actors.get(&actor), self.actors.get(&other)) else {
            log::debug!("move_to_actor: {actor:?} or {other:?} is not in this scene");
            return;
        };
        let target = centered_in(a.size, o.bounds());
        self.slide_to(actor, target);
    }

    /// Slide `actor` back to where its last drag started.
    pub fn move_to_start(&mut self, actor: ActorId) {
        let Some(target) = self.start_position(actor) else {
            log::debug!("move_to_start: {actor:?} is not a draggable in this scene");
            return;
        };
        self.slide_to(actor, target);
    }

    fn slide_to(&mut self, actor: ActorId, target: Pos2) {
        let command = AnimationCommand::MoveTo {
            target,
            duration: self.options.move_duration,
            easing: self.options.move_easing,
        };
        self.animate(actor, command);
    }
}

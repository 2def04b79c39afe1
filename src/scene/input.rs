use egui::Pos2;

use super::Scene;
use super::actor::ActorId;
use super::draggable::DragHooks;
use super::geometry::stage_to_local;
use super::types::{PointerEvent, PointerId};

impl Scene {
    /// Topmost actor whose bounds contain the stage point `pos`.
    pub fn actor_at(&self, pos: Pos2) -> Option<ActorId> {
        self.z_order
            .iter()
            .rev()
            .copied()
            .find(|id| self.actors.get(id).is_some_and(|a| a.bounds().contains(pos)))
    }

    /// The actor currently holding `pointer`, if a drag is in progress with it.
    pub fn captured_by(&self, pointer: PointerId) -> Option<ActorId> {
        self.captures.get(&pointer).copied()
    }

    /// Route a stage-space pointer event.
    ///
    /// A press goes to the topmost actor under the pointer; if that actor handles it, the pointer
    /// is captured and the following drag/release events go to the same actor regardless of what
    /// is under the pointer. Captures are shared with [`Scene::press`] and [`Scene::release`], so
    /// both entry points can be mixed. Returns whether the event was consumed.
    pub fn handle_pointer(&mut self, event: PointerEvent, hooks: &mut dyn DragHooks) -> bool {
        match event {
            PointerEvent::Press {
                pointer,
                button,
                pos,
            } => {
                let Some(actor) = self.actor_at(pos) else {
                    return false;
                };
                let local = self.local_point(actor, pos);
                self.press(actor, pointer, button, local, hooks)
            }
            PointerEvent::Drag { pointer, pos } => {
                let Some(actor) = self.captured_by(pointer) else {
                    return false;
                };
                let local = self.local_point(actor, pos);
                self.drag(actor, local);
                true
            }
            PointerEvent::Release { pointer, pos, .. } => {
                // Dropped here too in case the actor stopped dragging without a release.
                let Some(actor) = self.captures.remove(&pointer) else {
                    return false;
                };
                let local = self.local_point(actor, pos);
                self.release(actor, local, hooks);
                true
            }
        }
    }

    fn local_point(&self, actor: ActorId, stage: Pos2) -> Pos2 {
        let origin = self.actors.get(&actor).map_or(Pos2::ZERO, |a| a.position);
        stage_to_local(origin, stage)
    }
}

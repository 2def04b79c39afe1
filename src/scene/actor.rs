use egui::{Color32, Pos2, Rect, Vec2};

use super::draggable::Draggable;
use super::drop_target::DropTarget;
use super::geometry::actor_bounds;

/// Handle to an actor owned by a [`super::Scene`].
///
/// Handles are never reused within a scene, so a handle to a removed actor simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ActorId(u64);

impl ActorId {
    pub fn from_u64(n: u64) -> Self {
        Self(n)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// What an actor can do.
#[derive(Clone, Debug)]
pub enum ActorKind {
    /// Positioned and sized, but takes no part in drag-and-drop.
    Plain,
    Draggable(Draggable),
    DropTarget(DropTarget),
}

impl ActorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Draggable(_) => "draggable",
            Self::DropTarget(_) => "drop_target",
        }
    }
}

/// A positioned, sized entity on the stage.
#[derive(Clone, Debug)]
pub struct Actor {
    pub(super) position: Pos2,
    pub(super) size: Vec2,
    pub(super) scale: Vec2,
    pub(super) kind: ActorKind,
    pub(super) label: Option<String>,
    pub(super) fill: Color32,
}

impl Actor {
    pub(super) fn new(position: Pos2, size: Vec2, kind: ActorKind) -> Self {
        let fill = match kind {
            ActorKind::Plain => Color32::from_gray(90),
            ActorKind::Draggable(_) => Color32::from_rgb(70, 130, 200),
            ActorKind::DropTarget(_) => Color32::from_rgb(60, 150, 90),
        };
        Self {
            position,
            size,
            scale: Vec2::splat(1.0),
            kind,
            label: None,
            fill,
        }
    }

    /// Min corner of the actor.
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Visual scale; does not affect [`Self::bounds`].
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn bounds(&self) -> Rect {
        actor_bounds(self.position, self.size)
    }

    pub fn kind(&self) -> &ActorKind {
        &self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn as_draggable(&self) -> Option<&Draggable> {
        match &self.kind {
            ActorKind::Draggable(d) => Some(d),
            _ => None,
        }
    }

    pub(super) fn as_draggable_mut(&mut self) -> Option<&mut Draggable> {
        match &mut self.kind {
            ActorKind::Draggable(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_drop_target(&self) -> Option<&DropTarget> {
        match &self.kind {
            ActorKind::DropTarget(t) => Some(t),
            _ => None,
        }
    }

    pub(super) fn as_drop_target_mut(&mut self) -> Option<&mut DropTarget> {
        match &mut self.kind {
            ActorKind::DropTarget(t) => Some(t),
            _ => None,
        }
    }
}

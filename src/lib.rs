//! Drag-and-drop actors and drop targets on a 2D stage.
//!
//! A [`Scene`] owns positioned, sized actors. Draggables can be picked up by a pointer, moved,
//! and released; on release each one looks for the nearest overlapping drop target that is
//! currently targetable and remembers it. Behavior around those moments is added through
//! [`DragHooks`], and [`SceneView`] shows a scene inside an `egui` UI.

#![forbid(unsafe_code)]

pub mod scene;
pub mod scene_builder;

pub use scene::{
    Actor, ActorId, ActorKind, AnimationCommand, ButtonId, DragHooks, DragPhase, Draggable,
    DropTarget, Easing, NoHooks, PointerEvent, PointerId, Scene, SceneOptions, SceneView,
};
pub use scene_builder::{RowDirection, SceneBuilder, card_board};

#[cfg(feature = "persistence")]
pub use scene::{
    ActorKindSnapshot, ActorSnapshot, SCENE_SNAPSHOT_VERSION, SceneSnapshot, SnapshotError,
};

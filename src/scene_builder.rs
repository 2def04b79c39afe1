use egui::{Color32, Pos2, Vec2, pos2, vec2};

use crate::scene::{ActorId, Scene, SceneOptions};

/// Where to place a row of actors relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowDirection {
    Right,
    Down,
}

/// A small convenience builder for setting up a [`Scene`] from code.
///
/// Every call that creates an actor returns the handle it will have in the built scene, so hooks
/// and game logic can be wired up before the scene exists.
///
/// For full control, you can always use [`Scene::add_draggable`] and friends directly.
pub struct SceneBuilder {
    scene: Scene,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(SceneOptions::default())
    }
}

impl SceneBuilder {
    pub fn new(options: SceneOptions) -> Self {
        Self {
            scene: Scene::new(options),
        }
    }

    /// Access the scene being built for advanced customization.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn actor(&mut self, position: Pos2, size: Vec2) -> ActorId {
        self.scene.add_actor(position, size)
    }

    #[must_use]
    pub fn draggable(&mut self, position: Pos2, size: Vec2, label: impl Into<String>) -> ActorId {
        let id = self.scene.add_draggable(position, size);
        self.scene.set_label(id, label);
        id
    }

    #[must_use]
    pub fn drop_target(&mut self, position: Pos2, size: Vec2) -> ActorId {
        self.scene.add_drop_target(position, size)
    }

    /// Lay out `count` drop targets of `size` starting at `anchor`, `gap` apart.
    ///
    /// Targets join the scan registry in row order, so on an exact distance tie the one closer to
    /// `anchor` wins.
    #[must_use]
    pub fn drop_target_row(
        &mut self,
        anchor: Pos2,
        dir: RowDirection,
        count: usize,
        size: Vec2,
        gap: f32,
    ) -> Vec<ActorId> {
        let step = match dir {
            RowDirection::Right => vec2(size.x + gap, 0.0),
            RowDirection::Down => vec2(0.0, size.y + gap),
        };
        (0..count)
            .map(|i| self.scene.add_drop_target(anchor + step * i as f32, size))
            .collect()
    }

    pub fn fill(&mut self, id: ActorId, fill: Color32) -> &mut Self {
        self.scene.set_fill(id, fill);
        self
    }

    pub fn targetable(&mut self, id: ActorId, targetable: bool) -> &mut Self {
        self.scene.set_targetable(id, targetable);
        self
    }

    /// Finish building.
    pub fn build(self) -> Scene {
        self.scene
    }
}

/// A ready-made board: `columns` drop-target slots on top, the same number of labelled
/// draggable cards underneath.
pub fn card_board(
    columns: usize,
    slot_size: Vec2,
    gap: f32,
) -> (Scene, Vec<ActorId>, Vec<ActorId>) {
    let mut b = SceneBuilder::default();
    let origin = pos2(gap, gap);
    let slots = b.drop_target_row(origin, RowDirection::Right, columns, slot_size, gap);

    let card_size = slot_size * 0.6;
    let card_row_y = origin.y + slot_size.y + gap * 4.0;
    let cards = (0..columns)
        .map(|i| {
            let x = origin.x + (slot_size.x + gap) * i as f32 + (slot_size.x - card_size.x) / 2.0;
            b.draggable(pos2(x, card_row_y), card_size, (i + 1).to_string())
        })
        .collect();

    (b.build(), slots, cards)
}

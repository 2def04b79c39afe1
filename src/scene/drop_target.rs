use super::Scene;
use super::actor::ActorId;

/// Passive drop-target state: only a flag saying whether drops are accepted right now.
#[derive(Clone, Debug)]
pub struct DropTarget {
    pub(super) targetable: bool,
}

impl Default for DropTarget {
    fn default() -> Self {
        Self { targetable: true }
    }
}

impl DropTarget {
    pub fn is_targetable(&self) -> bool {
        self.targetable
    }
}

impl Scene {
    /// Enable or disable drops onto `target`.
    ///
    /// Takes effect at the next release of any draggable; drags already in progress are not
    /// touched.
    pub fn set_targetable(&mut self, target: ActorId, targetable: bool) {
        match self.actors.get_mut(&target).and_then(|a| a.as_drop_target_mut()) {
            Some(t) => t.targetable = targetable,
            None => log::debug!("set_targetable: {target:?} is not a drop target in this scene"),
        }
    }

    /// `false` for unknown handles and for actors that are not drop targets.
    pub fn is_targetable(&self, target: ActorId) -> bool {
        self.actors
            .get(&target)
            .and_then(|a| a.as_drop_target())
            .is_some_and(DropTarget::is_targetable)
    }

    /// All drop targets currently in the scene, in the order they were added.
    ///
    /// This is the order the release scan walks, so it decides distance ties.
    pub fn drop_targets(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.drop_targets.iter().copied()
    }
}

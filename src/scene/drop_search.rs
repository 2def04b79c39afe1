use egui::{Pos2, Rect};

use super::Scene;
use super::actor::ActorId;
use super::geometry::{bounds_overlap, position_distance};

/// What the release scan needs to know about one drop target.
#[derive(Clone, Copy, Debug)]
pub(super) struct Candidate {
    pub(super) id: ActorId,
    pub(super) position: Pos2,
    pub(super) bounds: Rect,
    pub(super) targetable: bool,
}

/// Nearest targetable candidate whose bounds overlap `bounds`, measured between positions.
///
/// Candidates are visited in iteration order; a later candidate only wins if it is strictly
/// closer, so ties go to the earlier one.
pub(super) fn nearest_overlapping(
    position: Pos2,
    bounds: Rect,
    candidates: impl IntoIterator<Item = Candidate>,
) -> Option<ActorId> {
    let mut closest: Option<ActorId> = None;
    let mut closest_distance = f32::MAX;

    for candidate in candidates {
        if !candidate.targetable || !bounds_overlap(bounds, candidate.bounds) {
            continue;
        }
        let distance = position_distance(position, candidate.position);
        if distance < closest_distance {
            closest = Some(candidate.id);
            closest_distance = distance;
        }
    }

    closest
}

impl Scene {
    /// Snapshot of the drop-target registry for one release scan.
    pub(super) fn drop_candidates(&self) -> Vec<Candidate> {
        self.drop_targets
            .iter()
            .filter_map(|&id| {
                let actor = self.actors.get(&id)?;
                let target = actor.as_drop_target()?;
                Some(Candidate {
                    id,
                    position: actor.position,
                    bounds: actor.bounds(),
                    targetable: target.is_targetable(),
                })
            })
            .collect()
    }

    /// The drop target `actor` would land on if it were released right now.
    pub fn drop_target_under(&self, actor: ActorId) -> Option<ActorId> {
        let a = self.actors.get(&actor)?;
        nearest_overlapping(a.position, a.bounds(), self.drop_candidates())
    }
}

use egui::{Pos2, Rect, Vec2};

/// Axis-aligned bounding box of an actor at `position` (its min corner) with `size`.
pub(crate) fn actor_bounds(position: Pos2, size: Vec2) -> Rect {
    Rect::from_min_size(position, size)
}

/// True if the two boxes share a region of positive area.
///
/// Boxes that only touch along an edge do not overlap.
pub(crate) fn bounds_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Euclidean distance between two actor positions.
pub(crate) fn position_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Position that centers a box of `size` inside `other`.
pub(crate) fn centered_in(size: Vec2, other: Rect) -> Pos2 {
    other.min + (other.size() - size) / 2.0
}

/// Local coordinates of a stage point relative to an actor's origin.
pub(crate) fn stage_to_local(actor_position: Pos2, stage: Pos2) -> Pos2 {
    (stage - actor_position).to_pos2()
}

/// Rect scaled by `scale` around its center; used for painting only.
pub(crate) fn scaled_about_center(rect: Rect, scale: Vec2) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * scale)
}

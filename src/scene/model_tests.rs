//! End-to-end drag-and-drop scenarios against a whole [`Scene`].

use egui::{Pos2, Vec2, pos2, vec2};

use super::{ActorId, ButtonId, DragHooks, DragPhase, NoHooks, PointerId, Scene};

#[derive(Default)]
struct Recorder {
    calls: Vec<(&'static str, ActorId)>,
    /// Drop target as seen from inside `on_drop`.
    target_at_drop: Option<Option<ActorId>>,
}

impl DragHooks for Recorder {
    fn on_drag_start(&mut self, scene: &mut Scene, actor: ActorId) {
        assert!(
            scene.drag_phase(actor).is_dragging(),
            "drag state must be captured before on_drag_start"
        );
        self.calls.push(("drag_start", actor));
    }

    fn on_drop(&mut self, scene: &mut Scene, actor: ActorId) {
        self.target_at_drop = Some(scene.drop_target(actor));
        self.calls.push(("drop", actor));
    }
}

/// Snaps onto the target if there is one, otherwise slides home.
struct SnapOrReturn;

impl DragHooks for SnapOrReturn {
    fn on_drop(&mut self, scene: &mut Scene, actor: ActorId) {
        match scene.drop_target(actor) {
            Some(target) => scene.move_to_actor(actor, target),
            None => scene.move_to_start(actor),
        }
    }
}

fn press(scene: &mut Scene, actor: ActorId, local: Pos2, hooks: &mut dyn DragHooks) -> bool {
    scene.press(actor, PointerId::MOUSE, ButtonId::PRIMARY, local, hooks)
}

/// Drop `actor` with its position at `at`, by press, one drag and release.
fn drop_at(scene: &mut Scene, actor: ActorId, at: Pos2, hooks: &mut dyn DragHooks) {
    let start = scene.position(actor).unwrap_or_default();
    assert!(press(scene, actor, Pos2::ZERO, hooks), "press must be handled");
    scene.drag(actor, (at - start).to_pos2());
    assert_eq!(scene.position(actor), Some(at));
    scene.release(actor, Pos2::ZERO, hooks);
}

#[test]
fn disabled_press_is_unhandled_and_changes_nothing() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(10.0, 10.0), vec2(20.0, 20.0));

    // Establish state from an earlier drag.
    press(&mut scene, d, pos2(3.0, 4.0), &mut NoHooks);
    scene.drag(d, pos2(13.0, 4.0));
    scene.release(d, pos2(13.0, 4.0), &mut NoHooks);
    scene.step(1.0);
    let offset_before = scene.grab_offset(d);
    let start_before = scene.start_position(d);

    scene.set_draggable(d, false);
    assert!(!scene.is_draggable(d));

    let mut rec = Recorder::default();
    assert!(!press(&mut scene, d, pos2(7.0, 7.0), &mut rec));
    assert_eq!(scene.grab_offset(d), offset_before);
    assert_eq!(scene.start_position(d), start_before);
    assert_eq!(scene.pending_scale_target(d), None, "no lift may be requested");
    assert!(rec.calls.is_empty(), "on_drag_start must not run");
    assert_eq!(scene.drag_phase(d), DragPhase::Idle);
}

#[test]
fn press_captures_start_position() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(12.5, -4.0), vec2(20.0, 20.0));
    assert!(press(&mut scene, d, pos2(1.0, 1.0), &mut NoHooks));
    assert_eq!(scene.start_position(d), Some(pos2(12.5, -4.0)));

    scene.drag(d, pos2(31.0, 1.0));
    scene.release(d, pos2(31.0, 1.0), &mut NoHooks);

    // Every new press overwrites it.
    assert!(press(&mut scene, d, pos2(1.0, 1.0), &mut NoHooks));
    assert_eq!(scene.start_position(d), Some(pos2(42.5, -4.0)));
}

#[test]
fn each_drag_moves_by_local_minus_grab_offset() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(20.0, 20.0));
    let grab = pos2(4.0, 6.0);
    assert!(press(&mut scene, d, grab, &mut NoHooks));

    let events = [pos2(10.0, 6.0), pos2(4.0, 1.0), pos2(-2.5, 8.0), pos2(4.0, 6.0)];
    for local in events {
        let before = scene.position(d).unwrap_or_default();
        scene.drag(d, local);
        let after = scene.position(d).unwrap_or_default();
        assert_eq!(after - before, local - grab, "event at {local:?}");
    }
    assert_eq!(scene.position(d), Some(pos2(-0.5, -3.0)));
}

#[test]
fn release_without_overlap_has_no_target() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    scene.add_drop_target(pos2(100.0, 100.0), vec2(10.0, 10.0));

    let mut rec = Recorder::default();
    drop_at(&mut scene, d, pos2(20.0, 0.0), &mut rec);
    assert!(!scene.has_drop_target(d));
    assert_eq!(scene.drop_target(d), None);
    assert_eq!(rec.target_at_drop, Some(None));
}

#[test]
fn release_on_empty_stage_has_no_target() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    drop_at(&mut scene, d, pos2(5.0, 5.0), &mut NoHooks);
    assert!(!scene.has_drop_target(d));
}

#[test]
fn nearest_of_two_overlapping_targets_wins() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let far = scene.add_drop_target(pos2(53.0, 54.0), vec2(10.0, 10.0)); // 5.0 from (50,50)
    let near = scene.add_drop_target(pos2(50.0, 47.0), vec2(10.0, 10.0)); // 3.0 from (50,50)

    drop_at(&mut scene, d, pos2(50.0, 50.0), &mut NoHooks);
    assert_eq!(scene.drop_target(d), Some(near));
    assert_ne!(scene.drop_target(d), Some(far));
}

#[test]
fn non_targetable_overlap_is_excluded() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(50.0, 50.0), vec2(10.0, 10.0));
    scene.set_targetable(t, false);

    drop_at(&mut scene, d, pos2(52.0, 52.0), &mut NoHooks);
    assert!(!scene.has_drop_target(d));
}

#[test]
fn disabling_a_target_mid_drag_excludes_it() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let near = scene.add_drop_target(pos2(20.0, 0.0), vec2(10.0, 10.0));
    let other = scene.add_drop_target(pos2(24.0, 0.0), vec2(10.0, 10.0));

    assert!(press(&mut scene, d, Pos2::ZERO, &mut NoHooks));
    scene.drag(d, pos2(21.0, 0.0));
    scene.set_targetable(near, false);
    scene.release(d, Pos2::ZERO, &mut NoHooks);
    assert_eq!(scene.drop_target(d), Some(other));

    // Eligibility is re-checked on every release, not remembered.
    scene.set_targetable(near, true);
    drop_at(&mut scene, d, pos2(21.0, 0.0), &mut NoHooks);
    assert_eq!(scene.drop_target(d), Some(near));
}

#[test]
fn equal_distances_keep_the_earlier_registered_target() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let first = scene.add_drop_target(pos2(55.0, 50.0), vec2(10.0, 10.0));
    let second = scene.add_drop_target(pos2(45.0, 50.0), vec2(10.0, 10.0));

    drop_at(&mut scene, d, pos2(50.0, 50.0), &mut NoHooks);
    assert_eq!(scene.drop_target(d), Some(first));
    assert_ne!(scene.drop_target(d), Some(second));
}

#[test]
fn each_release_clears_the_previous_target() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(50.0, 50.0), vec2(10.0, 10.0));

    drop_at(&mut scene, d, pos2(50.0, 50.0), &mut NoHooks);
    assert_eq!(scene.drop_target(d), Some(t));

    drop_at(&mut scene, d, pos2(200.0, 0.0), &mut NoHooks);
    assert_eq!(scene.drop_target(d), None);
}

#[test]
fn removed_target_reads_back_as_none() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(50.0, 50.0), vec2(10.0, 10.0));
    drop_at(&mut scene, d, pos2(50.0, 50.0), &mut NoHooks);
    assert!(scene.has_drop_target(d));

    scene.remove(t);
    assert!(!scene.has_drop_target(d));
    assert_eq!(scene.drop_target(d), None);
}

#[test]
fn hooks_run_in_order_after_state_changes() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(30.0, 0.0), vec2(10.0, 10.0));

    let mut rec = Recorder::default();
    drop_at(&mut scene, d, pos2(28.0, 0.0), &mut rec);
    assert_eq!(rec.calls, vec![("drag_start", d), ("drop", d)]);
    assert_eq!(rec.target_at_drop, Some(Some(t)), "target is decided before on_drop");
    assert_eq!(scene.drag_phase(d), DragPhase::Idle);
}

#[test]
fn press_raises_the_draggable_to_the_top() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(0.0, 0.0), vec2(10.0, 10.0));
    assert_eq!(scene.z_order(), &[d, t]);
    press(&mut scene, d, Pos2::ZERO, &mut NoHooks);
    assert_eq!(scene.z_order(), &[t, d]);
}

#[test]
fn move_to_actor_centers_over_the_other() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let other = scene.add_actor(pos2(10.0, 10.0), vec2(40.0, 40.0));

    scene.move_to_actor(d, other);
    assert_eq!(scene.pending_move_target(d), Some(pos2(25.0, 25.0)));
    scene.step(0.5);
    assert_eq!(scene.position(d), Some(pos2(25.0, 25.0)));
}

#[test]
fn snap_or_return_hooks_settle_the_actor() {
    let mut scene = Scene::default();
    let d = scene.add_draggable(pos2(0.0, 0.0), vec2(10.0, 10.0));
    let t = scene.add_drop_target(pos2(100.0, 100.0), vec2(30.0, 30.0));

    drop_at(&mut scene, d, pos2(95.0, 95.0), &mut SnapOrReturn);
    for _ in 0..10 {
        scene.step(0.1);
    }
    assert_eq!(scene.drop_target(d), Some(t));
    assert_eq!(scene.position(d), Some(pos2(110.0, 110.0)));
    assert_eq!(scene.actor(d).map(|a| a.scale()), Some(Vec2::splat(1.0)));

    drop_at(&mut scene, d, pos2(300.0, 0.0), &mut SnapOrReturn);
    for _ in 0..10 {
        scene.step(0.1);
    }
    assert_eq!(scene.position(d), Some(pos2(110.0, 110.0)), "slid back to drag start");
    assert!(!scene.is_animating());
}

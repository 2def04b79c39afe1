use egui::{
    Align2, Color32, Event, FontId, PointerButton, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, TouchPhase, Ui, Vec2,
};

use super::Scene;
use super::actor::ActorId;
use super::draggable::DragHooks;
use super::geometry::scaled_about_center;
use super::types::{ButtonId, PointerEvent, PointerId};

/// Paints a [`Scene`] and feeds it the pointer input that lands on it.
///
/// Each frame the view forwards primary-button presses/drags/releases and touches (in stage
/// coordinates, the top-left of the view being the stage origin), advances the animations by
/// `stable_dt`, and paints actors back to front. Every finger is its own pointer, so several
/// actors can be dragged at once.
///
/// ```no_run
/// # fn demo(ui: &mut egui::Ui, scene: &mut egui_stage_dnd::Scene) {
/// ui.add(egui_stage_dnd::SceneView::new(scene, &mut egui_stage_dnd::NoHooks));
/// # }
/// ```
pub struct SceneView<'a> {
    scene: &'a mut Scene,
    hooks: &'a mut dyn DragHooks,
    desired_size: Option<Vec2>,
    background: Color32,
}

impl<'a> SceneView<'a> {
    pub fn new(scene: &'a mut Scene, hooks: &'a mut dyn DragHooks) -> Self {
        Self {
            scene,
            hooks,
            desired_size: None,
            background: Color32::from_gray(24),
        }
    }

    /// Defaults to all available space.
    #[must_use]
    pub fn desired_size(mut self, size: Vec2) -> Self {
        self.desired_size = Some(size);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color32) -> Self {
        self.background = color;
        self
    }
}

impl egui::Widget for SceneView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            scene,
            hooks,
            desired_size,
            background,
        } = self;

        let size = desired_size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let events = ui.input(|i| stage_pointer_events(&i.events, rect, i.any_touches()));
        for event in events {
            scene.handle_pointer(event, hooks);
        }
        scene.step(ui.input(|i| i.stable_dt));

        paint(ui, scene, rect, background);

        if scene.is_animating() {
            ui.ctx().request_repaint();
        }
        response
    }
}

fn button_id(button: PointerButton) -> ButtonId {
    match button {
        PointerButton::Primary => ButtonId::PRIMARY,
        PointerButton::Secondary => ButtonId::SECONDARY,
        PointerButton::Middle => ButtonId::MIDDLE,
        PointerButton::Extra1 => ButtonId(3),
        PointerButton::Extra2 => ButtonId(4),
    }
}

/// Translate raw egui events into stage-space pointer events for a view covering `rect`.
///
/// Presses outside `rect` are dropped; drags and releases are always forwarded since a drag
/// may leave the view and the scene ignores pointers it has not captured.
///
/// Touches map to one [`PointerId::touch`] per finger. While touches are active (`touch_active`,
/// or any touch event in this batch) the mouse events egui synthesizes from the first finger
/// are skipped, so a finger does not drive two pointers.
pub(super) fn stage_pointer_events(
    events: &[Event],
    rect: Rect,
    touch_active: bool,
) -> Vec<PointerEvent> {
    let to_stage = |pos: Pos2| (pos - rect.min).to_pos2();
    let touching = touch_active || events.iter().any(|e| matches!(e, Event::Touch { .. }));
    let mouse = PointerId::MOUSE;

    events
        .iter()
        .filter_map(|event| match *event {
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } if button == PointerButton::Primary && !touching => {
                let button = button_id(button);
                if pressed {
                    rect.contains(pos).then(|| PointerEvent::Press {
                        pointer: mouse,
                        button,
                        pos: to_stage(pos),
                    })
                } else {
                    Some(PointerEvent::Release {
                        pointer: mouse,
                        button,
                        pos: to_stage(pos),
                    })
                }
            }
            Event::PointerMoved(pos) if !touching => Some(PointerEvent::Drag {
                pointer: mouse,
                pos: to_stage(pos),
            }),
            Event::Touch { id, phase, pos, .. } => {
                let pointer = PointerId::touch(id.0);
                let button = ButtonId::PRIMARY;
                match phase {
                    TouchPhase::Start => rect.contains(pos).then(|| PointerEvent::Press {
                        pointer,
                        button,
                        pos: to_stage(pos),
                    }),
                    TouchPhase::Move => Some(PointerEvent::Drag {
                        pointer,
                        pos: to_stage(pos),
                    }),
                    // A cancelled touch still ends the drag; the scene has no separate cancel.
                    TouchPhase::End | TouchPhase::Cancel => Some(PointerEvent::Release {
                        pointer,
                        button,
                        pos: to_stage(pos),
                    }),
                }
            }
            _ => None,
        })
        .collect()
}

fn paint(ui: &Ui, scene: &Scene, rect: Rect, background: Color32) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, background);

    let hovered_targets: Vec<ActorId> = scene
        .actors()
        .filter(|(_, a)| a.as_draggable().is_some_and(|d| d.phase().is_dragging()))
        .filter_map(|(id, _)| scene.drop_target_under(id))
        .collect();

    let offset = rect.min.to_vec2();
    for (id, actor) in scene.actors() {
        let bounds = scaled_about_center(actor.bounds().translate(offset), actor.scale());
        let mut fill = actor.fill();

        if let Some(target) = actor.as_drop_target() {
            if !target.is_targetable() {
                fill = fill.gamma_multiply(0.35);
            }
            painter.rect_filled(bounds, 4.0, fill);
            let stroke = if hovered_targets.contains(&id) {
                Stroke::new(3.0, Color32::YELLOW)
            } else {
                Stroke::new(1.0, Color32::from_gray(200))
            };
            painter.rect_stroke(bounds, 4.0, stroke, StrokeKind::Inside);
        } else {
            painter.rect_filled(bounds, 4.0, fill);
        }

        if let Some(label) = actor.label() {
            painter.text(
                bounds.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Modifiers, TouchDeviceId, TouchId, pos2, vec2};

    use super::*;

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn events_are_moved_into_stage_space() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0));
        let events = [
            button(pos2(110.0, 60.0), true),
            Event::PointerMoved(pos2(400.0, 60.0)),
            button(pos2(400.0, 60.0), false),
        ];
        let out = stage_pointer_events(&events, rect, false);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].pos(), pos2(10.0, 10.0));
        assert!(matches!(out[0], PointerEvent::Press { .. }));
        assert_eq!(out[1].pos(), pos2(300.0, 10.0));
        assert!(matches!(out[2], PointerEvent::Release { .. }));
    }

    #[test]
    fn presses_outside_the_view_and_other_buttons_are_dropped() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let events = [
            button(pos2(150.0, 10.0), true),
            Event::PointerButton {
                pos: pos2(10.0, 10.0),
                button: PointerButton::Secondary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
            Event::Text("x".to_owned()),
        ];
        assert!(stage_pointer_events(&events, rect, false).is_empty());
    }

    fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos,
            force: None,
        }
    }

    #[test]
    fn each_finger_is_its_own_pointer() {
        let rect = Rect::from_min_size(pos2(100.0, 0.0), vec2(200.0, 200.0));
        let events = [
            touch(7, TouchPhase::Start, pos2(110.0, 10.0)),
            // egui's mouse emulation of the first finger.
            button(pos2(110.0, 10.0), true),
            touch(9, TouchPhase::Start, pos2(210.0, 10.0)),
            touch(7, TouchPhase::Move, pos2(120.0, 30.0)),
            Event::PointerMoved(pos2(120.0, 30.0)),
            touch(9, TouchPhase::Cancel, pos2(210.0, 10.0)),
        ];
        let out = stage_pointer_events(&events, rect, false);
        let first = PointerId::touch(7);
        let second = PointerId::touch(9);
        assert_ne!(first, second);
        assert!(first.is_touch() && !PointerId::MOUSE.is_touch());
        assert_eq!(
            out,
            vec![
                PointerEvent::Press {
                    pointer: first,
                    button: ButtonId::PRIMARY,
                    pos: pos2(10.0, 10.0),
                },
                PointerEvent::Press {
                    pointer: second,
                    button: ButtonId::PRIMARY,
                    pos: pos2(110.0, 10.0),
                },
                PointerEvent::Drag {
                    pointer: first,
                    pos: pos2(20.0, 30.0),
                },
                PointerEvent::Release {
                    pointer: second,
                    button: ButtonId::PRIMARY,
                    pos: pos2(110.0, 10.0),
                },
            ]
        );
    }

    #[test]
    fn mouse_emulation_is_skipped_while_a_finger_is_down() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        let events = [Event::PointerMoved(pos2(20.0, 20.0))];
        assert!(stage_pointer_events(&events, rect, true).is_empty());
        assert_eq!(stage_pointer_events(&events, rect, false).len(), 1);
    }

    #[test]
    fn two_fingers_drag_two_actors() {
        let mut scene = Scene::default();
        let a = scene.add_draggable(pos2(0.0, 0.0), vec2(20.0, 20.0));
        let b = scene.add_draggable(pos2(100.0, 0.0), vec2(20.0, 20.0));
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0));
        let events = [
            touch(1, TouchPhase::Start, pos2(5.0, 5.0)),
            touch(2, TouchPhase::Start, pos2(105.0, 5.0)),
            touch(1, TouchPhase::Move, pos2(5.0, 55.0)),
            touch(2, TouchPhase::Move, pos2(135.0, 5.0)),
        ];
        for event in stage_pointer_events(&events, rect, false) {
            scene.handle_pointer(event, &mut super::super::NoHooks);
        }
        assert_eq!(scene.position(a), Some(pos2(0.0, 50.0)));
        assert_eq!(scene.position(b), Some(pos2(130.0, 0.0)));
        assert!(scene.drag_phase(a).is_dragging() && scene.drag_phase(b).is_dragging());
    }

    #[test]
    fn view_drives_a_drag_through_a_real_context() {
        let mut scene = Scene::default();
        let d = scene.add_draggable(pos2(10.0, 10.0), vec2(20.0, 20.0));

        let ctx = egui::Context::default();
        let frame = |events: Vec<Event>, scene: &mut Scene| {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        ui.add(SceneView::new(scene, &mut super::super::NoHooks));
                    });
            });
        };

        frame(Vec::new(), &mut scene);
        frame(
            vec![Event::PointerMoved(pos2(15.0, 15.0)), button(pos2(15.0, 15.0), true)],
            &mut scene,
        );
        assert!(scene.drag_phase(d).is_dragging());

        frame(vec![Event::PointerMoved(pos2(55.0, 35.0))], &mut scene);
        assert_eq!(scene.position(d), Some(pos2(50.0, 30.0)));

        frame(vec![button(pos2(55.0, 35.0), false)], &mut scene);
        assert!(!scene.drag_phase(d).is_dragging());
    }
}

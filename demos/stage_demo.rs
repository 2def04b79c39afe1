// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use egui_stage_dnd::{ActorId, DragHooks, Scene, SceneView};

/// Cards snap into the slot they are dropped on; a slot takes one card at a time.
#[derive(Default)]
struct SlotRules {
    /// card -> slot it currently sits in
    placed: Vec<(ActorId, ActorId)>,
}

impl SlotRules {
    fn release_slot_of(&mut self, scene: &mut Scene, card: ActorId) {
        if let Some(i) = self.placed.iter().position(|&(c, _)| c == card) {
            let (_, slot) = self.placed.swap_remove(i);
            scene.set_targetable(slot, true);
        }
    }
}

impl DragHooks for SlotRules {
    fn on_drag_start(&mut self, scene: &mut Scene, card: ActorId) {
        self.release_slot_of(scene, card);
    }

    fn on_drop(&mut self, scene: &mut Scene, card: ActorId) {
        match scene.drop_target(card) {
            Some(slot) => {
                scene.move_to_actor(card, slot);
                scene.set_targetable(slot, false);
                self.placed.push((card, slot));
                log::info!("card {} placed in slot {}", card.as_u64(), slot.as_u64());
            }
            None => scene.move_to_start(card),
        }
    }
}

struct App {
    scene: Scene,
    rules: SlotRules,
    show_debug: bool,
}

impl Default for App {
    fn default() -> Self {
        let (mut scene, _slots, _cards) =
            egui_stage_dnd::card_board(5, egui::vec2(90.0, 120.0), 16.0);
        scene.options.debug_event_log = true;
        Self {
            scene,
            rules: SlotRules::default(),
            show_debug: false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("stage_demo_help").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        "Drag a card onto a slot. \
                         Cards dropped elsewhere slide back to where they came from.",
                    )
                    .selectable(false),
                );
                ui.checkbox(&mut self.show_debug, "debug");
            });
        });

        if self.show_debug {
            egui::SidePanel::right("stage_demo_debug").show(ctx, |ui| {
                ui.monospace(self.scene.debug_summary());
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(self.scene.debug_log_text());
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(SceneView::new(&mut self.scene, &mut self.rules));
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("egui_stage_dnd demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_stage_dnd demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}

use itertools::Itertools as _;

use super::Scene;
use super::actor::ActorKind;

impl Scene {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[frame {}] {}", self.debug_frame, message));
    }

    /// Lines recorded while [`super::SceneOptions::debug_event_log`] is on, oldest first.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    /// One line per actor, back to front.
    pub fn debug_summary(&self) -> String {
        self.z_order
            .iter()
            .filter_map(|id| self.actors.get(id).map(|a| (id, a)))
            .map(|(id, a)| {
                let extra = match a.kind() {
                    ActorKind::Plain => String::new(),
                    ActorKind::Draggable(d) => format!(
                        " draggable={} phase={:?} target={:?}",
                        d.is_draggable(),
                        d.phase(),
                        self.drop_target(*id).map(|t| t.as_u64())
                    ),
                    ActorKind::DropTarget(t) => format!(" targetable={}", t.is_targetable()),
                };
                format!(
                    "{} {} pos=({:.1},{:.1}) size=({:.1},{:.1}){extra}",
                    id.as_u64(),
                    a.kind().name(),
                    a.position().x,
                    a.position().y,
                    a.size().x,
                    a.size().y,
                )
            })
            .join("\n")
    }
}

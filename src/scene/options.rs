use super::animation::Easing;

/// Options for [`super::Scene`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneOptions {
    /// Scale a draggable grows to while it is held, so it looks lifted off the stage.
    pub lift_scale: f32,

    /// Seconds for the lift scale-up after a press.
    pub lift_duration: f32,

    /// Seconds for the scale to return to 1.0 after a release.
    pub settle_duration: f32,

    /// Seconds for [`super::Scene::move_to_actor`] and [`super::Scene::move_to_start`] slides.
    pub move_duration: f32,

    /// Curve used by those slides.
    pub move_easing: Easing,

    /// If true, record press/release decisions in a small ring buffer, readable through
    /// [`super::Scene::debug_log`]. Handy when the `log` output is not wired up.
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            lift_scale: 1.10,
            lift_duration: 0.25,
            settle_duration: 0.25,
            move_duration: 0.50,
            move_easing: Easing::CubicOut,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

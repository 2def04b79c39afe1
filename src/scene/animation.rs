use std::collections::BTreeMap;

use egui::emath::easing;
use egui::{Pos2, Vec2};

use super::Scene;
use super::actor::ActorId;

/// Interpolation curve for a tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Easing {
    Linear,
    /// Fast start, slow finish.
    #[default]
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t` in `0..=1` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => easing::linear(t),
            Self::CubicOut => easing::cubic_out(t),
            Self::CubicInOut => easing::cubic_in_out(t),
        }
    }
}

/// A fire-and-forget animation request for one actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationCommand {
    /// Linear scale change.
    ScaleTo { target: Vec2, duration: f32 },
    /// Absolute move of the actor's position.
    MoveTo {
        target: Pos2,
        duration: f32,
        easing: Easing,
    },
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    /// Captured on the first step, so the tween starts from wherever the actor is by then.
    from: Option<Vec2>,
    to: Vec2,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    fn new(to: Vec2, duration: f32, easing: Easing) -> Self {
        Self {
            from: None,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt`; returns the new value and whether the tween is finished.
    fn advance(&mut self, current: Vec2, dt: f32) -> (Vec2, bool) {
        let from = *self.from.get_or_insert(current);
        self.elapsed += dt.max(0.0);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };
        if t >= 1.0 {
            return (self.to, true);
        }
        (from + (self.to - from) * self.easing.apply(t), false)
    }
}

/// Runs tweens on actors. At most one scale and one move tween per actor; a new request on the
/// same channel replaces the running one.
#[derive(Debug, Default)]
pub(super) struct Animator {
    scale: BTreeMap<ActorId, Tween>,
    moves: BTreeMap<ActorId, Tween>,
}

impl Animator {
    pub(super) fn request(&mut self, actor: ActorId, command: AnimationCommand) {
        match command {
            AnimationCommand::ScaleTo { target, duration } => {
                self.scale
                    .insert(actor, Tween::new(target, duration, Easing::Linear));
            }
            AnimationCommand::MoveTo {
                target,
                duration,
                easing,
            } => {
                self.moves
                    .insert(actor, Tween::new(target.to_vec2(), duration, easing));
            }
        }
    }

    pub(super) fn cancel_move(&mut self, actor: ActorId) -> bool {
        self.moves.remove(&actor).is_some()
    }

    pub(super) fn forget(&mut self, actor: ActorId) {
        self.scale.remove(&actor);
        self.moves.remove(&actor);
    }

    pub(super) fn is_idle(&self) -> bool {
        self.scale.is_empty() && self.moves.is_empty()
    }

    pub(super) fn is_animating(&self, actor: ActorId) -> bool {
        self.scale.contains_key(&actor) || self.moves.contains_key(&actor)
    }

    pub(super) fn move_target(&self, actor: ActorId) -> Option<Pos2> {
        self.moves.get(&actor).map(|t| t.to.to_pos2())
    }

    pub(super) fn scale_target(&self, actor: ActorId) -> Option<Vec2> {
        self.scale.get(&actor).map(|t| t.to)
    }
}

impl Scene {
    /// Queue an animation on `actor`. Nothing waits on it; call [`Self::step`] to make it progress.
    pub fn animate(&mut self, actor: ActorId, command: AnimationCommand) {
        if !self.actors.contains_key(&actor) {
            log::debug!("animate: {actor:?} is not in this scene");
            return;
        }
        log::trace!("animate {actor:?} {command:?}");
        self.animator.request(actor, command);
    }

    /// Advance every running animation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.debug_frame = self.debug_frame.wrapping_add(1);

        let actors = &mut self.actors;
        self.animator.scale.retain(|id, tween| {
            let Some(actor) = actors.get_mut(id) else {
                return false;
            };
            let (value, done) = tween.advance(actor.scale, dt);
            actor.scale = value;
            !done
        });
        self.animator.moves.retain(|id, tween| {
            let Some(actor) = actors.get_mut(id) else {
                return false;
            };
            let (value, done) = tween.advance(actor.position.to_vec2(), dt);
            actor.position = value.to_pos2();
            !done
        });
    }

    /// True while any animation is still running.
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    pub fn is_actor_animating(&self, actor: ActorId) -> bool {
        self.animator.is_animating(actor)
    }

    /// Destination of the move tween currently running on `actor`, if any.
    pub fn pending_move_target(&self, actor: ActorId) -> Option<Pos2> {
        self.animator.move_target(actor)
    }

    /// Target of the scale tween currently running on `actor`, if any.
    pub fn pending_scale_target(&self, actor: ActorId) -> Option<Vec2> {
        self.animator.scale_target(actor)
    }
}

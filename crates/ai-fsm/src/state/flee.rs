use ai_core::{Transition, Vec3};

use super::{BehaviorMode, Lifecycle, StateContext};
use crate::handles::triggers;

/// Running to the level's safe location with a sharper turn rate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Flee {
    safe_location: Option<Vec3>,
    saved_turn_rate: Option<f32>,
}

impl Flee {
    pub fn safe_location(&self) -> Option<Vec3> {
        self.safe_location
    }
}

impl Lifecycle for Flee {
    fn enter(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        cx.nav.set_speed(cx.config.motion.flee_speed);
        cx.nav.set_movement_halted(false);

        let base = cx.nav.turn_rate();
        self.saved_turn_rate = Some(base);
        cx.nav
            .set_turn_rate(base + cx.config.motion.flee_turn_rate_boost);

        cx.anim.set_trigger(triggers::RUNNING);

        self.safe_location = cx.environment.safe_location();
        if self.safe_location.is_none() {
            tracing::warn!(npc = cx.npc, "no safe location to flee to; going idle");
            return Transition::To(BehaviorMode::Idle);
        }
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        let Some(safe) = self.safe_location else {
            return Transition::To(BehaviorMode::Idle);
        };

        cx.nav.set_destination(safe);
        if cx.has_arrived() {
            return Transition::To(BehaviorMode::Idle);
        }
        Transition::Stay
    }

    fn exit(&mut self, cx: &mut StateContext<'_>) {
        if let Some(rate) = self.saved_turn_rate.take() {
            cx.nav.set_turn_rate(rate);
        }
        cx.anim.clear_trigger(triggers::RUNNING);
    }
}

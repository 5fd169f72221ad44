use ai_core::Transition;

use super::{BehaviorMode, Lifecycle, StateContext};
use crate::handles::triggers;

/// Standing still until the target shows up or a random urge to patrol wins.
///
/// A rear ambush is ignored here; only a patrolling agent flees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Idle;

impl Lifecycle for Idle {
    fn enter(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        cx.nav.set_speed(0.0);
        cx.nav.set_movement_halted(true);
        cx.anim.set_trigger(triggers::IDLE);
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        if cx.can_see_target() {
            return Transition::To(BehaviorMode::Pursue);
        }
        let chance = cx.config.chances.idle_to_patrol;
        if cx.roll(chance) {
            return Transition::To(BehaviorMode::Patrol);
        }
        Transition::Stay
    }

    fn exit(&mut self, cx: &mut StateContext<'_>) {
        cx.anim.clear_trigger(triggers::IDLE);
    }
}

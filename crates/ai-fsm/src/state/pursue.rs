use ai_core::Transition;

use super::{BehaviorMode, Lifecycle, StateContext};
use crate::handles::triggers;

/// Chasing the target's current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pursue;

impl Lifecycle for Pursue {
    fn enter(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        cx.nav.set_speed(cx.config.motion.pursue_speed);
        cx.nav.set_movement_halted(false);
        cx.anim.set_trigger(triggers::RUNNING);
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        let target = cx.target_position();
        cx.nav.set_destination(target);

        // Perception is only acted on once navigation has produced a path.
        if !cx.nav.has_path() {
            tracing::trace!(npc = cx.npc, "pursuit waiting for a path");
            return Transition::Stay;
        }
        if cx.can_attack_target() {
            return Transition::To(BehaviorMode::Attack);
        }
        if !cx.can_see_target() {
            return Transition::To(BehaviorMode::Patrol);
        }
        Transition::Stay
    }

    fn exit(&mut self, cx: &mut StateContext<'_>) {
        cx.anim.clear_trigger(triggers::RUNNING);
    }
}

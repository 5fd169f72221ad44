use ai_core::math::{smooth_rotate, yaw_rotation};
use ai_core::Transition;

use super::{BehaviorMode, Lifecycle, StateContext};
use crate::handles::triggers;

/// Standing ground, turning to face the target and firing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attack {
    audible: bool,
}

impl Attack {
    pub fn is_audible(&self) -> bool {
        self.audible
    }
}

impl Lifecycle for Attack {
    fn enter(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        cx.anim.set_trigger(triggers::SHOOTING);
        cx.nav.set_movement_halted(true);

        match cx.audio.as_deref_mut() {
            Some(audio) => {
                audio.play();
                self.audible = true;
            }
            None => tracing::warn!(npc = cx.npc, "no audio source; attacking silently"),
        }
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        let pose = cx.agent_pose();
        if let Some(facing) = yaw_rotation(cx.target_position() - pose.position) {
            let t = cx.tick.dt_seconds * cx.config.motion.attack_turn_speed;
            cx.nav.set_rotation(smooth_rotate(pose.rotation, facing, t));
        }

        if !cx.can_see_target() {
            return Transition::To(BehaviorMode::Idle);
        }
        if !cx.can_attack_target() {
            return Transition::To(BehaviorMode::Pursue);
        }
        Transition::Stay
    }

    fn exit(&mut self, cx: &mut StateContext<'_>) {
        cx.anim.clear_trigger(triggers::SHOOTING);
        cx.nav.set_movement_halted(false);
        if self.audible {
            if let Some(audio) = cx.audio.as_deref_mut() {
                audio.stop();
            }
        }
    }
}

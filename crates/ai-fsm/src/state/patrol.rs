use ai_core::Transition;

use super::{BehaviorMode, Lifecycle, StateContext};
use crate::handles::triggers;

/// Walking the waypoint loop, starting from the waypoint nearest to the agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Patrol {
    index: Option<usize>,
}

impl Patrol {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    fn head_to(&mut self, cx: &mut StateContext<'_>, index: usize) {
        self.index = Some(index);
        if let Some(point) = cx.waypoints.get(index) {
            cx.nav.set_destination(point);
            tracing::debug!(npc = cx.npc, index, "patrol heading to waypoint");
        }
    }
}

impl Lifecycle for Patrol {
    fn enter(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        cx.nav.set_speed(cx.config.motion.patrol_speed);
        cx.nav.set_movement_halted(false);

        match cx.waypoints.nearest_index(cx.agent_pose().position) {
            Some(index) => self.head_to(cx, index),
            None => tracing::warn!(npc = cx.npc, "no waypoints to patrol; holding position"),
        }

        cx.anim.set_trigger(triggers::WALKING);
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        if cx.is_target_behind_and_close() {
            return Transition::To(BehaviorMode::Flee);
        }
        if cx.can_see_target() {
            return Transition::To(BehaviorMode::Pursue);
        }
        if let Some(current) = self.index {
            if cx.has_arrived() {
                let next = cx.waypoints.next_index(current);
                self.head_to(cx, next);
                return Transition::Stay;
            }
        }
        let chance = cx.config.chances.patrol_to_idle;
        if cx.roll(chance) {
            return Transition::To(BehaviorMode::Idle);
        }
        Transition::Stay
    }

    fn exit(&mut self, cx: &mut StateContext<'_>) {
        cx.anim.clear_trigger(triggers::WALKING);
    }
}

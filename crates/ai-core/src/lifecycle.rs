#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-instance cursor of a state's enter/update/exit lifecycle.
///
/// Starts at `Enter`, only ever moves forward, and never skips `Update` unless the state forces an
/// exit from its own enter logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifecyclePhase {
    Enter,
    Update,
    Exit,
}

impl LifecyclePhase {
    pub fn is_finished(self) -> bool {
        self == LifecyclePhase::Exit
    }
}

/// Outcome of a lifecycle hook: keep running, or hand over to a successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transition<M> {
    Stay,
    To(M),
}

impl<M> Transition<M> {
    pub fn is_stay(&self) -> bool {
        matches!(self, Transition::Stay)
    }

    pub fn target(self) -> Option<M> {
        match self {
            Transition::Stay => None,
            Transition::To(next) => Some(next),
        }
    }

    /// Keep the first requested transition; fall back to `other` only when staying.
    pub fn or_else(self, other: impl FnOnce() -> Transition<M>) -> Transition<M> {
        match self {
            Transition::Stay => other(),
            to => to,
        }
    }
}

impl<M> From<Option<M>> for Transition<M> {
    fn from(value: Option<M>) -> Self {
        match value {
            Some(next) => Transition::To(next),
            None => Transition::Stay,
        }
    }
}

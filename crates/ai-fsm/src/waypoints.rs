use std::sync::{Arc, OnceLock};

use ai_core::Vec3;

use crate::world::{CheckpointMarker, Environment};

/// Ordered patrol route shared by every agent in a session.
///
/// Points are sorted ascending by marker name; markers sharing a name keep the order the
/// environment reported them in. The list never changes after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointRegistry {
    points: Vec<Vec3>,
}

impl WaypointRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_markers(markers: impl IntoIterator<Item = CheckpointMarker>) -> Self {
        let mut markers: Vec<CheckpointMarker> = markers.into_iter().collect();
        markers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            points: markers.into_iter().map(|m| m.position).collect(),
        }
    }

    pub fn from_environment(environment: &(impl Environment + ?Sized)) -> Self {
        let registry = Self::from_markers(environment.checkpoint_markers());
        if registry.is_empty() {
            tracing::warn!("environment has no checkpoint markers; patrols will hold position");
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Index of the waypoint closest to `from`. Ties go to the lower index.
    pub fn nearest_index(&self, from: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let d = point.distance_squared(from);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((index, d)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Successor of `current` along the loop. `0` for an empty registry.
    pub fn next_index(&self, current: usize) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        (current + 1) % self.points.len()
    }
}

/// Lazily built, session-wide [`WaypointRegistry`].
///
/// The first caller populates the cell from its environment; every later caller, whatever
/// environment it passes, receives the same shared registry.
#[derive(Debug, Default)]
pub struct WaypointCell {
    inner: OnceLock<Arc<WaypointRegistry>>,
}

impl WaypointCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    pub fn get_or_init(&self, environment: &(impl Environment + ?Sized)) -> Arc<WaypointRegistry> {
        Arc::clone(
            self.inner
                .get_or_init(|| Arc::new(WaypointRegistry::from_environment(environment))),
        )
    }

    pub fn get(&self) -> Option<Arc<WaypointRegistry>> {
        self.inner.get().cloned()
    }
}

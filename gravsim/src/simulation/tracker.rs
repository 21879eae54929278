//! Follow target and closest-body queries
//!
//! The followed body is held by id, never by reference. After every tick the
//! id is pushed through the tick's merge substitutions, so a followed body
//! that was absorbed is replaced by the body that absorbed it.

use log::warn;

use crate::simulation::collision::MergeLog;
use crate::simulation::states::{BodyId, NVec2};
use crate::simulation::store::BodyStore;

/// Live body closest to `point`, with its distance. Ties go to whichever comes first.
pub fn nearest_to(store: &BodyStore, point: NVec2) -> Option<(BodyId, f64)> {
    store
        .live()
        .map(|b| (b.id, (b.x - point).norm()))
        .fold(None, |best, (id, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((id, d)),
        })
}

#[derive(Debug, Default, Clone)]
pub struct FollowTracker {
    followed: Option<BodyId>,
    probe: Option<NVec2>,
    closest: Option<(BodyId, f64)>,
}

impl FollowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn followed(&self) -> Option<BodyId> {
        self.followed
    }

    pub fn set_followed(&mut self, id: Option<BodyId>) {
        self.followed = id;
    }

    pub fn set_probe(&mut self, point: Option<NVec2>) {
        self.probe = point;
        if point.is_none() {
            self.closest = None;
        }
    }

    /// Closest body to the probe point as of the last refresh
    pub fn closest(&self) -> Option<(BodyId, f64)> {
        self.closest
    }

    /// Re-point the followed id through `merges` and recompute the closest body.
    /// Must run after compaction.
    pub fn refresh(&mut self, store: &BodyStore, merges: &MergeLog) {
        if let Some(id) = self.followed {
            let resolved = if merges.is_empty() { id } else { merges.resolve(id) };
            if store.contains(resolved) {
                self.followed = Some(resolved);
            } else {
                warn!("followed body {id} is gone, dropping follow target");
                self.followed = None;
            }
        }

        self.refresh_closest(store);
    }

    pub fn refresh_closest(&mut self, store: &BodyStore) {
        self.closest = self.probe.and_then(|point| nearest_to(store, point));
    }

    /// Forget everything tied to the current population
    pub fn reset(&mut self) {
        if let Some(id) = self.followed.take() {
            warn!("population reset, no longer following {id}");
        }
        self.closest = None;
    }
}

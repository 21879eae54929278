//! Inelastic merge collisions
//!
//! Collision detection shares the displacement computed by the gravity pass.
//! A merge folds the absorbed body into the survivor, conserving mass,
//! momentum and area, and records the identity substitution so anything
//! pointing at the absorbed body can be re-pointed after compaction.

use std::collections::HashMap;

use log::trace;

use crate::simulation::states::{radius_from_mass, Body, BodyId};

/// Two discs touch or overlap once the gap between their rims is <= 0
pub fn collides(a: &Body, b: &Body, d: f64) -> bool {
    d - (a.radius + b.radius) <= 0.0
}

/// Fold `b` into `a`. `b` is marked dead and must not be visited again this tick.
pub fn merge_into(a: &mut Body, b: &mut Body, mass_base: f64) {
    let total = a.m + b.m;

    a.p += b.p;
    a.x = (a.x * a.m + b.x * b.m) / total;
    a.m = total;
    a.radius = radius_from_mass(a.m, mass_base);

    b.alive = false;

    trace!("merge: {} absorbed {} (m = {:.3}, r = {:.3})", a.id, b.id, a.m, a.radius);
}

/// Identity substitutions produced by merges during one tick
#[derive(Debug, Default, Clone)]
pub struct MergeLog {
    absorbed_by: HashMap<BodyId, BodyId>,
}

impl MergeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, absorbed: BodyId, survivor: BodyId) {
        self.absorbed_by.insert(absorbed, survivor);
    }

    /// Follow the substitution chain to the body that finally holds `id`
    pub fn resolve(&self, id: BodyId) -> BodyId {
        let mut current = id;
        // each id is absorbed at most once per tick, so the chain is acyclic
        while let Some(&next) = self.absorbed_by.get(&current) {
            current = next;
        }
        current
    }

    pub fn len(&self) -> usize {
        self.absorbed_by.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absorbed_by.is_empty()
    }

    pub fn clear(&mut self) {
        self.absorbed_by.clear();
    }
}

//! Body store: the owned, insertion-ordered population
//!
//! Bodies get an id from a monotonically increasing counter, so ids are never
//! reused even after `clear`. Removal is two-phase: the pairwise pass marks
//! bodies dead and `compact` drops them once the pass is over.

use crate::simulation::states::{Body, BodyId, NVec2};

#[derive(Debug, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    next_id: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new body, returning its id
    pub fn insert(&mut self, radius: f64, x: NVec2, p: NVec2, mass_base: f64) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, radius, x, p, mass_base));
        id
    }

    /// Drop every body; the id counter keeps running
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Remove all bodies marked dead, returning how many were dropped
    pub fn compact(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.alive);
        before - self.bodies.len()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id && b.alive)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn live(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(|b| b.alive)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

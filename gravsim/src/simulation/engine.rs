//! Simulation context: owns the population and runs ticks
//!
//! A tick runs, in order:
//! 1. integrate positions from the momentum of the previous tick
//! 2. one combined gravity + collision pass over the mass-ranked bodies
//! 3. compaction of bodies absorbed during the pass
//! 4. follow target / closest body refresh
//!
//! Callers only submit requests between ticks and read bodies through
//! [`BodyRef`] views.

use log::{debug, info};

use crate::simulation::collision::MergeLog;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::forces::{PassStats, RankedGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{mass_from_radius, BodyId, BodyRef, BodySnapshot, NVec2};
use crate::simulation::store::BodyStore;
use crate::simulation::tracker::{nearest_to, FollowTracker};

/// How the launch vector of an add request is interpreted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Launch {
    Momentum(NVec2), // taken verbatim
    Velocity(NVec2), // multiplied by the new body's mass
}

/// Last add request, kept for `repeat_last`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddRequest {
    pub radius: f64,
    pub launch: Launch,
}

#[derive(Debug)]
pub struct Simulation {
    params: Parameters,
    store: BodyStore,
    tracker: FollowTracker,
    merges: MergeLog,
    last_added: Option<AddRequest>,
    t: f64, // simulated time
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid(Parameters::default())
    }
}

impl Simulation {
    pub fn new(params: Parameters) -> SimResult<Self> {
        params.validate()?;
        Ok(Self::from_valid(params))
    }

    fn from_valid(params: Parameters) -> Self {
        Self {
            params,
            store: BodyStore::new(),
            tracker: FollowTracker::new(),
            merges: MergeLog::new(),
            last_added: None,
            t: 0.0,
            ticks: 0,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        self.params.resolution = resolution;
    }

    pub fn set_simulation_speed(&mut self, speed: f64) -> SimResult<()> {
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(SimError::InvalidParameter { name: "simulation_speed", value: speed });
        }
        self.params.simulation_speed = speed;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // population requests
    // ---------------------------------------------------------------------

    /// Create a body of `radius` at `position` carrying `momentum`
    pub fn add_body(&mut self, radius: f64, position: NVec2, momentum: NVec2) -> SimResult<BodyId> {
        self.add(AddRequest { radius, launch: Launch::Momentum(momentum) }, position)
    }

    /// Create a body launched with `velocity`; its momentum is `velocity * mass`
    pub fn add_body_with_velocity(&mut self, radius: f64, position: NVec2, velocity: NVec2) -> SimResult<BodyId> {
        self.add(AddRequest { radius, launch: Launch::Velocity(velocity) }, position)
    }

    /// Re-issue the last add request at `position`.
    /// Returns `Ok(None)` if nothing has been added yet.
    pub fn repeat_last(&mut self, position: NVec2) -> SimResult<Option<BodyId>> {
        match self.last_added {
            Some(req) => self.add(req, position).map(Some),
            None => Ok(None),
        }
    }

    pub fn last_added(&self) -> Option<AddRequest> {
        self.last_added
    }

    fn add(&mut self, req: AddRequest, position: NVec2) -> SimResult<BodyId> {
        let mass = mass_from_radius(req.radius, self.params.mass_base);
        if !(req.radius.is_finite() && req.radius > 0.0 && mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidRadius(req.radius));
        }
        finite("position", position)?;

        let momentum = match req.launch {
            Launch::Momentum(p) => p,
            Launch::Velocity(v) => finite("velocity", v)? * mass,
        };
        finite("momentum", momentum)?;

        let id = self.store.insert(req.radius, position, momentum, self.params.mass_base);
        self.last_added = Some(req);
        Ok(id)
    }

    /// Empty the population. The follow target is cleared, the last add
    /// request is kept.
    pub fn remove_all_bodies(&mut self) {
        info!("removing all {} bodies", self.store.len());
        self.store.clear();
        self.tracker.reset();
    }

    // ---------------------------------------------------------------------
    // ticking
    // ---------------------------------------------------------------------

    /// Advance by one tick of `elapsed` time with the given iteration budget
    pub fn step(&mut self, elapsed: f64, resolution: u32) -> SimResult<PassStats> {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(SimError::NegativeElapsed(elapsed));
        }

        euler_integrator(&mut self.store, elapsed);

        self.merges.clear();
        let gravity = RankedGravity::new(resolution, self.params.mass_base);
        let mut stats = gravity.apply(&mut self.store, &mut self.merges);

        let removed = self.store.compact();
        debug_assert_eq!(removed, stats.merges);
        debug_assert_eq!(removed, self.merges.len());
        stats.population = self.store.len();

        self.tracker.refresh(&self.store, &self.merges);

        self.t += elapsed;
        self.ticks += 1;

        debug!(
            "tick {}: k = {}, pairs = {}, merges = {}, bodies = {}",
            self.ticks, stats.originators, stats.pairs, stats.merges, stats.population
        );

        Ok(stats)
    }

    /// Advance by one frame: `frame_delta` is scaled by the simulation speed
    /// and the configured resolution is used
    pub fn advance(&mut self, frame_delta: f64) -> SimResult<PassStats> {
        let elapsed = frame_delta * self.params.simulation_speed;
        self.step(elapsed, self.params.resolution)
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // ---------------------------------------------------------------------
    // follow / proximity
    // ---------------------------------------------------------------------

    pub fn query_nearest(&self, point: NVec2) -> Option<BodyId> {
        nearest_to(&self.store, point).map(|(id, _)| id)
    }

    /// Follow `id`, or stop following with `None`
    pub fn set_followed(&mut self, id: Option<BodyId>) -> SimResult<()> {
        if let Some(id) = id {
            if !self.store.contains(id) {
                return Err(SimError::UnknownBody(id));
            }
        }
        self.tracker.set_followed(id);
        Ok(())
    }

    /// Follow whichever body is nearest to `point`
    pub fn follow_nearest(&mut self, point: NVec2) -> Option<BodyId> {
        let id = self.query_nearest(point)?;
        self.tracker.set_followed(Some(id));
        Some(id)
    }

    pub fn get_followed(&self) -> Option<BodyRef<'_>> {
        self.tracker
            .followed()
            .and_then(|id| self.store.get(id))
            .map(BodyRef::new)
    }

    /// Point the live closest-body indicator at `point`, or turn it off
    pub fn set_probe(&mut self, point: Option<NVec2>) {
        self.tracker.set_probe(point);
        self.tracker.refresh_closest(&self.store);
    }

    /// Closest body to the probe point, recomputed every tick
    pub fn closest(&self) -> Option<(BodyId, f64)> {
        self.tracker.closest()
    }

    // ---------------------------------------------------------------------
    // read access
    // ---------------------------------------------------------------------

    pub fn list_bodies(&self) -> impl Iterator<Item = BodyRef<'_>> + '_ {
        self.store.live().map(BodyRef::new)
    }

    pub fn body(&self, id: BodyId) -> Option<BodyRef<'_>> {
        self.store.get(id).map(BodyRef::new)
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.list_bodies().map(|b| b.snapshot()).collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.store.live().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.store.live().fold(NVec2::zeros(), |acc, b| acc + b.p)
    }
}

fn finite(field: &'static str, v: NVec2) -> SimResult<NVec2> {
    if v.x.is_finite() && v.y.is_finite() {
        Ok(v)
    } else {
        Err(SimError::NonFiniteVector { field, x: v.x, y: v.y })
    }
}

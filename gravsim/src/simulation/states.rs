//! Core state types for the gravity simulation.
//!
//! Defines the 2D body record and the read-only views handed out to callers:
//! - `NVec2`        2D vector (nalgebra) used for positions and momenta
//! - `BodyId`       stable identity assigned by the body store
//! - `Body`         owned body state, mutated only inside the simulation core
//! - `BodyRef`      borrowed read-only view for presentation
//! - `BodySnapshot` owned, serializable copy of a body

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;
use serde::Serialize;

pub type NVec2 = Vector2<f64>;

/// Mass of a disc of `radius` at the given `mass_base` (mass per unit area).
pub fn mass_from_radius(radius: f64, mass_base: f64) -> f64 {
    PI * radius * radius * mass_base
}

/// Radius of a disc holding `mass` at the given `mass_base`.
pub fn radius_from_mass(mass: f64, mass_base: f64) -> f64 {
    (mass / PI / mass_base).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec2, // position
    pub p: NVec2, // accumulated momentum, velocity = p / m
    pub m: f64, // mass
    pub radius: f64, // always radius_from_mass(m)
    pub(crate) alive: bool, // false once merged away, until compaction
}

impl Body {
    pub(crate) fn new(id: BodyId, radius: f64, x: NVec2, p: NVec2, mass_base: f64) -> Self {
        let m = mass_from_radius(radius, mass_base);
        Self {
            id,
            x,
            p,
            m,
            radius: radius_from_mass(m, mass_base),
            alive: true,
        }
    }

    pub fn velocity(&self) -> NVec2 {
        self.p / self.m
    }
}

/// Read-only view of a live body.
#[derive(Debug, Clone, Copy)]
pub struct BodyRef<'a> {
    body: &'a Body,
}

impl<'a> BodyRef<'a> {
    pub(crate) fn new(body: &'a Body) -> Self {
        Self { body }
    }

    pub fn id(&self) -> BodyId {
        self.body.id
    }

    pub fn position(&self) -> NVec2 {
        self.body.x
    }

    pub fn momentum(&self) -> NVec2 {
        self.body.p
    }

    pub fn velocity(&self) -> NVec2 {
        self.body.velocity()
    }

    pub fn mass(&self) -> f64 {
        self.body.m
    }

    pub fn radius(&self) -> f64 {
        self.body.radius
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.body.id,
            x: [self.body.x.x, self.body.x.y],
            p: [self.body.p.x, self.body.p.y],
            m: self.body.m,
            radius: self.body.radius,
        }
    }
}

/// Owned copy of a body, suitable for dumping with serde.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: [f64; 2],
    pub p: [f64; 2],
    pub m: f64,
    pub radius: f64,
}

//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - iteration budget for the ranked gravity pass (`resolution`),
//! - mass per unit area (`mass_base`),
//! - scale applied to frame time before each tick (`simulation_speed`),
//! - initial population size, density and seed

use crate::simulation::error::{SimError, SimResult};
use crate::simulation::states::NVec2;

pub const DEFAULT_MASS_BASE: f64 = 50.0;
pub const DEFAULT_RESOLUTION: u32 = 700;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub resolution: u32, // iteration budget, about resolution^2 pairs per tick
    pub mass_base: f64, // mass = pi * r^2 * mass_base
    pub simulation_speed: f64, // frame time multiplier
    pub initial_objects: usize, // bodies scattered at startup
    pub initial_density: f64, // bodies per 200x200 area
    pub seed: u64, // deterministic seed
    pub center: NVec2, // centre of the initial disc
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            mass_base: DEFAULT_MASS_BASE,
            simulation_speed: 1.0,
            initial_objects: 0,
            initial_density: 1.0,
            seed: 42,
            center: NVec2::zeros(),
        }
    }
}

impl Parameters {
    /// Reject values the physics cannot work with
    pub fn validate(&self) -> SimResult<()> {
        if !(self.mass_base.is_finite() && self.mass_base > 0.0) {
            return Err(SimError::InvalidParameter { name: "mass_base", value: self.mass_base });
        }
        if !(self.initial_density.is_finite() && self.initial_density > 0.0) {
            return Err(SimError::InvalidParameter { name: "initial_density", value: self.initial_density });
        }
        if !(self.simulation_speed.is_finite() && self.simulation_speed >= 0.0) {
            return Err(SimError::InvalidParameter { name: "simulation_speed", value: self.simulation_speed });
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(SimError::InvalidParameter { name: "center", value: self.center.norm() });
        }
        Ok(())
    }
}

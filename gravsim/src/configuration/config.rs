//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – tick settings (iteration budget, speed, frame rate)
//! - [`ParametersConfig`] – mass/area constant and the initial population
//! - [`BodyConfig`]       – explicitly placed bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is a valid (empty) scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   resolution: 700         # ~resolution^2 pair visits per tick
//!   simulation_speed: 1.0   # multiplier on frame time
//!   frame_rate: 60.0        # headless driver frames per second
//!
//! parameters:
//!   mass_base: 50.0         # mass = pi * r^2 * mass_base
//!   initial_objects: 1000   # bodies scattered in a disc at startup
//!   initial_density: 1.0    # bodies per 200x200 area
//!   seed: 42                # deterministic seed
//!   center: [ 0.0, 0.0 ]
//!
//! bodies:
//!   - x: [ -40.0, 0.0 ]
//!     radius: 4.0
//!     v: [ 0.0, 5.0 ]       # launch velocity, momentum = v * mass
//! ```

use serde::Deserialize;

use crate::simulation::error::{SimError, SimResult};
use crate::simulation::params::{Parameters, DEFAULT_MASS_BASE, DEFAULT_RESOLUTION};
use crate::simulation::states::NVec2;

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

fn default_one() -> f64 {
    1.0
}

fn default_frame_rate() -> f64 {
    60.0
}

fn default_mass_base() -> f64 {
    DEFAULT_MASS_BASE
}

fn default_seed() -> u64 {
    42
}

fn default_center() -> Vec<f64> {
    vec![0.0, 0.0]
}

/// Tick-level configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_resolution")]
    pub resolution: u32, // iteration budget for the ranked gravity pass
    #[serde(default = "default_one")]
    pub simulation_speed: f64, // frame time multiplier
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64, // frames per simulated second for the headless driver
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            simulation_speed: 1.0,
            frame_rate: default_frame_rate(),
        }
    }
}

/// Physical constant and initial population
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_mass_base")]
    pub mass_base: f64,
    #[serde(default)]
    pub initial_objects: usize,
    #[serde(default = "default_one")]
    pub initial_density: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_center")]
    pub center: Vec<f64>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            mass_base: default_mass_base(),
            initial_objects: 0,
            initial_density: 1.0,
            seed: default_seed(),
            center: default_center(),
        }
    }
}

/// A single explicitly placed body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position
    pub radius: f64, // mass follows from radius and mass_base
    #[serde(default = "default_center")]
    pub v: Vec<f64>, // launch velocity
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Runtime parameters, validated
    pub fn parameters(&self) -> SimResult<Parameters> {
        let params = Parameters {
            resolution: self.engine.resolution,
            mass_base: self.parameters.mass_base,
            simulation_speed: self.engine.simulation_speed,
            initial_objects: self.parameters.initial_objects,
            initial_density: self.parameters.initial_density,
            seed: self.parameters.seed,
            center: to_vec2("center", &self.parameters.center)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Fixed frame delta used by the headless driver
    pub fn frame_delta(&self) -> SimResult<f64> {
        let rate = self.engine.frame_rate;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SimError::InvalidParameter { name: "frame_rate", value: rate });
        }
        Ok(rate.recip())
    }
}

pub(crate) fn to_vec2(field: &'static str, v: &[f64]) -> SimResult<NVec2> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::MalformedVector { field, len: v.len() }),
    }
}

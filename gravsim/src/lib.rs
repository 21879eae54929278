pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyRef, BodySnapshot, NVec2};
pub use simulation::engine::{AddRequest, Launch, Simulation};
pub use simulation::error::{SimError, SimResult};
pub use simulation::forces::{interaction_budget, PassStats, RankedGravity};
pub use simulation::params::Parameters;
pub use simulation::scenario::{RunSummary, Scenario};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;

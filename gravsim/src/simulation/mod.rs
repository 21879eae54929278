pub mod states;
pub mod params;
pub mod error;
pub mod store;
pub mod engine;
pub mod forces;
pub mod collision;
pub mod integrator;
pub mod tracker;
pub mod scenario;

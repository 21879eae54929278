//! Error type for invalid requests made against the simulation core

use thiserror::Error;

use crate::simulation::states::BodyId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body radius must be positive and give a finite mass, got {0}")]
    InvalidRadius(f64),

    #[error("elapsed time must be finite and non-negative, got {0}")]
    NegativeElapsed(f64),

    #[error("`{field}` must be finite, got [{x}, {y}]")]
    NonFiniteVector { field: &'static str, x: f64, y: f64 },

    #[error("no live body with id {0}")]
    UnknownBody(BodyId),

    #[error("parameter `{name}` out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("`{field}` must have 2 components, got {len}")]
    MalformedVector { field: &'static str, len: usize },
}

pub type SimResult<T> = Result<T, SimError>;

//! Error types for the Progeny simulator.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("time step must be finite, got {0}")] NonFiniteTimeStep(f64),
    #[error("time step must be non-negative, got {0}")] NegativeTimeStep(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OdeError {
    #[error("dimension mismatch: state has {state} species, system has {system}")] DimensionMismatch { state: usize, system: usize },
    #[error("empty output grid")] EmptyGrid,
    #[error("output grid not strictly increasing at index {0}")] NonMonotonicGrid(usize),
    #[error("substeps must be at least 1")] ZeroSubsteps,
}

#[derive(Error, Debug)]
pub enum ProgenyError {
    #[error(transparent)] Param(#[from] ParamError),
    #[error(transparent)] Ode(#[from] OdeError),
}

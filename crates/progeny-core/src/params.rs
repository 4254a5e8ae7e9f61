//! Validated simulation parameters.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Parameters of a Monte Carlo run: population size, step length, step count.
///
/// The unsigned fields make negative counts unrepresentable; the fallible
/// constructor rejects the remaining invalid inputs (negative or non-finite
/// time steps) so the engine is never invoked with them.
///
/// # Examples
///
/// ```
/// use progeny_core::params::SimParams;
/// let params = SimParams::new(1000, 1.0, 100).unwrap();
/// assert_eq!(params.atom_count, 1000);
/// assert!(SimParams::new(1000, -1.0, 100).is_err());
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Number of atoms in the initial population.
    pub atom_count: usize,
    /// Simulated seconds per step.
    pub time_step: f64,
    /// Number of steps to run. The simulation always runs exactly this many.
    pub steps: usize,
}

impl SimParams {
    pub fn new(atom_count: usize, time_step: f64, steps: usize) -> Result<Self, ParamError> {
        if !time_step.is_finite() {
            return Err(ParamError::NonFiniteTimeStep(time_step));
        }
        if time_step < 0.0 {
            return Err(ParamError::NegativeTimeStep(time_step));
        }
        Ok(Self {
            atom_count,
            time_step,
            steps,
        })
    }
}

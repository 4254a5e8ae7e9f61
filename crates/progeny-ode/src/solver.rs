//! Implicit integrator for linear decay networks.
//!
//! Decay chains are stiff: Po-214 lives 1.6e-4 s while Pb-210 lives 7e8 s,
//! so explicit steppers would need absurd step counts on any useful grid.
//! For a *linear, lower-triangular* system `dy/dt = A·y` the backward-Euler
//! update `(I − h·A)·y' = y` solves by plain forward substitution, is
//! unconditionally stable, and keeps states non-negative.

use serde::Serialize;

use progeny_core::error::OdeError;

/// A solved trajectory, sampled on the caller's output grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Sample times, identical to the input grid.
    pub times: Vec<f64>,
    /// One state vector per sample time. `states[0]` is the initial
    /// condition at `times[0]`.
    pub states: Vec<Vec<f64>>,
}

impl Solution {
    /// Trajectory of one species across all samples.
    pub fn species(&self, index: usize) -> Vec<f64> {
        self.states.iter().map(|state| state[index]).collect()
    }
}

/// Integrate `dy/dt = A·y` for lower-triangular `A` over `grid`, taking
/// `substeps` backward-Euler sub-steps between consecutive grid points.
///
/// `grid[0]` is the initial time; the first returned state is `y0` itself.
pub fn solve_linear(
    matrix: &[Vec<f64>],
    y0: &[f64],
    grid: &[f64],
    substeps: usize,
) -> Result<Solution, OdeError> {
    if y0.len() != matrix.len() {
        return Err(OdeError::DimensionMismatch {
            state: y0.len(),
            system: matrix.len(),
        });
    }
    if grid.is_empty() {
        return Err(OdeError::EmptyGrid);
    }
    if substeps == 0 {
        return Err(OdeError::ZeroSubsteps);
    }
    for i in 1..grid.len() {
        if grid[i] <= grid[i - 1] {
            return Err(OdeError::NonMonotonicGrid(i));
        }
    }

    let mut y = y0.to_vec();
    let mut states = Vec::with_capacity(grid.len());
    states.push(y.clone());

    for window in grid.windows(2) {
        let h = (window[1] - window[0]) / substeps as f64;
        for _ in 0..substeps {
            backward_euler_step(matrix, &mut y, h);
        }
        states.push(y.clone());
    }

    Ok(Solution {
        times: grid.to_vec(),
        states,
    })
}

/// One implicit step, in place: solve `(I − h·A)·y' = y` by forward
/// substitution. Every pivot `1 − h·a_ii ≥ 1` because decay diagonals are
/// non-positive, so the division is always safe.
fn backward_euler_step(matrix: &[Vec<f64>], y: &mut [f64], h: f64) {
    for i in 0..y.len() {
        let mut rhs = y[i];
        for j in 0..i {
            // y[j] already holds the updated value for j < i.
            rhs += h * matrix[i][j] * y[j];
        }
        y[i] = rhs / (1.0 - h * matrix[i][i]);
    }
}

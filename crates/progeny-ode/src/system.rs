//! The simplified rate-equation model of the radon progeny chain.
//!
//! Eight species along the dominant path, coupled linearly:
//! Po-218 → Pb-214 → Bi-214 → Po-214 → Pb-210 → Bi-210 → Po-210 → Pb-206.
//! Minor branches (At-218, the Ti-210/Pb-209/Bi-209 side chain, the
//! Hg-206/Ti-206 side chain) are dropped; the dominant-branch feed
//! fractions are kept, so the dropped mass leaks out of the system
//! instead of being misattributed.

use std::f64::consts::LN_2;

use progeny_core::error::OdeError;
use progeny_core::isotope::Isotope;
use progeny_core::traits::OdeSystem;

use crate::solver::{Solution, solve_linear};

/// Number of modeled species.
pub const DIM: usize = 8;

/// The dominant decay path, in chain order.
pub const SPECIES: [Isotope; DIM] = [
    Isotope::Po218,
    Isotope::Pb214,
    Isotope::Bi214,
    Isotope::Po214,
    Isotope::Pb210,
    Isotope::Bi210,
    Isotope::Po210,
    Isotope::Pb206,
];

/// Fraction of each species' decays that feed the next species on the
/// dominant path. The complements are the dropped minor branches.
const RETENTION: [f64; DIM] = [
    0.9998,    // Po-218 → Pb-214 (0.0002 to At-218 dropped)
    1.0,       // Pb-214 → Bi-214
    0.976,     // Bi-214 → Po-214 (0.003 + 0.021 side branches dropped)
    1.0,       // Po-214 → Pb-210
    0.9999981, // Pb-210 → Bi-210 (1.9e-6 to Hg-206 dropped)
    0.999868,  // Bi-210 → Po-210 (1.32e-4 to Ti-206 dropped)
    1.0,       // Po-210 → Pb-206
    0.0,       // Pb-206 is terminal
];

/// Linear model `dy/dt = A·y` of the dominant radon progeny path.
///
/// Decay constants are `λ = ln 2 / h` with half-lives taken from the
/// isotope registry, so the two models share one source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct RadonSeries {
    lambda: [f64; DIM],
}

impl RadonSeries {
    pub fn new() -> Self {
        let mut lambda = [0.0; DIM];
        for (i, iso) in SPECIES.iter().enumerate() {
            let half_life = iso.half_life();
            if half_life > 0.0 {
                lambda[i] = LN_2 / half_life;
            }
        }
        Self { lambda }
    }

    /// Decay constant of the `i`-th species, per second. 0 for Pb-206.
    pub fn decay_constant(&self, i: usize) -> f64 {
        self.lambda[i]
    }

    /// The lower-bidiagonal rate matrix `A`: `a[i][i] = −λ_i`,
    /// `a[i][i−1] = retention_{i−1}·λ_{i−1}`.
    pub fn rate_matrix(&self) -> Vec<Vec<f64>> {
        let mut matrix = vec![vec![0.0; DIM]; DIM];
        for i in 0..DIM {
            matrix[i][i] = -self.lambda[i];
            if i > 0 {
                matrix[i][i - 1] = RETENTION[i - 1] * self.lambda[i - 1];
            }
        }
        matrix
    }

    /// Solve from a pure Po-218 initial inventory of `atoms` over `grid`,
    /// with `substeps` implicit sub-steps between grid points.
    pub fn solve(&self, atoms: f64, grid: &[f64], substeps: usize) -> Result<Solution, OdeError> {
        let mut y0 = vec![0.0; DIM];
        y0[0] = atoms;
        solve_linear(&self.rate_matrix(), &y0, grid, substeps)
    }
}

impl Default for RadonSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl OdeSystem for RadonSeries {
    fn dim(&self) -> usize {
        DIM
    }

    fn rhs(&self, _t: f64, y: &[f64], dydt: &mut [f64]) {
        for i in 0..DIM {
            dydt[i] = -self.lambda[i] * y[i];
            if i > 0 {
                dydt[i] += RETENTION[i - 1] * self.lambda[i - 1] * y[i - 1];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_constants_from_registry() {
        let series = RadonSeries::new();
        for (i, iso) in SPECIES.iter().enumerate() {
            let h = iso.half_life();
            let expected = if h > 0.0 { LN_2 / h } else { 0.0 };
            assert_eq!(series.decay_constant(i), expected, "{iso}");
        }
    }

    #[test]
    fn terminal_species_has_zero_rate() {
        let series = RadonSeries::new();
        assert_eq!(series.decay_constant(DIM - 1), 0.0);
        assert_eq!(SPECIES[DIM - 1], Isotope::Pb206);
    }

    #[test]
    fn rate_matrix_is_lower_bidiagonal() {
        let matrix = RadonSeries::new().rate_matrix();
        for i in 0..DIM {
            for j in 0..DIM {
                let expected_zero = !(j == i || j + 1 == i);
                if expected_zero {
                    assert_eq!(matrix[i][j], 0.0, "unexpected entry at ({i},{j})");
                }
            }
            assert!(matrix[i][i] <= 0.0, "positive diagonal at {i}");
        }
    }

    #[test]
    fn column_outflow_never_exceeds_decay_rate() {
        // Column sum is −(1 − retention_i)·λ_i: non-positive, and zero only
        // where the full decay feeds the next species.
        let series = RadonSeries::new();
        let matrix = series.rate_matrix();
        for j in 0..DIM {
            let column_sum: f64 = (0..DIM).map(|i| matrix[i][j]).sum();
            assert!(column_sum <= 0.0, "column {j} gains mass");
            let expected = -(1.0 - RETENTION[j]) * series.decay_constant(j);
            assert!(
                (column_sum - expected).abs() < 1e-12,
                "column {j}: {column_sum} vs {expected}"
            );
        }
    }

    #[test]
    fn rhs_matches_rate_matrix() {
        let series = RadonSeries::new();
        let matrix = series.rate_matrix();
        let y: Vec<f64> = (0..DIM).map(|i| (i + 1) as f64 * 10.0).collect();

        let mut dydt = [0.0; DIM];
        series.rhs(0.0, &y, &mut dydt);

        for i in 0..DIM {
            let expected: f64 = (0..DIM).map(|j| matrix[i][j] * y[j]).sum();
            assert!(
                (dydt[i] - expected).abs() < 1e-9,
                "row {i}: {} vs {expected}",
                dydt[i]
            );
        }
    }

    #[test]
    fn solve_settles_into_pb210_on_the_original_grid() {
        // 20_000 s is ~100 half-lives for everything upstream of Pb-210
        // (h = 7.01e8 s), so the inventory piles up there, minus the
        // dropped minor-branch mass (~2.4%, mostly Bi-214's side branches).
        let series = RadonSeries::new();
        let grid: Vec<f64> = (0..=100).map(|i| i as f64 * 200.0).collect();
        let solution = series.solve(1e5, &grid, 10).unwrap();

        let last = solution.states.last().unwrap();
        let pb210 = last[4];
        assert!(
            (95_000.0..99_000.0).contains(&pb210),
            "Pb-210 inventory: {pb210}"
        );
        // Po-218 is ~107 half-lives gone; Pb-214 and Bi-214 carry small
        // transient-equilibrium tails; Pb-210 has barely started feeding
        // downstream.
        assert!(last[0] < 1.0, "Po-218 remaining: {}", last[0]);
        assert!(last[1] < 100.0, "Pb-214 remaining: {}", last[1]);
        assert!(last[2] < 300.0, "Bi-214 remaining: {}", last[2]);
        assert!(last[7] < 10.0, "Pb-206 already: {}", last[7]);
    }
}

//! Shared helpers for integration tests.

use rand::SeedableRng;
use rand::rngs::StdRng;

use progeny_core::census::Census;
use progeny_core::params::SimParams;

/// Seeded generator for reproducible scenarios.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Run a full Monte Carlo simulation with a fixed seed.
pub fn run(atom_count: usize, time_step: f64, steps: usize, seed: u64) -> Vec<Census> {
    let params = SimParams::new(atom_count, time_step, steps).expect("valid parameters");
    progeny_mc::simulate(&params, &mut rng(seed))
}

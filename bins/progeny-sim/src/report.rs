//! Text rendering of simulation results.

use std::fmt::Write;

use progeny_core::census::Census;
use progeny_ode::Solution;
use progeny_ode::system::SPECIES;

/// Render census snapshots as a step report, isotopes in first-seen order:
///
/// ```text
/// Step 0:
///   Ra-222: 1000 atoms
/// ```
pub fn render_censuses(snapshots: &[Census]) -> String {
    let mut out = String::new();
    for (step, census) in snapshots.iter().enumerate() {
        let _ = writeln!(out, "Step {step}:");
        for (isotope, count) in census.iter() {
            let _ = writeln!(out, "  {isotope}: {count} atoms");
        }
    }
    out
}

/// Render a solved trajectory as a fixed-width table, one row per sample.
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>12}", "t (s)");
    for species in SPECIES {
        let _ = write!(out, " {:>12}", species.symbol());
    }
    let _ = writeln!(out);
    for (time, state) in solution.times.iter().zip(&solution.states) {
        let _ = write!(out, "{time:>12.1}");
        for value in state {
            let _ = write!(out, " {value:>12.2}");
        }
        let _ = writeln!(out);
    }
    out
}

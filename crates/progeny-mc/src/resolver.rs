//! Per-atom transition sampling.
//!
//! Pure functions over `(Isotope, Δt, rng)`. Decay-or-not and branch
//! choice consume separate, independent uniform draws; collapsing them
//! into one draw would change the joint distribution.

use rand::{Rng, RngCore};

use progeny_core::isotope::Isotope;
use progeny_core::traits::TransitionModel;

/// Probability that an atom of `isotope` decays within `dt` seconds.
///
/// `1 − 2^(−Δt/h)` for half-life `h > 0`; terminal species short-circuit
/// to 0 before any division. At `dt == h` the result is exactly 0.5.
pub fn decay_probability(isotope: Isotope, dt: f64) -> f64 {
    let half_life = isotope.half_life();
    if half_life == 0.0 {
        return 0.0;
    }
    1.0 - (-dt / half_life).exp2()
}

/// Select the branch a decaying atom follows, from a uniform draw `u ∈ [0,1)`.
///
/// Scans branches in table order and returns the target of the first
/// branch whose cumulative threshold is strictly greater than `u`. A draw
/// exactly equal to a threshold therefore falls into the *next* branch.
///
/// # Panics
///
/// Panics if `isotope` is terminal. Stable species never decay, so
/// reaching branch selection for one is a programming defect.
pub fn select_branch(isotope: Isotope, u: f64) -> Isotope {
    for branch in isotope.branches() {
        if branch.threshold > u {
            return branch.target;
        }
    }
    unreachable!("cumulative thresholds end at 1.0 and uniform draws are below 1.0")
}

/// Advance one atom by one time step.
///
/// Draws `u1 ∈ [0,1)`; when `u1 ≥ decay_probability(isotope, dt)` the atom
/// survives the step unchanged. Otherwise a second, independent draw picks
/// the branch. Exactly one draw is consumed on the no-decay path and
/// exactly two on the decay path, keeping per-atom stream consumption
/// predictable for independent-stream schemes.
pub fn attempt_transition<R: Rng + ?Sized>(isotope: Isotope, dt: f64, rng: &mut R) -> Isotope {
    let u1: f64 = rng.gen_range(0.0..1.0);
    if u1 >= decay_probability(isotope, dt) {
        return isotope;
    }
    let u2: f64 = rng.gen_range(0.0..1.0);
    select_branch(isotope, u2)
}

/// The production transition model: [`TransitionModel`] implemented by the
/// pure sampling functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarlo;

impl MonteCarlo {
    pub fn new() -> Self {
        Self
    }
}

impl TransitionModel for MonteCarlo {
    fn decay_probability(&self, isotope: Isotope, dt: f64) -> f64 {
        decay_probability(isotope, dt)
    }

    fn attempt_transition(&self, isotope: Isotope, dt: f64, rng: &mut dyn RngCore) -> Isotope {
        attempt_transition(isotope, dt, rng)
    }
}

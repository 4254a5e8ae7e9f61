//! Trait interfaces between crates.
//!
//! - [`TransitionModel`] — per-atom stochastic transition (progeny-mc
//!   implements)
//! - [`OdeSystem`] — right-hand side of a first-order ODE system
//!   (progeny-ode implements)

use rand::RngCore;

use crate::isotope::Isotope;

/// Stochastic single-atom transition over one time step.
///
/// The random source is an explicitly passed handle, never ambient state:
/// callers control seeding, and parallel schemes can hand each worker an
/// independent stream.
pub trait TransitionModel: Send + Sync {
    /// Probability that an atom of `isotope` decays within `dt` seconds.
    ///
    /// Identically 0 for terminal species, for any `dt`.
    fn decay_probability(&self, isotope: Isotope, dt: f64) -> f64;

    /// Advance one atom by one step: returns the atom's next isotope, which
    /// is `isotope` itself when no decay occurs.
    fn attempt_transition(&self, isotope: Isotope, dt: f64, rng: &mut dyn RngCore) -> Isotope;
}

/// Right-hand side of a first-order ODE system `dy/dt = f(t, y)`.
///
/// The deterministic companion model exposes its rate equations through
/// this interface; a solver consumes it together with an initial-condition
/// vector and an output time grid.
pub trait OdeSystem {
    /// Number of state variables.
    fn dim(&self) -> usize;

    /// Evaluate `f(t, y)` into `dydt`. Both slices have length [`dim`](Self::dim).
    fn rhs(&self, t: f64, y: &[f64], dydt: &mut [f64]);
}

//! Time-stepped population simulation.

use rand::Rng;
use tracing::debug;

use progeny_core::census::Census;
use progeny_core::isotope::Isotope;
use progeny_core::params::SimParams;

use crate::resolver;

/// An ordered, fixed-size collection of atoms, each tagged with its
/// current isotope and nothing else. Decay is memoryless: the current
/// species fully determines the next draw, so no per-atom history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    atoms: Vec<Isotope>,
}

impl Population {
    /// `count` atoms, all starting at the chain source.
    pub fn new(count: usize) -> Self {
        Self::of_isotope(count, Isotope::SOURCE)
    }

    /// `count` atoms of an arbitrary species, for scenario setups.
    pub fn of_isotope(count: usize, isotope: Isotope) -> Self {
        Self {
            atoms: vec![isotope; count],
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Current isotope of every atom, in stable index order.
    pub fn atoms(&self) -> &[Isotope] {
        &self.atoms
    }

    /// Advance every atom by one step of `dt` seconds, in place.
    ///
    /// Iteration order does not affect correctness: each outcome depends
    /// only on the atom's own species and its own fresh draws.
    pub fn step<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) {
        for atom in &mut self.atoms {
            *atom = resolver::attempt_transition(*atom, dt, rng);
        }
    }

    /// Snapshot the current per-isotope occupancy.
    pub fn census(&self) -> Census {
        Census::from_atoms(&self.atoms)
    }
}

/// Run a complete simulation: exactly `params.steps` steps with a census
/// after each. Always runs the full step count, even once the population
/// has settled into terminal species.
pub fn simulate<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> Vec<Census> {
    debug!(
        atoms = params.atom_count,
        dt = params.time_step,
        steps = params.steps,
        "starting Monte Carlo run"
    );
    let mut population = Population::new(params.atom_count);
    let mut snapshots = Vec::with_capacity(params.steps);
    for _ in 0..params.steps {
        population.step(params.time_step, rng);
        snapshots.push(population.census());
    }
    debug!("Monte Carlo run complete");
    snapshots
}

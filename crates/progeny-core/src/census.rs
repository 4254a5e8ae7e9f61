//! Per-step population snapshots.

use serde::{Deserialize, Serialize};

use crate::isotope::Isotope;

/// One isotope's entry in a [`Census`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CensusEntry {
    pub isotope: Isotope,
    pub count: u64,
}

/// Snapshot of how many atoms occupy each isotope after a time step.
///
/// Only isotopes with at least one atom appear, in order of first
/// appearance in the underlying atom array — the order the reporting
/// layer prints them in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Census {
    entries: Vec<CensusEntry>,
}

impl Census {
    /// Count every atom's current isotope. Each occurrence increments the
    /// isotope's counter by exactly one, so the first occurrence registers
    /// a count of 1.
    pub fn from_atoms(atoms: &[Isotope]) -> Self {
        let mut entries: Vec<CensusEntry> = Vec::new();
        for &atom in atoms {
            match entries.iter_mut().find(|e| e.isotope == atom) {
                Some(entry) => entry.count += 1,
                None => entries.push(CensusEntry {
                    isotope: atom,
                    count: 1,
                }),
            }
        }
        Self { entries }
    }

    /// Count for a given isotope; 0 if absent from the snapshot.
    pub fn count(&self, isotope: Isotope) -> u64 {
        self.entries
            .iter()
            .find(|e| e.isotope == isotope)
            .map_or(0, |e| e.count)
    }

    /// Total atoms across all isotopes. Always equals the population size.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Isotope, u64)> + '_ {
        self.entries.iter().map(|e| (e.isotope, e.count))
    }

    /// Number of distinct isotopes present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

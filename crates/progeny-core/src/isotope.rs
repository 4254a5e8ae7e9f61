//! Static registry of the radon decay chain.
//!
//! Every species is a variant of the closed [`Isotope`] enum; half-lives and
//! decay branches are table-driven lookups. Branch lists use cumulative
//! probability thresholds in table order, so selecting a branch is a scan for
//! the first threshold strictly greater than a uniform draw.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single species in the radon decay chain.
///
/// # Examples
///
/// ```
/// use progeny_core::isotope::Isotope;
/// assert_eq!(Isotope::SOURCE, Isotope::Ra222);
/// assert_eq!(Isotope::Po218.half_life(), 186.0);
/// assert!(Isotope::Pb206.is_terminal());
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Isotope {
    Ra222,
    Po218,
    Pb214,
    At218,
    Rn218,
    Bi214,
    Po214,
    Ti210,
    Pb209,
    Bi209,
    Ti205,
    Pb210,
    Hg206,
    Ti206,
    Bi210,
    Po210,
    Pb206,
}

/// One decay branch: the cumulative probability threshold up to and
/// including this branch, and the daughter species it produces.
///
/// Thresholds within an isotope's branch list are strictly increasing and
/// the last is exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub threshold: f64,
    pub target: Isotope,
}

impl Isotope {
    /// The chain's source species: every population starts here.
    pub const SOURCE: Isotope = Isotope::Ra222;

    /// All species in chain-table order.
    pub const ALL: [Isotope; 17] = [
        Isotope::Ra222,
        Isotope::Po218,
        Isotope::Pb214,
        Isotope::At218,
        Isotope::Rn218,
        Isotope::Bi214,
        Isotope::Po214,
        Isotope::Ti210,
        Isotope::Pb209,
        Isotope::Bi209,
        Isotope::Ti205,
        Isotope::Pb210,
        Isotope::Hg206,
        Isotope::Ti206,
        Isotope::Bi210,
        Isotope::Po210,
        Isotope::Pb206,
    ];

    /// Half-life in seconds. `0.0` designates a stable, terminal species.
    pub fn half_life(self) -> f64 {
        match self {
            Isotope::Ra222 => 330_350.0,
            Isotope::Po218 => 186.0,
            Isotope::Pb214 => 1610.0,
            Isotope::At218 => 1.5,
            Isotope::Rn218 => 0.035,
            Isotope::Bi214 => 1194.0,
            Isotope::Po214 => 1.643e-4,
            Isotope::Ti210 => 78.0,
            Isotope::Pb209 => 11_710.0,
            Isotope::Bi209 => 5.99e26,
            Isotope::Ti205 => 0.0,
            Isotope::Pb210 => 7.01e8,
            Isotope::Hg206 => 499.2,
            Isotope::Ti206 => 252.12,
            Isotope::Bi210 => 433_000.0,
            Isotope::Po210 => 1.19557e7,
            Isotope::Pb206 => 0.0,
        }
    }

    /// Decay branches in table order, with cumulative thresholds.
    ///
    /// Empty for terminal species. Order matters: a draw equal to a
    /// threshold falls into the *next* branch.
    pub fn branches(self) -> &'static [Branch] {
        match self {
            Isotope::Ra222 => &[Branch { threshold: 1.0, target: Isotope::Po218 }],
            Isotope::Po218 => &[
                Branch { threshold: 0.9998, target: Isotope::Pb214 },
                Branch { threshold: 1.0, target: Isotope::At218 },
            ],
            Isotope::Pb214 => &[Branch { threshold: 1.0, target: Isotope::Bi214 }],
            Isotope::At218 => &[
                Branch { threshold: 0.999, target: Isotope::Bi214 },
                Branch { threshold: 1.0, target: Isotope::Rn218 },
            ],
            Isotope::Rn218 => &[Branch { threshold: 1.0, target: Isotope::Po214 }],
            Isotope::Bi214 => &[
                Branch { threshold: 0.003, target: Isotope::Pb210 },
                Branch { threshold: 0.024, target: Isotope::Ti210 },
                Branch { threshold: 1.0, target: Isotope::Po214 },
            ],
            Isotope::Po214 => &[Branch { threshold: 1.0, target: Isotope::Pb210 }],
            Isotope::Ti210 => &[
                Branch { threshold: 0.009, target: Isotope::Pb209 },
                Branch { threshold: 1.0, target: Isotope::Pb210 },
            ],
            Isotope::Pb209 => &[Branch { threshold: 1.0, target: Isotope::Bi209 }],
            Isotope::Bi209 => &[Branch { threshold: 1.0, target: Isotope::Ti205 }],
            Isotope::Ti205 => &[],
            Isotope::Pb210 => &[
                Branch { threshold: 1.9e-6, target: Isotope::Hg206 },
                Branch { threshold: 1.0, target: Isotope::Bi210 },
            ],
            Isotope::Hg206 => &[Branch { threshold: 1.0, target: Isotope::Ti206 }],
            Isotope::Ti206 => &[Branch { threshold: 1.0, target: Isotope::Pb206 }],
            Isotope::Bi210 => &[
                Branch { threshold: 0.000132, target: Isotope::Ti206 },
                Branch { threshold: 1.0, target: Isotope::Po210 },
            ],
            Isotope::Po210 => &[Branch { threshold: 1.0, target: Isotope::Pb206 }],
            Isotope::Pb206 => &[],
        }
    }

    /// Whether this species is stable (half-life 0, no branches).
    pub fn is_terminal(self) -> bool {
        self.branches().is_empty()
    }

    /// Display name, e.g. `"Ra-222"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Isotope::Ra222 => "Ra-222",
            Isotope::Po218 => "Po-218",
            Isotope::Pb214 => "Pb-214",
            Isotope::At218 => "At-218",
            Isotope::Rn218 => "Rn-218",
            Isotope::Bi214 => "Bi-214",
            Isotope::Po214 => "Po-214",
            Isotope::Ti210 => "Ti-210",
            Isotope::Pb209 => "Pb-209",
            Isotope::Bi209 => "Bi-209",
            Isotope::Ti205 => "Ti-205",
            Isotope::Pb210 => "Pb-210",
            Isotope::Hg206 => "Hg-206",
            Isotope::Ti206 => "Ti-206",
            Isotope::Bi210 => "Bi-210",
            Isotope::Po210 => "Po-210",
            Isotope::Pb206 => "Pb-206",
        }
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_species_once() {
        let mut seen = Vec::new();
        for iso in Isotope::ALL {
            assert!(!seen.contains(&iso), "{iso} listed twice");
            seen.push(iso);
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn source_is_ra222() {
        assert_eq!(Isotope::SOURCE, Isotope::Ra222);
    }

    #[test]
    fn terminal_iff_zero_half_life() {
        for iso in Isotope::ALL {
            assert_eq!(
                iso.is_terminal(),
                iso.half_life() == 0.0,
                "terminal/half-life mismatch for {iso}"
            );
        }
    }

    #[test]
    fn exactly_two_terminal_species() {
        let terminals: Vec<Isotope> = Isotope::ALL
            .into_iter()
            .filter(|iso| iso.is_terminal())
            .collect();
        assert_eq!(terminals, vec![Isotope::Ti205, Isotope::Pb206]);
    }

    #[test]
    fn thresholds_strictly_increasing_ending_at_one() {
        for iso in Isotope::ALL {
            let branches = iso.branches();
            if branches.is_empty() {
                continue;
            }
            let mut prev = 0.0;
            for b in branches {
                assert!(
                    b.threshold > prev,
                    "{iso}: threshold {} not above {}",
                    b.threshold,
                    prev
                );
                prev = b.threshold;
            }
            assert_eq!(
                branches.last().unwrap().threshold,
                1.0,
                "{iso}: final threshold must be 1.0"
            );
        }
    }

    #[test]
    fn branch_probabilities_match_ratios() {
        // Successive threshold differences recover the per-branch
        // probabilities; spot-check every multi-branch species.
        fn probs(iso: Isotope) -> Vec<f64> {
            let mut prev = 0.0;
            iso.branches()
                .iter()
                .map(|b| {
                    let p = b.threshold - prev;
                    prev = b.threshold;
                    p
                })
                .collect()
        }

        let po218 = probs(Isotope::Po218);
        assert!((po218[0] - 0.9998).abs() < 1e-12);
        assert!((po218[1] - 0.0002).abs() < 1e-12);

        let at218 = probs(Isotope::At218);
        assert!((at218[0] - 0.999).abs() < 1e-12);
        assert!((at218[1] - 0.001).abs() < 1e-12);

        let bi214 = probs(Isotope::Bi214);
        assert!((bi214[0] - 0.003).abs() < 1e-12);
        assert!((bi214[1] - 0.021).abs() < 1e-12);
        assert!((bi214[2] - 0.976).abs() < 1e-12);

        let ti210 = probs(Isotope::Ti210);
        assert!((ti210[0] - 0.009).abs() < 1e-12);
        assert!((ti210[1] - 0.991).abs() < 1e-12);

        let pb210 = probs(Isotope::Pb210);
        assert!((pb210[0] - 1.9e-6).abs() < 1e-12);
        assert!((pb210[1] - 0.9999981).abs() < 1e-9);

        let bi210 = probs(Isotope::Bi210);
        assert!((bi210[0] - 0.000132).abs() < 1e-12);
        assert!((bi210[1] - 0.999868).abs() < 1e-12);
    }

    #[test]
    fn branch_targets_are_downstream() {
        // No species decays to itself.
        for iso in Isotope::ALL {
            for b in iso.branches() {
                assert_ne!(b.target, iso, "{iso} branches to itself");
            }
        }
    }

    #[test]
    fn chain_reaches_a_terminal_from_every_species() {
        // Follow first branches from each species; the chain must bottom
        // out at a stable isotope well within the species count.
        for start in Isotope::ALL {
            let mut current = start;
            let mut hops = 0;
            while !current.is_terminal() {
                current = current.branches()[0].target;
                hops += 1;
                assert!(hops <= 17, "no terminal reachable from {start}");
            }
        }
    }

    #[test]
    fn display_matches_symbol() {
        assert_eq!(Isotope::Ra222.to_string(), "Ra-222");
        assert_eq!(Isotope::Po214.to_string(), "Po-214");
        assert_eq!(Isotope::Pb206.to_string(), "Pb-206");
    }

    #[test]
    fn half_lives_spot_check() {
        assert_eq!(Isotope::Ra222.half_life(), 330_350.0);
        assert_eq!(Isotope::Po214.half_life(), 1.643e-4);
        assert_eq!(Isotope::Bi209.half_life(), 5.99e26);
        assert_eq!(Isotope::Ti205.half_life(), 0.0);
    }
}

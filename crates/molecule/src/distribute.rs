// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use periodic_table::Element;

use crate::{
    bond::{form_bond, AtomIndex, BondKind, MoleculeGraph},
    LewisError, Topology, UnsupportedReason,
};

/// Upper bound on the loose electrons left for the central atom, eight rings of lone-pair slots.
pub const MAX_LOOSE_ELECTRONS: u32 = 64;

/// Where the electron pool of a molecule went.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub center: AtomIndex,
    /// Outer atoms in the order they were written in the formula.
    pub outer: Vec<AtomIndex>,
    /// `Σ expected valence electrons − charge`, before any bond is formed.
    pub pool: i64,
    /// Loose electrons given to every outer atom.
    pub saturation_target: u32,
    /// Loose electrons left over for the central atom.
    pub center_loose: u32,
}

/// Loose electrons an outer atom needs once it holds its one sigma bond: none for hydrogen and
/// helium, whose shell is full at two, and three lone pairs for everything else.
pub fn saturation_target(outer: Element) -> u32 {
    match outer {
        Element::Hydrogen | Element::Helium => 0,
        _ => 6,
    }
}

/// Bonds the central atom to every outer atom and spreads the remaining electrons as lone pairs,
/// outer atoms first.
pub fn distribute(
    graph: &mut MoleculeGraph,
    topology: &Topology,
    charge: i32,
) -> Result<Distribution, LewisError> {
    let mut centers = graph
        .node_indices()
        .filter(|&index| graph[index].element() == topology.center);
    let center = centers.next().ok_or(UnsupportedReason::CenterCount {
        symbol: topology.center.symbol(),
        count: 0,
    })?;
    let stray_centers = centers.count();
    if stray_centers > 0 {
        log::warn!(
            "{stray_centers} extra {} atoms are left unbonded; only the first one is central",
            topology.center
        );
    }

    let outer: Vec<AtomIndex> = graph
        .node_indices()
        .filter(|&index| graph[index].element() == topology.outer)
        .collect();
    if outer.is_empty() {
        return Err(UnsupportedReason::ElementCount(1).into());
    }

    // Widened so that any i32 charge fits.
    let pool = graph
        .node_weights()
        .map(|atom| i64::from(atom.expected_valence_electrons()))
        .sum::<i64>()
        - i64::from(charge);

    let mut remaining = pool;
    for &index in &outer {
        form_bond(graph, center, index, BondKind::Single);
        remaining -= i64::from(BondKind::Single.shared_electrons());
    }

    let target = saturation_target(topology.outer);
    let required = target * outer.len() as u32;
    if remaining < 0 || remaining.div_euclid(outer.len() as i64) < i64::from(target) {
        return Err(LewisError::InsufficientElectrons {
            available: remaining,
            required,
            outer_count: outer.len(),
        });
    }

    for &index in &outer {
        graph[index].set_loose_electrons(target);
    }
    remaining -= i64::from(required);
    if remaining > i64::from(MAX_LOOSE_ELECTRONS) {
        return Err(UnsupportedReason::TooManyLooseElectrons {
            count: remaining,
            limit: MAX_LOOSE_ELECTRONS,
        }
        .into());
    }

    let center_loose = remaining as u32;
    graph[center].set_loose_electrons(center_loose);

    log::debug!(
        "Distributed a pool of {pool} electrons: {} bonds, {target} loose per {}, {center_loose} \
         loose on {}",
        outer.len(),
        topology.outer,
        topology.center
    );

    Ok(Distribution {
        center,
        outer,
        pool,
        saturation_target: target,
        center_loose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_formula, select_topology, Atom, FrequencyPolicy};
    use periodic_table::PeriodicTable;

    fn run(formula: &str, charge: i32) -> (MoleculeGraph, Result<Distribution, LewisError>) {
        let table = PeriodicTable::embedded().unwrap();
        let parsed = parse_formula(&table, formula, FrequencyPolicy::default()).unwrap();
        let topology = select_topology(&table, &parsed.frequencies).unwrap();
        let mut graph = MoleculeGraph::default();
        for atom in parsed.atoms {
            graph.add_node(atom);
        }
        let distribution = distribute(&mut graph, &topology, charge);
        (graph, distribution)
    }

    #[test]
    fn carbon_dioxide_fills_both_oxygens() {
        let (graph, distribution) = run("CO2", 0);
        let distribution = distribution.unwrap();
        assert_eq!(distribution.pool, 16);
        assert_eq!(distribution.saturation_target, 6);
        assert_eq!(distribution.center_loose, 0);
        assert_eq!(graph.edge_count(), 2);

        let carbon = &graph[distribution.center];
        assert_eq!(carbon.sigma_bonds(), 2);
        assert_eq!(carbon.formal_charge(), 2);
        for &index in &distribution.outer {
            assert_eq!(graph[index].loose_electrons(), 6);
            assert_eq!(graph[index].formal_charge(), -1);
        }
    }

    #[test]
    fn odd_pool_leaves_a_single_electron_on_the_center() {
        let (graph, distribution) = run("NO2", 0);
        let distribution = distribution.unwrap();
        assert_eq!(distribution.pool, 17);
        assert_eq!(graph[distribution.center].loose_electrons(), 1);
    }

    #[test]
    fn positive_charge_can_starve_the_outer_atoms() {
        let (_, distribution) = run("CO2", 1);
        assert_eq!(
            distribution.unwrap_err(),
            LewisError::InsufficientElectrons {
                available: 11,
                required: 12,
                outer_count: 2,
            }
        );
    }

    #[test]
    fn pool_too_small_for_the_sigma_bonds() {
        let (_, distribution) = run("CH4", 5);
        assert_eq!(
            distribution.unwrap_err(),
            LewisError::InsufficientElectrons {
                available: -5,
                required: 0,
                outer_count: 4,
            }
        );
    }

    #[test]
    fn extreme_charges_are_rejected() {
        let (_, distribution) = run("H2O", i32::MAX);
        assert_eq!(
            distribution.unwrap_err(),
            LewisError::InsufficientElectrons {
                available: 8 - i64::from(i32::MAX) - 4,
                required: 0,
                outer_count: 2,
            }
        );

        let (_, distribution) = run("H2O", i32::MIN);
        assert_eq!(
            distribution.unwrap_err(),
            LewisError::UnsupportedMolecule(UnsupportedReason::TooManyLooseElectrons {
                count: 8 - i64::from(i32::MIN) - 4,
                limit: MAX_LOOSE_ELECTRONS,
            })
        );
    }

    #[test]
    fn central_loose_electrons_are_capped() {
        // Water keeps 4 + (-charge) loose electrons on the oxygen.
        let (graph, distribution) = run("H2O", -60);
        let distribution = distribution.unwrap();
        assert_eq!(distribution.center_loose, MAX_LOOSE_ELECTRONS);
        assert_eq!(graph[distribution.center].loose_electrons(), 64);

        let (_, distribution) = run("H2O", -61);
        assert!(matches!(
            distribution,
            Err(LewisError::UnsupportedMolecule(
                UnsupportedReason::TooManyLooseElectrons { count: 65, .. }
            ))
        ));

        let (_, distribution) = run("H2O", -20_000_000);
        assert!(matches!(
            distribution,
            Err(LewisError::UnsupportedMolecule(
                UnsupportedReason::TooManyLooseElectrons { .. }
            ))
        ));
    }

    #[test]
    fn extra_central_atoms_stay_unbonded() {
        // `C` is overwritten by the last term, so the topology check sees one carbon.
        let (graph, distribution) = run("CH3CH3", 0);
        let distribution = distribution.unwrap();
        assert_eq!(distribution.outer.len(), 6);
        assert_eq!(distribution.pool, 14);
        assert_eq!(distribution.center_loose, 2);

        let unbonded: Vec<&Atom> = graph
            .node_weights()
            .filter(|atom| atom.sigma_bonds() == 0)
            .collect();
        assert_eq!(unbonded.len(), 1);
        assert_eq!(unbonded[0].element(), Element::Carbon);
    }

    #[test]
    fn helium_and_hydrogen_need_no_lone_pairs() {
        assert_eq!(saturation_target(Element::Hydrogen), 0);
        assert_eq!(saturation_target(Element::Helium), 0);
        assert_eq!(saturation_target(Element::Chlorine), 6);
    }
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use petgraph::visit::EdgeRef;
use periodic_table::PeriodicTable;

use crate::{
    bond::{AtomIndex, Bond, MoleculeGraph},
    distribute, layout, parse_formula, select_topology, Atom, Distribution, ElementFrequencies,
    FrequencyPolicy, Layout, LewisError, Topology,
};

/// Knobs of a single evaluation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub frequency_policy: FrequencyPolicy,
}

/// Parses the text of a molecular charge, such as `"0"`, `"+1"` or `"-2"`.
pub fn parse_charge(text: &str) -> Result<i32, LewisError> {
    text.trim()
        .parse()
        .map_err(|_| LewisError::InvalidCharge {
            text: text.to_owned(),
        })
}

/// The complete state of one formula evaluation: what was asked, what was parsed, and the
/// distributed and laid out molecule.
///
/// An evaluation owns all of its atoms and bonds; nothing is shared with other evaluations, so any
/// number of them can run against the same [`PeriodicTable`].
#[derive(Debug, Clone)]
pub struct Evaluation {
    formula: String,
    charge: i32,
    frequencies: ElementFrequencies,
    graph: MoleculeGraph,
    topology: Topology,
    distribution: Distribution,
    layout: Layout,
}

impl Evaluation {
    /// Runs every stage, from parsing to layout, stopping at the first failure.
    pub fn run(
        table: &PeriodicTable,
        formula: &str,
        charge: i32,
        options: &EvaluationOptions,
    ) -> Result<Self, LewisError> {
        let parsed = parse_formula(table, formula, options.frequency_policy)?;
        let topology = select_topology(table, &parsed.frequencies)?;

        let mut graph = MoleculeGraph::with_capacity(parsed.atoms.len(), parsed.atoms.len());
        for atom in parsed.atoms {
            graph.add_node(atom);
        }

        let distribution = distribute(&mut graph, &topology, charge)?;
        let layout = layout(&mut graph, &distribution);

        log::info!(
            "Evaluated {} (charge {charge}): {} atoms, {} bonds, {} lone electrons",
            parsed.frequencies,
            graph.node_count(),
            graph.edge_count(),
            layout.lone_pairs.len()
        );

        Ok(Self {
            formula: formula.trim().to_owned(),
            charge,
            frequencies: parsed.frequencies,
            graph,
            topology,
            distribution,
            layout,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn frequencies(&self) -> &ElementFrequencies {
        &self.frequencies
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn graph(&self) -> &MoleculeGraph {
        &self.graph
    }

    pub fn atom(&self, index: AtomIndex) -> &Atom {
        &self.graph[index]
    }

    pub fn center(&self) -> &Atom {
        self.atom(self.distribution.center)
    }

    pub fn outer(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.distribution.outer.iter().map(|&index| self.atom(index))
    }

    /// All atoms in formula order.
    pub fn atoms(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> + '_ {
        self.graph
            .node_indices()
            .map(|index| (index, &self.graph[index]))
    }

    /// All bonds in the order they were formed.
    pub fn bonds(&self) -> impl Iterator<Item = (AtomIndex, AtomIndex, &Bond)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
    }
}

/// Evaluates `formula` with the given charge.  Shorthand for [`Evaluation::run`].
pub fn evaluate(
    table: &PeriodicTable,
    formula: &str,
    charge: i32,
    options: &EvaluationOptions,
) -> Result<Evaluation, LewisError> {
    Evaluation::run(table, formula, charge, options)
}


// End of File

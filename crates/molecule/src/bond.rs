// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use petgraph::graph;

use crate::Atom;

/// A graph representation of a molecule.
/// It is undirected because bonds have no direction.  Each node stores an atom, and each edge
/// stores the bond between its endpoints.  Nodes and edges are only ever appended, so their indices
/// follow parse and bonding order.
pub type MoleculeGraph = graph::UnGraph<Atom, Bond>;

/// An index that represents an atom in the molecule.
pub type AtomIndex = graph::NodeIndex;

/// An index that represents a bond in the molecule.
pub type BondIndex = graph::EdgeIndex;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BondKind {
    /// One shared pair (a sigma bond).
    Single,
    /// A sigma bond with a pi bond on top of it.
    Double,
}

impl BondKind {
    pub fn order(self) -> u8 {
        match self {
            BondKind::Single => 1,
            BondKind::Double => 2,
        }
    }

    /// Electrons taken from the pool to form a bond of this kind.
    pub fn shared_electrons(self) -> u32 {
        2 * u32::from(self.order())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bond {
    pub kind: BondKind,
}

/// Bonds two atoms, recording the bond in the graph and counting it on both endpoints.
///
/// A `Single` bond adds one sigma bond to each atom; a `Double` bond adds one sigma and one pi
/// bond to each.
pub fn form_bond(graph: &mut MoleculeGraph, a: AtomIndex, b: AtomIndex, kind: BondKind) -> BondIndex {
    for index in [a, b] {
        let atom = &mut graph[index];
        atom.add_sigma_bond();
        if kind == BondKind::Double {
            atom.add_pi_bond();
        }
    }
    graph.add_edge(a, b, Bond { kind })
}


// End of File

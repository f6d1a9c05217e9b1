// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use molecule::{BondKind, Evaluation};
use serde::Serialize;
use ultraviolet::Vec2;

/// A read-only, serializable snapshot of an evaluation: the electron accounting of every atom and
/// the geometry of the drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub formula: String,
    pub charge: i32,
    pub center: &'static str,
    pub outer: &'static str,
    pub electron_pool: i64,
    pub atoms: Vec<DiagramAtom>,
    pub bonds: Vec<DiagramBond>,
    pub lone_pairs: Vec<DiagramMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramAtom {
    pub index: usize,
    pub label: &'static str,
    pub position: [f32; 2],
    pub expected_valence_electrons: u32,
    pub loose_electrons: u32,
    pub sigma_bonds: u32,
    pub pi_bonds: u32,
    pub formal_charge: i32,
    pub total_valence_electrons: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramBondKind {
    Single,
    Double,
}

impl From<BondKind> for DiagramBondKind {
    fn from(kind: BondKind) -> Self {
        match kind {
            BondKind::Single => DiagramBondKind::Single,
            BondKind::Double => DiagramBondKind::Double,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramBond {
    pub kind: DiagramBondKind,
    pub start: [f32; 2],
    pub end: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramMarker {
    pub atom: usize,
    pub position: [f32; 2],
}

fn point(v: Vec2) -> [f32; 2] {
    [v.x, v.y]
}

impl Diagram {
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        let layout = evaluation.layout();

        let atoms = layout
            .atoms
            .iter()
            .map(|placement| {
                let atom = evaluation.atom(placement.atom);
                DiagramAtom {
                    index: placement.atom.index(),
                    label: placement.label,
                    position: point(placement.pos),
                    expected_valence_electrons: atom.expected_valence_electrons(),
                    loose_electrons: atom.loose_electrons(),
                    sigma_bonds: atom.sigma_bonds(),
                    pi_bonds: atom.pi_bonds(),
                    formal_charge: atom.formal_charge(),
                    total_valence_electrons: atom.total_valence_electrons(),
                }
            })
            .collect();

        let bonds = layout
            .bonds
            .iter()
            .map(|segment| DiagramBond {
                kind: segment.kind.into(),
                start: point(segment.start),
                end: point(segment.end),
            })
            .collect();

        let lone_pairs = layout
            .lone_pairs
            .iter()
            .map(|marker| DiagramMarker {
                atom: marker.atom.index(),
                position: point(marker.pos),
            })
            .collect();

        Self {
            formula: evaluation.formula().to_owned(),
            charge: evaluation.charge(),
            center: evaluation.topology().center.symbol(),
            outer: evaluation.topology().outer.symbol(),
            electron_pool: evaluation.distribution().pool,
            atoms,
            bonds,
            lone_pairs,
        }
    }
}

// End of File

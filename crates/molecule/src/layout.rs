// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Planar placement of atoms, bonds and lone electrons.
//!
//! Coordinates are unitless: the central atom sits at the origin and the outer atoms on the unit
//! circle around it.  The y axis points up.

use std::f32::consts::TAU;

use petgraph::visit::EdgeRef;
use ultraviolet::Vec2;

use crate::{
    bond::{AtomIndex, BondKind, MoleculeGraph},
    BoundingBox, Distribution,
};

/// Fraction of a bond left empty at each end, so the line stops short of the atom labels.
pub const BOND_INSET: f32 = 1.0 / 3.0;

/// Distance from an atom to its lone-pair slots.
pub const LONE_PAIR_DISTANCE: f32 = 0.2;

/// Offset of each dot of a pair from the slot's axis.
pub const LONE_PAIR_NUDGE: f32 = 0.05;

/// Extra distance for each ring of slots beyond the first eight electrons.
pub const LONE_PAIR_RING_STEP: f32 = 0.1;

/// Slot directions, filled in order: left, bottom, right, top.
const LONE_PAIR_SLOTS: [Vec2; 4] = [
    Vec2 { x: -1.0, y: 0.0 },
    Vec2 { x: 0.0, y: -1.0 },
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: 0.0, y: 1.0 },
];

#[derive(Debug, Clone, PartialEq)]
pub struct AtomPlacement {
    pub atom: AtomIndex,
    pub label: &'static str,
    pub pos: Vec2,
    pub formal_charge: i32,
}

/// The visible part of a bond: the middle third of the segment between its atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct BondSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub kind: BondKind,
}

/// One lone electron, drawn as a dot next to its atom.
#[derive(Debug, Clone, PartialEq)]
pub struct LonePairMarker {
    pub atom: AtomIndex,
    pub pos: Vec2,
}

/// Everything a render sink needs to draw the diagram.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub atoms: Vec<AtomPlacement>,
    pub bonds: Vec<BondSegment>,
    pub lone_pairs: Vec<LonePairMarker>,
    pub bounds: BoundingBox,
}

/// Position of outer atom `i` of `n`, evenly spaced on the unit circle starting at `(1, 0)`.
pub fn outer_position(i: usize, n: usize) -> Vec2 {
    let angle = TAU * i as f32 / n as f32;
    Vec2::new(angle.cos(), angle.sin())
}

/// The drawn part of the bond from `p` to `q`.
pub fn bond_segment(p: Vec2, q: Vec2) -> (Vec2, Vec2) {
    (p + (q - p) * BOND_INSET, q + (p - q) * BOND_INSET)
}

/// Position of the `k`-th lone electron around an atom at `center`.
///
/// Electrons pair up in the slots left, bottom, right, top; the two electrons of a slot sit on
/// either side of the slot's axis.  The ninth electron onwards starts a new ring further out.
pub fn lone_electron_position(center: Vec2, k: usize) -> Vec2 {
    let direction = LONE_PAIR_SLOTS[(k / 2) % LONE_PAIR_SLOTS.len()];
    let ring = (k / (2 * LONE_PAIR_SLOTS.len())) as f32;
    let perpendicular = Vec2::new(-direction.y, direction.x);
    let side = if k % 2 == 0 { 1.0 } else { -1.0 };

    center
        + direction * (LONE_PAIR_DISTANCE + ring * LONE_PAIR_RING_STEP)
        + perpendicular * (LONE_PAIR_NUDGE * side)
}

/// Places every atom of a distributed molecule and derives the bond and lone-pair geometry.
///
/// Atoms that took no part in the distribution stay at the origin.
pub fn layout(graph: &mut MoleculeGraph, distribution: &Distribution) -> Layout {
    graph[distribution.center].set_pos(Vec2::zero());
    let n = distribution.outer.len();
    for (i, &index) in distribution.outer.iter().enumerate() {
        graph[index].set_pos(outer_position(i, n));
    }

    let mut layout = Layout::default();

    for index in graph.node_indices() {
        let atom = &graph[index];
        log::trace!("{} #{} at {:?}", atom.symbol(), index.index(), atom.pos());

        layout.bounds.enclose_point(atom.pos());
        layout.atoms.push(AtomPlacement {
            atom: index,
            label: atom.symbol(),
            pos: atom.pos(),
            formal_charge: atom.formal_charge(),
        });

        for k in 0..atom.loose_electrons() as usize {
            let pos = lone_electron_position(atom.pos(), k);
            layout.bounds.enclose_point(pos);
            layout.lone_pairs.push(LonePairMarker { atom: index, pos });
        }
    }

    for edge in graph.edge_references() {
        let (start, end) = bond_segment(graph[edge.source()].pos(), graph[edge.target()].pos());
        layout.bonds.push(BondSegment {
            start,
            end,
            kind: edge.weight().kind,
        });
    }

    layout
}


// End of File

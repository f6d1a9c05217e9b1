// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Lewis-structure engine
//!
//! Turns a condensed formula and a molecular charge into an electron-accounted, laid out Lewis
//! structure.  The stages run strictly in order, each taking the output of the previous one:
//!
//! 1. [`parse_formula`] expands the formula into element counts and atoms,
//! 2. [`select_topology`] picks the central and outer elements,
//! 3. [`distribute`] forms the bonds and hands out lone pairs,
//! 4. [`layout()`] places everything on the plane.
//!
//! [`Evaluation::run`] chains the four and keeps their results together.

pub use crate::{
    atom::{expected_valence_electrons, Atom},
    bond::{form_bond, AtomIndex, Bond, BondIndex, BondKind, MoleculeGraph},
    bounding_box::BoundingBox,
    distribute::{distribute, saturation_target, Distribution, MAX_LOOSE_ELECTRONS},
    error::{LewisError, UnsupportedReason},
    formula::{parse_formula, ElementFrequencies, FrequencyPolicy, ParsedFormula, MAX_ATOMS},
    layout::{layout, AtomPlacement, BondSegment, Layout, LonePairMarker},
    molecule::{evaluate, parse_charge, Evaluation, EvaluationOptions},
    topology::{select_topology, Topology},
};

mod atom;
mod bond;
mod bounding_box;
mod distribute;
mod error;
mod formula;
pub mod layout;
mod molecule;
mod topology;

// End of File

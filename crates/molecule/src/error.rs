// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use thiserror::Error;

/// Every way an evaluation can fail.  Each of these ends the evaluation: there are no partial
/// results and no fallback diagrams.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LewisError {
    /// The molecular charge is not an integer.
    #[error("Invalid charge {text:?}: expected an integer such as 0, 1 or -2")]
    InvalidCharge { text: String },

    /// The formula does not follow the `<Symbol><Count>...` notation.
    #[error("Malformed formula {formula:?}: {reason}")]
    MalformedFormula { formula: String, reason: String },

    /// The formula names a symbol the element reference does not know.
    #[error("Unknown element {symbol:?}")]
    UnknownElement { symbol: String },

    /// The molecule is outside of the simple center/outer topology this engine can draw.
    #[error("Unsupported molecule: {0}")]
    UnsupportedMolecule(UnsupportedReason),

    /// The electron pool cannot fill the octet of every outer atom.
    #[error(
        "Not enough electrons: {available} left after bonding, but {outer_count} outer atoms need \
         {required}"
    )]
    InsufficientElectrons {
        available: i64,
        required: u32,
        outer_count: usize,
    },
}

/// The topology rule that rejected a molecule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnsupportedReason {
    #[error("expected exactly two distinct elements, found {0}")]
    ElementCount(usize),

    #[error("{first} and {second} share an electronegativity of {value}, so neither is central")]
    ElectronegativityTie {
        first: &'static str,
        second: &'static str,
        value: f64,
    },

    #[error("{0} has no electronegativity value")]
    MissingElectronegativity(&'static str),

    #[error("the central element {symbol} must appear exactly once, found {count}")]
    CenterCount { symbol: &'static str, count: u32 },

    #[error("{count} atoms exceeds the limit of {limit}")]
    TooManyAtoms { count: u64, limit: u32 },

    #[error("{count} loose electrons on the central atom exceeds the limit of {limit}")]
    TooManyLooseElectrons { count: i64, limit: u32 },
}

impl From<UnsupportedReason> for LewisError {
    fn from(reason: UnsupportedReason) -> Self {
        LewisError::UnsupportedMolecule(reason)
    }
}

// End of File

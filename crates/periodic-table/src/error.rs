// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while loading an element reference dataset.
///
/// All of these are fatal at startup: without a valid reference no formula can be evaluated.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The dataset file could not be read.
    #[error("Failed to read element dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset is not a JSON document of the expected shape.
    #[error("Malformed element dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A record names an atomic number outside `1..=118`.
    #[error("Element record {symbol:?} has unknown atomic number {number}")]
    UnknownAtomicNumber { symbol: String, number: u8 },

    /// A record's symbol does not belong to its atomic number.
    #[error("Element record {symbol:?} does not match atomic number {number} ({expected})")]
    SymbolMismatch {
        symbol: String,
        number: u8,
        expected: &'static str,
    },

    /// Two records describe the same element.
    #[error("Element {0} appears more than once in the dataset")]
    DuplicateElement(&'static str),
}

// End of File

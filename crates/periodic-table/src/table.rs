// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Element, ReferenceError};

/// The dataset compiled into the crate, in the same format accepted by [`PeriodicTable::load`].
const EMBEDDED_DATASET: &str = include_str!("../assets/elements.json");

/// Static properties of one element, as read from the reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub element: Element,
    pub name: String,
    /// Column of the element in the printed periodic table (1 to 18).
    pub xpos: u8,
    /// Row of the element in the printed periodic table.  The lanthanide and actinide series are
    /// printed below the table proper, on rows 9 and 10.
    pub ypos: u8,
    /// Pauling electronegativity, when one is defined for the element.
    pub electronegativity: Option<f64>,
}

impl ElementRecord {
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }
}

#[derive(Deserialize)]
struct Dataset {
    elements: Vec<RawRecord>,
}

// Datasets in the wild carry many more fields (mass, density, shells, ...); those are ignored.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    symbol: String,
    number: u8,
    xpos: u8,
    ypos: u8,
    #[serde(default)]
    electronegativity_pauling: Option<f64>,
}

/// Read-only lookup table from element to [`ElementRecord`].
///
/// A table is loaded once and then only shared by reference, so any number of evaluations can
/// consult it at the same time.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    records: Vec<Option<ElementRecord>>,
}

impl PeriodicTable {
    /// Parses the dataset compiled into the crate.
    pub fn embedded() -> Result<Self, ReferenceError> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Reads and parses a dataset from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("Loaded element dataset from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Parses a `{ "elements": [...] }` document.  Elements missing from the document are simply
    /// absent from the table.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let mut records = vec![None; Element::MAX as usize];

        for raw in dataset.elements {
            let element = Element::from_atomic_number(raw.number).ok_or_else(|| {
                ReferenceError::UnknownAtomicNumber {
                    symbol: raw.symbol.clone(),
                    number: raw.number,
                }
            })?;
            if element.symbol() != raw.symbol {
                return Err(ReferenceError::SymbolMismatch {
                    symbol: raw.symbol,
                    number: raw.number,
                    expected: element.symbol(),
                });
            }

            let slot = &mut records[element as usize - 1];
            if slot.is_some() {
                return Err(ReferenceError::DuplicateElement(element.symbol()));
            }
            *slot = Some(ElementRecord {
                element,
                name: raw.name,
                xpos: raw.xpos,
                ypos: raw.ypos,
                electronegativity: raw.electronegativity_pauling,
            });
        }

        Ok(Self { records })
    }

    pub fn get(&self, element: Element) -> Option<&ElementRecord> {
        self.records[element as usize - 1].as_ref()
    }

    /// Looks up an element by its case-sensitive symbol.  Returns `None` both for text that is not
    /// a chemical symbol and for elements the loaded dataset leaves out.
    pub fn lookup(&self, symbol: &str) -> Option<&ElementRecord> {
        Element::from_symbol(symbol).and_then(|element| self.get(element))
    }

    pub fn len(&self) -> usize {
        self.records.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.iter().flatten()
    }
}


// End of File

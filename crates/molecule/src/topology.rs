// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use periodic_table::{Element, PeriodicTable};

use crate::{ElementFrequencies, LewisError, UnsupportedReason};

/// The star topology of a two-element molecule: one central atom bonded to every atom of the outer
/// element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Topology {
    pub center: Element,
    pub outer: Element,
}

/// Decides which of the two elements of a formula sits in the middle.
///
/// Hydrogen is always outer.  Otherwise the less electronegative element is central, and a tie
/// leaves the molecule unsupported.  The central element must occur exactly once.
pub fn select_topology(
    table: &PeriodicTable,
    frequencies: &ElementFrequencies,
) -> Result<Topology, LewisError> {
    let elements: Vec<Element> = frequencies.elements().collect();
    let [first, second] = elements[..] else {
        return Err(UnsupportedReason::ElementCount(elements.len()).into());
    };

    let topology = if first == Element::Hydrogen {
        Topology {
            center: second,
            outer: first,
        }
    } else if second == Element::Hydrogen {
        Topology {
            center: first,
            outer: second,
        }
    } else {
        let first_en = electronegativity(table, first)?;
        let second_en = electronegativity(table, second)?;
        if first_en < second_en {
            Topology {
                center: first,
                outer: second,
            }
        } else if second_en < first_en {
            Topology {
                center: second,
                outer: first,
            }
        } else {
            return Err(UnsupportedReason::ElectronegativityTie {
                first: first.symbol(),
                second: second.symbol(),
                value: first_en,
            }
            .into());
        }
    };

    let center_count = frequencies.get(topology.center).unwrap_or(0);
    if center_count != 1 {
        return Err(UnsupportedReason::CenterCount {
            symbol: topology.center.symbol(),
            count: center_count,
        }
        .into());
    }

    log::debug!(
        "Selected {} as center and {} as outer element",
        topology.center,
        topology.outer
    );
    Ok(topology)
}

fn electronegativity(table: &PeriodicTable, element: Element) -> Result<f64, LewisError> {
    let record = table.get(element).ok_or_else(|| LewisError::UnknownElement {
        symbol: element.symbol().to_owned(),
    })?;
    record
        .electronegativity
        .ok_or_else(|| UnsupportedReason::MissingElectronegativity(element.symbol()).into())
}


// End of File

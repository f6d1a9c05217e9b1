// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Parsing of condensed formulas such as `H2O`, `NH3` or `SF6`.
//!
//! A formula is a sequence of terms.  Each term is an element symbol (one uppercase letter followed
//! by any number of lowercase letters) and an optional decimal count, defaulting to one.  Nothing
//! else is accepted: no groups, no charges, no whitespace between terms.

use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use periodic_table::{Element, PeriodicTable};

use crate::{Atom, LewisError, UnsupportedReason};

/// Upper bound on the number of atoms a formula may expand to.
pub const MAX_ATOMS: u32 = 1024;

/// How a symbol that appears in more than one term is counted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FrequencyPolicy {
    /// The count of the latest term replaces the earlier one, so `HOH` records one hydrogen even
    /// though two hydrogen atoms are created.
    #[default]
    LastOccurrence,
    /// Counts of repeated terms are summed, so `HOH` records two hydrogens.
    Accumulate,
}

/// Element counts of a formula, in the order each element first appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementFrequencies(IndexMap<Element, u32>);

impl ElementFrequencies {
    pub fn get(&self, element: Element) -> Option<u32> {
        self.0.get(&element).copied()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        self.0.iter().map(|(&element, &count)| (element, count))
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.keys().copied()
    }

    /// Writes the counts back out as a formula, omitting counts of one.
    pub fn to_formula(&self) -> String {
        let mut formula = String::new();
        for (element, count) in self.iter() {
            formula.push_str(element.symbol());
            if count != 1 {
                let _ = write!(formula, "{count}");
            }
        }
        formula
    }
}

impl fmt::Display for ElementFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formula())
    }
}

/// The result of parsing a formula: the element counts and one [`Atom`] per atom, in the order the
/// terms were written.
#[derive(Debug, Clone, Default)]
pub struct ParsedFormula {
    pub frequencies: ElementFrequencies,
    pub atoms: Vec<Atom>,
}

struct Term<'a> {
    symbol: &'a str,
    count: u32,
    rest: &'a str,
}

pub fn parse_formula(
    table: &PeriodicTable,
    formula: &str,
    policy: FrequencyPolicy,
) -> Result<ParsedFormula, LewisError> {
    let formula = formula.trim();
    let malformed = |reason: String| LewisError::MalformedFormula {
        formula: formula.to_owned(),
        reason,
    };

    if formula.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(malformed("cannot start with a number".to_owned()));
    }

    let mut parsed = ParsedFormula::default();
    let mut atom_count: u64 = 0;
    let mut rest = formula;

    while !rest.is_empty() {
        let offset = formula.len() - rest.len();
        let term = split_term(rest)
            .map_err(|reason| malformed(format!("{reason} at offset {offset}")))?;

        let record = table
            .lookup(term.symbol)
            .ok_or_else(|| LewisError::UnknownElement {
                symbol: term.symbol.to_owned(),
            })?;

        atom_count += u64::from(term.count);
        if atom_count > u64::from(MAX_ATOMS) {
            return Err(UnsupportedReason::TooManyAtoms {
                count: atom_count,
                limit: MAX_ATOMS,
            }
            .into());
        }

        let frequencies = &mut parsed.frequencies.0;
        match policy {
            FrequencyPolicy::LastOccurrence => {
                if let Some(previous) = frequencies.insert(record.element, term.count) {
                    log::warn!(
                        "{} is repeated in {formula:?}; its count {previous} is replaced by {}",
                        term.symbol,
                        term.count
                    );
                }
            }
            FrequencyPolicy::Accumulate => {
                *frequencies.entry(record.element).or_insert(0) += term.count;
            }
        }

        parsed
            .atoms
            .extend((0..term.count).map(|_| Atom::new(record)));
        rest = term.rest;
    }

    log::debug!(
        "Parsed {formula:?} into {} ({} atoms)",
        parsed.frequencies,
        parsed.atoms.len()
    );
    Ok(parsed)
}

/// Splits the leading `<Symbol><Count>?` term off `text`.
fn split_term(text: &str) -> Result<Term<'_>, String> {
    let bytes = text.as_bytes();
    match text.chars().next() {
        Some(c) if c.is_ascii_uppercase() => {}
        Some(c) if c.is_ascii_digit() => return Err(format!("unexpected count {c:?}")),
        Some(c) => return Err(format!("unexpected character {c:?}")),
        None => return Err("missing element symbol".to_owned()),
    }

    let symbol_end = 1 + bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_lowercase())
        .count();
    let count_end = symbol_end
        + bytes[symbol_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

    let symbol = &text[..symbol_end];
    let digits = &text[symbol_end..count_end];
    let count = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u32>()
            .map_err(|_| format!("count {digits} of {symbol} is too large"))?
    };
    if count == 0 {
        return Err(format!("count of {symbol} must be positive"));
    }

    Ok(Term {
        symbol,
        count,
        rest: &text[count_end..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(formula: &str) -> Result<ParsedFormula, LewisError> {
        let table = PeriodicTable::embedded().unwrap();
        parse_formula(&table, formula, FrequencyPolicy::default())
    }

    fn symbols(parsed: &ParsedFormula) -> Vec<&'static str> {
        parsed.atoms.iter().map(Atom::symbol).collect()
    }

    #[test]
    fn counts_default_to_one() {
        let parsed = parse("H2O").unwrap();
        assert_eq!(parsed.frequencies.get(Element::Hydrogen), Some(2));
        assert_eq!(parsed.frequencies.get(Element::Oxygen), Some(1));
        assert_eq!(symbols(&parsed), ["H", "H", "O"]);
    }

    #[test]
    fn multi_letter_symbols_and_multi_digit_counts() {
        let parsed = parse("C12Cl10").unwrap();
        assert_eq!(parsed.frequencies.get(Element::Carbon), Some(12));
        assert_eq!(parsed.frequencies.get(Element::Chlorine), Some(10));
        assert_eq!(parsed.atoms.len(), 22);
    }

    #[test]
    fn single_symbol_without_count() {
        let parsed = parse("N").unwrap();
        assert_eq!(parsed.frequencies.to_formula(), "N");
        assert_eq!(parsed.atoms.len(), 1);
    }

    #[test]
    fn frequencies_write_back_to_the_same_formula() {
        for formula in ["H2O", "NH3", "CO2", "SF6", "XeF4", "CCl4", "BF3", "PCl5", "OH", "U"] {
            assert_eq!(parse(formula).unwrap().frequencies.to_formula(), formula);
        }
    }

    #[test]
    fn repeated_symbol_keeps_the_last_count() {
        let parsed = parse("H2OH").unwrap();
        assert_eq!(parsed.frequencies.get(Element::Hydrogen), Some(1));
        assert_eq!(parsed.frequencies.to_formula(), "HO");
        assert_eq!(symbols(&parsed), ["H", "H", "O", "H"]);
    }

    #[test]
    fn repeated_symbol_accumulates_when_asked() {
        let table = PeriodicTable::embedded().unwrap();
        let parsed = parse_formula(&table, "H2OH", FrequencyPolicy::Accumulate).unwrap();
        assert_eq!(parsed.frequencies.get(Element::Hydrogen), Some(3));
        assert_eq!(parsed.frequencies.to_formula(), "H3O");
        assert_eq!(parsed.atoms.len(), 4);
    }

    #[test]
    fn leading_digit_is_malformed() {
        let err = parse("2H").unwrap_err();
        assert_eq!(
            err,
            LewisError::MalformedFormula {
                formula: "2H".to_owned(),
                reason: "cannot start with a number".to_owned(),
            }
        );
    }

    #[test]
    fn stray_characters_are_malformed() {
        for formula in ["h2o", "H2 O", "H2O+", "(OH)2", "H2Ö"] {
            assert!(
                matches!(parse(formula), Err(LewisError::MalformedFormula { .. })),
                "{formula} should be malformed"
            );
        }

        let err = parse("H2 O").unwrap_err();
        assert!(err.to_string().contains("offset 2"), "{err}");
    }

    #[test]
    fn zero_and_oversized_counts_are_malformed() {
        assert!(matches!(parse("H0O"), Err(LewisError::MalformedFormula { .. })));
        assert!(matches!(
            parse("H99999999999"),
            Err(LewisError::MalformedFormula { .. })
        ));
    }

    #[test]
    fn huge_molecules_are_unsupported() {
        assert_eq!(
            parse("C2000").unwrap_err(),
            LewisError::UnsupportedMolecule(UnsupportedReason::TooManyAtoms {
                count: 2000,
                limit: MAX_ATOMS,
            })
        );
    }

    #[test]
    fn unknown_symbol_is_named() {
        assert_eq!(
            parse("Xx2O").unwrap_err(),
            LewisError::UnknownElement {
                symbol: "Xx".to_owned()
            }
        );
    }

    #[test]
    fn surrounding_whitespace_and_empty_input() {
        assert_eq!(parse("  CH4 \n").unwrap().atoms.len(), 5);
        let empty = parse("").unwrap();
        assert!(empty.frequencies.is_empty());
        assert!(empty.atoms.is_empty());
    }
}

// End of File

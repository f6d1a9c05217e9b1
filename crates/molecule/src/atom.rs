// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use periodic_table::{Element, ElementRecord};
use ultraviolet::Vec2;

/// Number of valence electrons an element is expected to bring into a molecule, derived from its
/// position in the periodic table.
///
/// This is a main-group approximation: helium, the lanthanides and actinides (printed on rows 9 and
/// 10) and the columns 2 through 12 all count as two; every other column contributes its last
/// digit, so carbon (column 14) has four and fluorine (column 17) has seven.
pub fn expected_valence_electrons(record: &ElementRecord) -> u32 {
    if record.element == Element::Helium
        || (9..=10).contains(&record.ypos)
        || (2..=12).contains(&record.xpos)
    {
        2
    } else {
        u32::from(record.xpos) % 10
    }
}

/// One instance of an element in the molecule, with its electron bookkeeping.
///
/// Only the three counters (loose electrons, sigma bonds, pi bonds) are stored.  Formal charge and
/// total valence electrons are always derived from them, so they can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    element: Element,
    expected_ve: u32,
    loose_ve: u32,
    sigma_bonds: u32,
    pi_bonds: u32,
    pos: Vec2,
}

impl Atom {
    pub fn new(record: &ElementRecord) -> Self {
        Self {
            element: record.element,
            expected_ve: expected_valence_electrons(record),
            loose_ve: 0,
            sigma_bonds: 0,
            pi_bonds: 0,
            pos: Vec2::zero(),
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    pub fn expected_valence_electrons(&self) -> u32 {
        self.expected_ve
    }

    /// Electrons held as lone pairs rather than shared in a bond.
    pub fn loose_electrons(&self) -> u32 {
        self.loose_ve
    }

    pub fn sigma_bonds(&self) -> u32 {
        self.sigma_bonds
    }

    pub fn pi_bonds(&self) -> u32 {
        self.pi_bonds
    }

    /// `expected − loose − sigma − pi`
    pub fn formal_charge(&self) -> i32 {
        self.expected_ve as i32
            - self.loose_ve as i32
            - self.sigma_bonds as i32
            - self.pi_bonds as i32
    }

    /// Electrons around the atom, counting both electrons of every bond: `loose + 2 × (sigma + pi)`.
    pub fn total_valence_electrons(&self) -> u32 {
        self.loose_ve + 2 * (self.sigma_bonds + self.pi_bonds)
    }

    /// Planar position, assigned by the layout stage.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub(crate) fn set_loose_electrons(&mut self, loose_ve: u32) {
        self.loose_ve = loose_ve;
    }

    pub(crate) fn add_sigma_bond(&mut self) {
        self.sigma_bonds += 1;
    }

    pub(crate) fn add_pi_bond(&mut self) {
        self.pi_bonds += 1;
    }

    pub(crate) fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_table::PeriodicTable;

    fn valence(table: &PeriodicTable, symbol: &str) -> u32 {
        expected_valence_electrons(table.lookup(symbol).unwrap())
    }

    #[test]
    fn main_group_valence_follows_the_column() {
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(valence(&table, "H"), 1);
        assert_eq!(valence(&table, "Li"), 1);
        assert_eq!(valence(&table, "B"), 3);
        assert_eq!(valence(&table, "C"), 4);
        assert_eq!(valence(&table, "N"), 5);
        assert_eq!(valence(&table, "O"), 6);
        assert_eq!(valence(&table, "Cl"), 7);
        assert_eq!(valence(&table, "Xe"), 8);
    }

    #[test]
    fn helium_and_inner_columns_have_two() {
        let table = PeriodicTable::embedded().unwrap();
        assert_eq!(valence(&table, "He"), 2);
        assert_eq!(valence(&table, "Be"), 2);
        assert_eq!(valence(&table, "Fe"), 2);
        assert_eq!(valence(&table, "Zn"), 2);
        assert_eq!(valence(&table, "Ce"), 2);
        assert_eq!(valence(&table, "Lr"), 2);
    }

    #[test]
    fn derived_counts_follow_the_counters() {
        let table = PeriodicTable::embedded().unwrap();
        let mut oxygen = Atom::new(table.lookup("O").unwrap());
        assert_eq!(oxygen.formal_charge(), 6);
        assert_eq!(oxygen.total_valence_electrons(), 0);

        oxygen.add_sigma_bond();
        oxygen.add_pi_bond();
        oxygen.set_loose_electrons(4);
        assert_eq!(oxygen.formal_charge(), 0);
        assert_eq!(oxygen.total_valence_electrons(), 8);

        oxygen.set_loose_electrons(6);
        assert_eq!(oxygen.formal_charge(), -2);
        assert_eq!(oxygen.total_valence_electrons(), 10);
    }
}

// End of File

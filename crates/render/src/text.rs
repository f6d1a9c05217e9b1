// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fmt::Write as _;

use molecule::Evaluation;

use crate::{RenderError, Renderer};

/// Plain-text electron accounting: the chosen topology, the electron pool and one row per atom.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String, RenderError> {
        let topology = evaluation.topology();
        let distribution = evaluation.distribution();
        let mut out = String::new();

        writeln!(out, "{} (charge {})", evaluation.formula(), evaluation.charge())?;
        writeln!(
            out,
            "center: {}, outer: {} x{}",
            topology.center,
            topology.outer,
            distribution.outer.len()
        )?;
        writeln!(out, "electron pool: {}", distribution.pool)?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<6}{:>7}{:>7}{:>4}{:>8}{:>7}",
            "atom", "loose", "sigma", "pi", "formal", "total"
        )?;
        for (_, atom) in evaluation.atoms() {
            writeln!(
                out,
                "{:<6}{:>7}{:>7}{:>4}{:>8}{:>7}",
                atom.symbol(),
                atom.loose_electrons(),
                atom.sigma_bonds(),
                atom.pi_bonds(),
                atom.formal_charge(),
                atom.total_valence_electrons()
            )?;
        }

        Ok(out)
    }
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use molecule::Evaluation;

use crate::{Diagram, RenderError, Renderer};

/// Pretty-printed JSON of the [`Diagram`], for consumers that draw the structure themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String, RenderError> {
        let mut json = serde_json::to_string_pretty(&Diagram::from_evaluation(evaluation))?;
        json.push('\n');
        Ok(json)
    }
}

// End of File

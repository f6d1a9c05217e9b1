// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Render sink
//!
//! Consumers of a finished [`Evaluation`].  Renderers only ever see the evaluation through a shared
//! reference; the colors, fonts and canvas they choose are their own business.

use std::{fmt, str::FromStr};

use molecule::Evaluation;

pub use crate::{
    diagram::{Diagram, DiagramAtom, DiagramBond, DiagramBondKind, DiagramMarker},
    error::RenderError,
    json::JsonRenderer,
    svg::SvgRenderer,
    text::TextRenderer,
};

mod diagram;
mod error;
mod json;
mod svg;
mod text;

/// Something that can turn an evaluation into a document.
pub trait Renderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String, RenderError>;
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Svg,
}

impl OutputFormat {
    /// Builds the renderer for this format.  `svg_scale` is only used by [`OutputFormat::Svg`].
    pub fn renderer(self, svg_scale: f32) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Svg => Box::new(SvgRenderer::new(svg_scale)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(RenderError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// End of File

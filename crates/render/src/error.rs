// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while turning an evaluation into output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The diagram could not be serialized to JSON.
    #[error("Failed to serialize diagram: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the text report failed.
    #[error("Failed to format report: {0}")]
    Format(#[from] fmt::Error),

    /// The requested output format does not exist.
    #[error("Unknown output format {0:?}; expected one of text, json, svg")]
    UnknownFormat(String),
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::PathBuf;

use app_config::DiagramSettings;
use clap::Parser;
use render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lewis")]
#[command(version, about = "Draws the Lewis structure of a small molecule")]
pub struct Args {
    /// Chemical formula, such as H2O or NH4 (prompted for when omitted)
    pub formula: Option<String>,

    /// Molecular charge, such as 0, +1 or -2
    #[arg(short, long, allow_hyphen_values = true)]
    pub charge: Option<String>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the output to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Element dataset (JSON) to use instead of the built-in one
    #[arg(long)]
    pub elements: Option<PathBuf>,

    /// Sum the counts of repeated element symbols (HOH has two hydrogens)
    #[arg(long)]
    pub accumulate: bool,

    /// Pixels per layout unit in SVG output
    #[arg(long)]
    pub svg_scale: Option<f32>,

    /// Store the effective format, dataset and counting options as the new defaults
    #[arg(long)]
    pub save_settings: bool,

    /// Settings database to use instead of the one in the user's config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log every stage of the evaluation
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overrides the persisted settings with whatever was given on the command line.
    pub fn apply(&self, settings: &mut DiagramSettings) {
        if let Some(format) = self.format {
            settings.output_format = format.to_string();
        }
        if let Some(path) = &self.elements {
            settings.elements_path = path.display().to_string();
        }
        if self.accumulate {
            settings.accumulate_repeated = true;
        }
        if let Some(scale) = self.svg_scale {
            settings.svg_scale = scale;
        }
    }
}


// End of File

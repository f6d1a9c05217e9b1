// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

mod cli;
mod prompt;

use std::fs;

use anyhow::{ensure, Context, Result};
use app_config::{AppConfig, AppConfigTrait, DiagramSettings};
use clap::Parser;
use logging::prelude::*;
use molecule::{evaluate, parse_charge, EvaluationOptions, FrequencyPolicy};
use periodic_table::PeriodicTable;
use render::OutputFormat;

use self::cli::Args;

const LOGGED_CRATES: [&str; 6] = [
    "lewis",
    "lewis-molecule",
    "lewis-periodic-table",
    "lewis-render",
    "lewis-logging",
    "app_config",
];

fn load_settings(args: &Args) -> Result<DiagramSettings> {
    let app_config = match &args.config {
        Some(path) => AppConfig::with_db_path(path),
        None => {
            let mut app_config = AppConfig::default();
            app_config.set_db_path();
            app_config
        }
    };

    let mut settings = DiagramSettings::load(&app_config);
    args.apply(&mut settings);
    log::debug!("Effective settings: {:?}", settings);
    ensure!(
        settings.svg_scale > 0.0,
        "SVG scale must be positive, got {}",
        settings.svg_scale
    );

    if args.save_settings {
        settings
            .save(&app_config)
            .context("failed to save settings")?;
        log::info!("Saved settings to {:?}", app_config.db_path);
    }
    Ok(settings)
}

fn load_table(settings: &DiagramSettings) -> Result<PeriodicTable> {
    if settings.elements_path.is_empty() {
        PeriodicTable::embedded().context("built-in element dataset is broken")
    } else {
        PeriodicTable::load(&settings.elements_path)
            .with_context(|| format!("failed to load elements from {}", settings.elements_path))
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    LoggingConfig::new(LOGGED_CRATES.to_vec())
        .verbose(args.verbose)
        .init()
        .context("failed to initialize logging")?;

    let settings = load_settings(&args)?;
    let format: OutputFormat = settings
        .output_format
        .parse()
        .context("invalid output format in settings")?;
    let table = load_table(&settings)?;

    let (formula, charge_text) = match &args.formula {
        Some(formula) => (
            formula.clone(),
            args.charge.clone().unwrap_or_else(|| "0".to_owned()),
        ),
        None => prompt::stdin_prompts(args.charge.clone())?,
    };
    let charge = parse_charge(&charge_text)?;

    let options = EvaluationOptions {
        frequency_policy: if settings.accumulate_repeated {
            FrequencyPolicy::Accumulate
        } else {
            FrequencyPolicy::LastOccurrence
        },
    };
    let evaluation = evaluate(&table, &formula, charge, &options)
        .with_context(|| format!("cannot draw {formula} with charge {charge}"))?;

    let document = format
        .renderer(settings.svg_scale)
        .render(&evaluation)
        .with_context(|| format!("failed to render {format} output"))?;

    match &args.output {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("because: {}", cause);
        }
        std::process::exit(1);
    }
}

// End of File

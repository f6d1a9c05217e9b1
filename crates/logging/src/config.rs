// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::filter::filter_string;

/// Initializes the logging framework to capture logs from the crates specified with a minimum
/// [`log::Level`] of [`Info`](log::Level::Info) on debug builds and [`Warn`](log::Level::Warn) on
/// release builds.  These defaults can be overridden by setting the `RUST_LOG` environment
/// variable.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    crates: Vec<&'static str>,
    verbose: bool,
}

/// Method for creating a [`LoggingConfig`] instance, specifying the crates to capture logs from.
impl LoggingConfig {
    /// Creates a new [`LoggingConfig`] instance with the specified list of crates to capture logs
    /// from.
    pub fn new(crates: Vec<&'static str>) -> Self {
        Self {
            crates,
            verbose: false,
        }
    }

    /// Raises the minimum level to [`Debug`](log::Level::Debug) regardless of build profile.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The level used when `RUST_LOG` is not set.
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if cfg!(debug_assertions) {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Installs the global logger.  Fails if a logger was already installed.
    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        let filter = filter_string(&self.crates, self.level());
        // Use env_logger's builder API to avoid an unsafe set_var call; RUST_LOG still wins.
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
            .format_timestamp(None)
            .try_init()
    }
}


// End of File

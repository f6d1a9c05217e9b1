// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Logging setup for the `lewis` tools
//!
//! This crate initializes the logging framework.  The library crates only ever speak through the
//! [`log`] macros; the binary calls [`LoggingConfig::init`] once, which routes them through
//! [`env_logger`] to standard error so that rendered diagrams on standard output stay clean.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds.  Asking for verbose output raises that to
//! [`Debug`](log::Level::Debug).  All of this can be overridden by setting the `RUST_LOG`
//! environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=lewis_molecule=trace lewis H2O
//! ```

mod config;
mod filter;

pub use config::LoggingConfig;

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::LoggingConfig;
}

// End of File

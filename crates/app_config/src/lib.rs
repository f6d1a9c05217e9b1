// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Persistent settings
//!
//! Settings live in a small SQLite database under the platform configuration directory, one row
//! per `(group_name, name)` pair.  Each row carries its value as text together with the name of
//! its type, so that it can be read back as a typed [`SettingValue`].

use std::{collections::HashMap, path::PathBuf};

use log::{error, warn};
use rusqlite::{Connection, Result as SqliteResult};

mod diagram_settings;
mod serialization;
mod setting_value;

pub use diagram_settings::DiagramSettings;
pub use setting_value::{SettingRecord, SettingValue};

pub trait AppConfigTrait {
    fn set_db_path(&mut self);
}

impl AppConfigTrait for AppConfig {
    fn set_db_path(&mut self) {
        let config_dir = directories::ProjectDirs::from("org", "lewis", "lewis")
            .map(|dirs| dirs.config_dir().to_owned())
            .unwrap_or_else(|| PathBuf::from("."));
        self.db_path = Some(config_dir.join("settings.sqlite3"));

        // Create config directory if it doesn't exist.
        if !config_dir.exists() {
            if let Err(err) = std::fs::create_dir_all(&config_dir) {
                // reset the db_path to None if the directory creation fails
                self.db_path = None;
                error!(
                    "Failed to create config directory {}: {}",
                    config_dir.display(),
                    err
                );
                warn!("Settings will not be persisted as no storage can be created.");
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    /// sqlite connection path
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Uses an explicit database file instead of the platform default.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(path.into()),
        }
    }

    fn open(&self, action: &str) -> SqliteResult<Connection> {
        let conn = match self.db_path.as_ref() {
            Some(path) => Connection::open(path),
            None => {
                let err_msg = format!("Abort {action}, no database path set!");
                error!("{}", err_msg);
                return Err(rusqlite::Error::InvalidPath(err_msg.into()));
            }
        }?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                group_name TEXT NOT NULL,
                name TEXT NOT NULL,
                value TEXT NOT NULL,
                value_type TEXT NOT NULL,
                PRIMARY KEY (group_name, name)
            )",
            (),
        )?;
        Ok(conn)
    }
}

/// Reads every setting of `group_name`.  Rows whose value does not parse as their declared type
/// are skipped with a warning.
pub fn load_group(
    app_config: &AppConfig,
    group_name: &str,
) -> SqliteResult<HashMap<String, SettingValue>> {
    let conn = app_config.open("loading")?;

    const SQL: &str = "SELECT group_name, name, value, value_type FROM settings WHERE group_name = ?";
    let mut stmt = conn.prepare(SQL)?;
    let records = stmt.query_map([group_name], |row| {
        Ok(SettingRecord {
            group_name: row.get(0)?,
            name: row.get(1)?,
            value: row.get(2)?,
            value_type: row.get(3)?,
        })
    })?;

    let mut group = HashMap::new();
    for record in records {
        let record = record?;
        match SettingValue::from_record(&record) {
            Some(value) => {
                group.insert(record.name, value);
            }
            None => warn!(
                "Ignoring setting {}.{}: {:?} is not a valid {}",
                record.group_name, record.name, record.value, record.value_type
            ),
        }
    }
    Ok(group)
}

/// Inserts or replaces a single setting.
pub fn save_record_to_db(
    app_config: &AppConfig,
    group_name: &str,
    name: &str,
    value: &SettingValue,
) -> SqliteResult<()> {
    let conn = app_config.open("saving")?;

    const SQL: &str =
        "INSERT OR REPLACE INTO settings (group_name, name, value, value_type) VALUES (?, ?, ?, ?)";
    let record = value.to_record(group_name, name);
    conn.execute(
        SQL,
        rusqlite::params![
            record.group_name,
            record.name,
            record.value,
            record.value_type
        ],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> (tempfile::TempDir, AppConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_db_path(dir.path().join("settings.sqlite3"));
        (dir, config)
    }

    #[test]
    fn empty_database_has_empty_groups() {
        let (_dir, config) = scratch();
        assert!(load_group(&config, "diagram").unwrap().is_empty());
    }

    #[test]
    fn saved_records_are_read_back_typed() {
        let (_dir, config) = scratch();
        save_record_to_db(&config, "diagram", "svg_scale", &SettingValue::Float(42.5)).unwrap();
        save_record_to_db(&config, "diagram", "accumulate", &SettingValue::Bool(true)).unwrap();
        save_record_to_db(&config, "other", "name", &SettingValue::String("x".into())).unwrap();

        let group = load_group(&config, "diagram").unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group["svg_scale"], SettingValue::Float(42.5));
        assert_eq!(group["accumulate"], SettingValue::Bool(true));
    }

    #[test]
    fn saving_twice_replaces() {
        let (_dir, config) = scratch();
        save_record_to_db(&config, "diagram", "count", &SettingValue::Int(1)).unwrap();
        save_record_to_db(&config, "diagram", "count", &SettingValue::Int(2)).unwrap();
        assert_eq!(
            load_group(&config, "diagram").unwrap()["count"],
            SettingValue::Int(2)
        );
    }

    #[test]
    fn no_path_is_an_error() {
        let config = AppConfig::default();
        assert!(matches!(
            load_group(&config, "diagram"),
            Err(rusqlite::Error::InvalidPath(_))
        ));
    }
}

// End of File

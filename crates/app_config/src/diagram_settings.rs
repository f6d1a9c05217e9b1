// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::collections::HashMap;

use log::warn;
use rusqlite::Result as SqliteResult;

use crate::{load_group, save_record_to_db, setting_value::SettingValue, AppConfig};

/// The persisted defaults of the diagram tool, stored under the `diagram` group.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSettings {
    /// Path of an element dataset to load instead of the embedded one.  Empty means embedded.
    pub elements_path: String,
    /// Sum the counts of repeated element symbols instead of keeping the last one.
    pub accumulate_repeated: bool,
    /// Name of the output format: `text`, `json` or `svg`.
    pub output_format: String,
    /// Pixels per layout unit in SVG output.
    pub svg_scale: f32,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            elements_path: String::new(),
            accumulate_repeated: false,
            output_format: "text".to_owned(),
            svg_scale: 100.0,
        }
    }
}

impl DiagramSettings {
    pub const GROUP: &'static str = "diagram";

    /// Loads the stored settings, falling back to the default for anything missing, mistyped or
    /// unreadable.
    pub fn load(app_config: &AppConfig) -> Self {
        let group = match load_group(app_config, Self::GROUP) {
            Ok(group) => group,
            Err(err) => {
                warn!("Using default diagram settings: {}", err);
                HashMap::new()
            }
        };
        Self::from_group(&group)
    }

    fn from_group(group: &HashMap<String, SettingValue>) -> Self {
        let default_settings = Self::default();
        let mistyped = |name: &str, value: &SettingValue| {
            warn!(
                "Ignoring setting {}.{} = {} ({})",
                Self::GROUP,
                name,
                value,
                value.type_as_string()
            );
        };

        let elements_path = match group.get("elements_path") {
            Some(SettingValue::String(path)) => path.clone(),
            Some(other) => {
                mistyped("elements_path", other);
                default_settings.elements_path
            }
            None => default_settings.elements_path,
        };
        let accumulate_repeated = match group.get("accumulate_repeated") {
            Some(SettingValue::Bool(value)) => *value,
            Some(other) => {
                mistyped("accumulate_repeated", other);
                default_settings.accumulate_repeated
            }
            None => default_settings.accumulate_repeated,
        };
        let output_format = match group.get("output_format") {
            Some(SettingValue::String(format)) => format.clone(),
            Some(other) => {
                mistyped("output_format", other);
                default_settings.output_format
            }
            None => default_settings.output_format,
        };
        let svg_scale = match group.get("svg_scale") {
            Some(SettingValue::Float(scale)) if *scale > 0.0 => *scale,
            Some(SettingValue::Int(scale)) if *scale > 0 => *scale as f32,
            Some(other) => {
                mistyped("svg_scale", other);
                default_settings.svg_scale
            }
            None => default_settings.svg_scale,
        };

        Self {
            elements_path,
            accumulate_repeated,
            output_format,
            svg_scale,
        }
    }

    pub fn save(&self, app_config: &AppConfig) -> SqliteResult<()> {
        let settings = [
            ("elements_path", SettingValue::String(self.elements_path.clone())),
            ("accumulate_repeated", SettingValue::Bool(self.accumulate_repeated)),
            ("output_format", SettingValue::String(self.output_format.clone())),
            ("svg_scale", SettingValue::Float(self.svg_scale)),
        ];

        for (key, value) in &settings {
            save_record_to_db(app_config, Self::GROUP, key, value)?;
        }

        Ok(())
    }
}

// End of File

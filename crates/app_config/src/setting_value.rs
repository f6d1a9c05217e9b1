// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fmt;

use crate::serialization::*;

/// One row of the `settings` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRecord {
    pub group_name: String,
    pub name: String,
    pub value: String,
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl SettingValue {
    pub fn type_as_string(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
        }
    }

    /// Parses the stored text according to the stored type name.  `None` if either is invalid.
    pub fn from_record(record: &SettingRecord) -> Option<Self> {
        let value = record.value.as_str();
        match record.value_type.as_str() {
            "bool" => deserialize_bool(value).ok().map(SettingValue::Bool),
            "int" => deserialize_i32(value).ok().map(SettingValue::Int),
            "float" => deserialize_f32(value).ok().map(SettingValue::Float),
            "string" => Some(SettingValue::String(value.to_owned())),
            _ => None,
        }
    }

    pub fn to_record(&self, group_name: &str, name: &str) -> SettingRecord {
        let value = match self {
            SettingValue::Bool(value) => serialize_bool(*value),
            SettingValue::Int(value) => serialize_i32(*value),
            SettingValue::Float(value) => serialize_f32(*value),
            SettingValue::String(value) => value.clone(),
        };
        SettingRecord {
            group_name: group_name.to_owned(),
            name: name.to_owned(),
            value,
            value_type: self.type_as_string().to_owned(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{}", value),
            SettingValue::Int(value) => write!(f, "{}", value),
            SettingValue::Float(value) => write!(f, "{}", value),
            SettingValue::String(value) => write!(f, "{}", value),
        }
    }
}


// End of File

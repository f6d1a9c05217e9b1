// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Text encodings of setting values as stored in the `value` column.

pub fn serialize_bool(value: bool) -> String {
    value.to_string()
}

pub fn deserialize_bool(value: &str) -> Result<bool, std::str::ParseBoolError> {
    value.parse::<bool>()
}

pub fn serialize_i32(value: i32) -> String {
    value.to_string()
}

pub fn deserialize_i32(value: &str) -> Result<i32, std::num::ParseIntError> {
    value.parse::<i32>()
}

pub fn serialize_f32(value: f32) -> String {
    value.to_string()
}

pub fn deserialize_f32(value: &str) -> Result<f32, std::num::ParseFloatError> {
    value.parse::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_survive() {
        assert_eq!(serialize_f32(100.0), "100");
        assert_eq!(deserialize_f32("100"), Ok(100.0));
    }

    #[test]
    fn bools_are_lowercase_words() {
        assert_eq!(serialize_bool(true), "true");
        assert!(deserialize_bool("yes").is_err());
    }
}

// End of File

//! Serde adapters for CSV cells.
//!
//! Persisted tables store every cell as text. These adapters apply the same
//! lenient parsing used during validation so that a hand-edited file never
//! fails to load over a malformed number.

use serde::{Deserialize, Deserializer, Serializer};

use shiprate_normalization::{format_decimal, normalize_boolean_flag, parse_decimal, parse_integer};

pub(crate) mod flag {
    use super::{Deserialize, Deserializer, Serializer, normalize_boolean_flag};

    pub(crate) fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize_boolean_flag(&raw))
    }
}

pub(crate) mod decimal {
    use super::{Deserialize, Deserializer, Serializer, format_decimal, parse_decimal};

    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_decimal(*value))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_decimal(&raw))
    }
}

pub(crate) mod integer {
    use super::{Deserialize, Deserializer, Serializer, parse_integer};

    pub(crate) fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_integer(&raw))
    }
}

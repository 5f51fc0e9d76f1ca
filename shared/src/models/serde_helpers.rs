//! Serde helpers for employee payloads
//!
//! Employee APIs disagree on number encoding: salaries and ages arrive as
//! JSON numbers or as numeric strings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

/// Deserialize an age given as a number or a numeric string
pub fn age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u32),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid age: {s}"))),
    }
}

/// Salary as a JSON number
///
/// Whole amounts are written as integers (`1000`, not `1000.0`). Fractional
/// amounts are written as floats when the float reads back to the same
/// value, and as a decimal string otherwise. Numbers and numeric strings
/// are both accepted on input.
pub mod salary {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract().is_zero() {
            if let Some(whole) = value.to_i64() {
                return s.serialize_i64(whole);
            }
        }
        match value.to_f64() {
            Some(f) if f.to_string().parse::<Decimal>().ok() == Some(*value) => s.serialize_f64(f),
            _ => s.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

/// [`salary`] for optional fields
pub mod salary_option {
    use super::*;
    use rust_decimal::Decimal;

    pub fn serialize<S>(value: &Option<Decimal>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => salary::serialize(v, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Decimal>::deserialize(deserializer)
    }
}

//! Deserialization helpers for backend payloads
//!
//! Optional text columns arrive as `null` and decimal columns as strings.

use serde::{Deserialize, Deserializer};

/// Treat `null` the same as an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

/// Accept a decimal encoded as a number or a string; `null` and blanks are zero
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Decimal::Number(n)) => Ok(n),
        Some(Decimal::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Decimal::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid decimal '{}': {}", s, e))),
    }
}

//! Serde helpers for numbers that may arrive as strings

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Deserialize an integer from a JSON number or numeric string
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Float(v) => Ok(v.trunc() as i64),
        IntOrString::Str(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f.trunc() as i64))
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Like [`int`] but `null` or a missing field becomes 0
pub fn int_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrap(#[serde(deserialize_with = "int")] i64);

    Ok(Option::<Wrap>::deserialize(deserializer)?
        .map(|w| w.0)
        .unwrap_or(0))
}

/// Deserialize a decimal where `null` or a missing field becomes zero
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "int")]
        count: i64,
        #[serde(default, deserialize_with = "int_or_zero")]
        optional: i64,
        #[serde(default, deserialize_with = "decimal_or_zero")]
        amount: Decimal,
    }

    #[test]
    fn test_int_accepts_number_and_string() {
        let row: Row = serde_json::from_str(r#"{"count": 12}"#).unwrap();
        assert_eq!(row.count, 12);
        let row: Row = serde_json::from_str(r#"{"count": "42"}"#).unwrap();
        assert_eq!(row.count, 42);
        let row: Row = serde_json::from_str(r#"{"count": "3.0"}"#).unwrap();
        assert_eq!(row.count, 3);
    }

    #[test]
    fn test_int_or_zero_handles_null_and_missing() {
        let row: Row = serde_json::from_str(r#"{"count": 1, "optional": null}"#).unwrap();
        assert_eq!(row.optional, 0);
        let row: Row = serde_json::from_str(r#"{"count": 1}"#).unwrap();
        assert_eq!(row.optional, 0);
    }

    #[test]
    fn test_decimal_or_zero() {
        let row: Row = serde_json::from_str(r#"{"count": 1, "amount": "12.50"}"#).unwrap();
        assert_eq!(row.amount, "12.5".parse::<Decimal>().unwrap());
        let row: Row = serde_json::from_str(r#"{"count": 1, "amount": 3.25}"#).unwrap();
        assert_eq!(row.amount, "3.25".parse::<Decimal>().unwrap());
        let row: Row = serde_json::from_str(r#"{"count": 1, "amount": null}"#).unwrap();
        assert_eq!(row.amount, Decimal::ZERO);
    }

    #[test]
    fn test_int_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"count": "many"}"#).is_err());
    }
}

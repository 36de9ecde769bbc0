//! Forgiving parsers for values typed into editor forms or returned by the
//! backend.
//!
//! Amounts that are not non-negative numbers become zero and timestamps that
//! cannot be parsed become absent. Nothing here returns an error.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamp layouts accepted in addition to RFC 3339.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a currency amount or percentage, coercing anything that is not a
/// non-negative number to zero.
///
/// # Examples
///
/// ```
/// use hrms_engine::models::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 50000 "), Decimal::new(50000, 0));
/// assert_eq!(parse_amount("12.5"), Decimal::new(125, 1));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount("-5"), Decimal::ZERO);
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));

    match parsed {
        Ok(value) if value > Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

/// Clamps a decimal that was constructed in code rather than parsed.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Parses a timestamp, normalizing values with a UTC offset to UTC.
///
/// Returns `None` for anything unparseable.
///
/// # Examples
///
/// ```
/// use hrms_engine::models::parse_timestamp;
///
/// let plain = parse_timestamp("2026-01-15T09:00:00").unwrap();
/// assert_eq!(plain.to_string(), "2026-01-15 09:00:00");
///
/// let offset = parse_timestamp("2026-01-15T14:30:00+05:30").unwrap();
/// assert_eq!(offset.to_string(), "2026-01-15 09:00:00");
///
/// assert!(parse_timestamp("yesterday-ish").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_utc());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

fn amount_from_value(value: Option<Value>) -> Decimal {
    match value {
        Some(Value::Number(number)) => parse_amount(&number.to_string()),
        Some(Value::String(text)) => parse_amount(&text),
        _ => Decimal::ZERO,
    }
}

/// Serde adapter for [`parse_amount`]; pair with `#[serde(default)]`.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(amount_from_value(value))
}

/// Serde adapter for [`parse_timestamp`]; pair with `#[serde(default)]`.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => parse_timestamp(&text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[derive(Debug, Deserialize)]
    struct AmountHolder {
        #[serde(default, deserialize_with = "amount")]
        value: Decimal,
    }

    #[derive(Debug, Deserialize)]
    struct TimestampHolder {
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("25000"), dec("25000"));
        assert_eq!(parse_amount("33.33"), dec("33.33"));
        assert_eq!(parse_amount("0"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("5e4"), dec("50000"));
    }

    #[test]
    fn test_parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount("fifty"), Decimal::ZERO);
        assert_eq!(parse_amount("12,000"), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_coerces_negative_to_zero() {
        assert_eq!(parse_amount("-0.01"), Decimal::ZERO);
        assert_eq!(parse_amount("-100"), Decimal::ZERO);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(non_negative(dec("-3")), Decimal::ZERO);
        assert_eq!(non_negative(dec("3")), dec("3"));
    }

    #[test]
    fn test_amount_deserializes_numbers_and_strings() {
        let number: AmountHolder = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(number.value, dec("12.5"));

        let text: AmountHolder = serde_json::from_str(r#"{"value": "12.5"}"#).unwrap();
        assert_eq!(text.value, dec("12.5"));
    }

    #[test]
    fn test_amount_deserializes_invalid_values_as_zero() {
        for json in [
            r#"{"value": "abc"}"#,
            r#"{"value": -5}"#,
            r#"{"value": null}"#,
            r#"{"value": true}"#,
            r#"{"value": [1, 2]}"#,
            r#"{}"#,
        ] {
            let holder: AmountHolder = serde_json::from_str(json).unwrap();
            assert_eq!(holder.value, Decimal::ZERO, "input: {}", json);
        }
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();

        assert_eq!(parse_timestamp("2026-01-15T09:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-01-15 09:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-01-15T09:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-01-15T09:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-01-15T09:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_timestamp_keeps_fractional_seconds() {
        let parsed = parse_timestamp("2026-01-15T09:00:30.250").unwrap();
        assert_eq!(parsed.to_string(), "2026-01-15 09:00:30.250");
    }

    #[test]
    fn test_timestamp_deserializes_malformed_as_absent() {
        for json in [
            r#"{"at": "not a time"}"#,
            r#"{"at": "2026-13-45T99:00:00"}"#,
            r#"{"at": 1700000000}"#,
            r#"{"at": null}"#,
            r#"{}"#,
        ] {
            let holder: TimestampHolder = serde_json::from_str(json).unwrap();
            assert!(holder.at.is_none(), "input: {}", json);
        }
    }
}

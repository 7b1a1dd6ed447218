//! Records exchanged with the fleet API and the drafts backing the forms.

mod assignment;
mod operator;
mod van;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use assignment::{AssignmentDraft, AssignmentOption};
pub use operator::{Operator, OperatorDetails, OPERATOR_FIELDS};
pub use van::{Van, VanDetails, VanDraft, VanField, VanFieldKind, VAN_FIELDS};

/* -------------------------------------------------------------------------- */
/*                          serde helper (lenient input)                      */
/* -------------------------------------------------------------------------- */

/// `null` or a missing key reads as an empty string.
pub(crate) fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/* -------------------------------------------------------------------------- */
/*                        numeric coercion of draft text                      */
/* -------------------------------------------------------------------------- */

/// Integer value of a draft field. `None` is sent as `null`, which the
/// backend rejects; malformed input is never turned into 0.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Float value of a draft field, same `null` convention as [`parse_int`].
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/* -------------------------------------------------------------------------- */
/*                       generic key / value rendering                        */
/* -------------------------------------------------------------------------- */

/// Flattens any record into `(label, value)` pairs in serialisation order.
/// Labels are the JSON keys with `_` turned into spaces.
pub fn record_entries<T: Serialize>(record: &T) -> Vec<(String, String)> {
    let Ok(Value::Object(map)) = serde_json::to_value(record) else {
        return Vec::new();
    };

    map.into_iter()
        .map(|(key, value)| (key.replace('_', " "), display_value(&value)))
        .collect()
}

pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Anything the managers keep in a list and address by identifier.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Drops the record with `id` from a cached list, keeping the order of the
/// others.
pub fn without_id<T: Identified + Clone>(list: &[T], id: i64) -> Vec<T> {
    list.iter().filter(|item| item.id() != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("4"), Some(4));
        assert_eq!(parse_int(" 2019 "), Some(2019));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("4.5"), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1500.5"), Some(1500.5));
        assert_eq!(parse_float("12"), Some(12.0));
        assert_eq!(parse_float("heavy"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("inf"), None);
    }

    #[test]
    fn test_record_entries_keeps_order_and_labels() {
        #[derive(Serialize)]
        struct Sample {
            plate_number: String,
            year_model: Option<i64>,
            net_weight: Option<f64>,
        }

        let entries = record_entries(&Sample {
            plate_number: "ABC 123".into(),
            year_model: Some(2020),
            net_weight: None,
        });

        assert_eq!(
            entries,
            vec![
                ("plate number".to_string(), "ABC 123".to_string()),
                ("year model".to_string(), "2020".to_string()),
                ("net weight".to_string(), String::new()),
            ]
        );
    }
}

//! Lenient JSON field coercion.
//!
//! Browser clients send loosely typed bodies (`"order": "3"`,
//! `"completed": 1`). Each field is converted to its target type when the
//! conversion is unambiguous; anything else counts as "not supplied".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer from a number (floats truncate), numeric string, or bool.
pub fn order_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// String as is; numbers and bools in their textual form.
pub fn title_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Bool as is; non-zero numbers; `true`/`yes`/`1` and `false`/`no`/`0` strings.
pub fn completed_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn order<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(opt_order(d)?.unwrap_or_default())
}

pub(crate) fn title<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(opt_title(d)?.unwrap_or_default())
}

pub(crate) fn completed<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(opt_completed(d)?.unwrap_or_default())
}

pub(crate) fn opt_order<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(order_value(&Value::deserialize(d)?))
}

pub(crate) fn opt_title<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(title_value(&Value::deserialize(d)?))
}

pub(crate) fn opt_completed<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(completed_value(&Value::deserialize(d)?))
}

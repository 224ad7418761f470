//! Classification of loosely typed upstream JSON values.
//!
//! Upstream APIs change the type of a field between versions: a price may be
//! a number, a numeric string or an object with several quotes. Every field
//! parser first turns the raw value into a [`Shape`] and then applies its own
//! coercion rule to the variant it sees.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Missing key or JSON `null`.
    Absent,
    Bool,
    Number(f64),
    Text(&'a str),
    Object(&'a Map<String, Value>),
    Array(usize),
}

impl<'a> Shape<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Shape::Absent,
            Some(Value::Bool(_)) => Shape::Bool,
            // Without arbitrary precision every JSON number has an f64 view.
            Some(Value::Number(n)) => n.as_f64().map_or(Shape::Absent, Shape::Number),
            Some(Value::String(s)) => Shape::Text(s),
            Some(Value::Object(map)) => Shape::Object(map),
            Some(Value::Array(items)) => Shape::Array(items.len()),
        }
    }

    pub fn field(map: &'a Map<String, Value>, key: &str) -> Self {
        Self::of(map.get(key))
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Shape::Absent)
    }

    /// Zero, empty text, `false` and empty containers are blank, like absent
    /// values, when choosing between fallback keys.
    pub fn is_blank(&self) -> bool {
        match *self {
            Shape::Absent | Shape::Bool => true,
            Shape::Number(n) => n == 0.0,
            Shape::Text(s) => s.is_empty(),
            Shape::Object(map) => map.is_empty(),
            Shape::Array(len) => len == 0,
        }
    }

    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            Shape::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Shape::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// First candidate key in `keys` whose value is neither missing nor `null`.
pub fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Shape<'a> {
    keys.iter()
        .map(|key| Shape::field(map, key))
        .find(Shape::is_present)
        .unwrap_or(Shape::Absent)
}

/// First candidate in `keys` that is not blank. When every candidate is
/// blank the last key's value is returned: with keys `current, usd`,
/// `{"current": 0, "usd": 45.5}` reads 45.5, `{"usd": 0}` reads zero and
/// `{"current": 0}` reads absent.
pub fn first_filled<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Shape<'a> {
    let mut last = Shape::Absent;
    for key in keys {
        last = Shape::field(map, key);
        if !last.is_blank() {
            break;
        }
    }
    last
}

/// Loose numeric coercion: numbers and numeric strings, finite results only.
pub fn coerce_number(shape: Shape<'_>) -> Option<f64> {
    let parsed = match shape {
        Shape::Number(n) => n,
        Shape::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Strict block height: JSON numbers only, truncated and clamped to zero.
pub fn coerce_height(shape: Shape<'_>) -> Option<u64> {
    match shape {
        // `as` saturates, so huge values pin to u64::MAX instead of wrapping.
        Shape::Number(n) if n.is_finite() => Some(n.trunc().max(0.0) as u64),
        _ => None,
    }
}

/// Integral JSON numbers only.
pub fn coerce_integer(shape: Shape<'_>) -> Option<i64> {
    match shape {
        Shape::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(n as i64),
        _ => None,
    }
}

/// Mapping view of a value, treating anything that is not an object as empty.
pub fn object_or_empty<'a>(
    value: Option<&'a Value>,
    empty: &'a Map<String, Value>,
) -> &'a Map<String, Value> {
    Shape::of(value).as_object().unwrap_or(empty)
}

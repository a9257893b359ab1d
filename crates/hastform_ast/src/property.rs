//! Element property values.
//!
//! HAST properties are a loose map from name to a scalar, a list of scalars,
//! or `null`. The helpers here follow the coercions a JavaScript host applies
//! to the same values, so rules read them the way the rest of the pipeline does.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Property map of an element, in insertion order.
pub type Properties = IndexMap<String, PropertyValue>;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Number(#[serde(serialize_with = "serialize_number")] f64),
    String(String),
    List(Vec<ListItem>),
    Null,
}

/// An entry of a list-valued property (for example a split `className`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Number(#[serde(serialize_with = "serialize_number")] f64),
    String(String),
}

impl PropertyValue {
    /// Returns the string slice if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the value counts as present.
    ///
    /// Empty strings, zero, `NaN`, `false` and `null` are falsy.
    /// Lists are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Boolean(b) => *b,
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::String(s) => !s.is_empty(),
            PropertyValue::List(_) => true,
            PropertyValue::Null => false,
        }
    }
}

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes integral numbers without a fractional part, so `1` stays `1`.
fn serialize_number<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{}", n)
    }
}

/// Stringifies the value the way a JavaScript host would (`String(value)`).
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write_number(f, *n),
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            PropertyValue::Null => Ok(()),
        }
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Number(n) => write_number(f, *n),
            ListItem::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<Vec<ListItem>> for PropertyValue {
    fn from(value: Vec<ListItem>) -> Self {
        PropertyValue::List(value)
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        ListItem::String(value.to_string())
    }
}

impl From<f64> for ListItem {
    fn from(value: f64) -> Self {
        ListItem::Number(value)
    }
}

//! Inline style maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A style property value: a whole number (`fontSize: 12`), a fractional
/// number (`lineHeight: 1.5`) or a string (`color: "red"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

/// Style property name to value.
pub type Style = BTreeMap<String, StyleValue>;

/// Return `base` with every entry of `overrides` applied on top.
///
/// Neither input is modified; on a key collision the override wins.
pub fn merge_styles(base: &Style, overrides: &Style) -> Style {
    let mut merged = base.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Integer(n) => write!(f, "{n}"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Integer(i64::from(value))
    }
}

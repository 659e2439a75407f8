use std::collections::BTreeMap;

use crate::foundation::core::Rgba8;
use crate::interp::lerp::Lerp;

/// One named style value inside a [`StyleState`].
///
/// Serialized form is untagged: JSON numbers become [`StyleValue::Number`],
/// `#rrggbb(aa)` strings become [`StyleValue::Color`], any other string is a
/// [`StyleValue::Keyword`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A dimensionless number (opacity, gauge fill level, ...).
    Number(f64),
    /// A color, interpolated per channel.
    Color(Rgba8),
    /// A discrete token that cannot be interpolated (`"serif"`, `"solid"`).
    Keyword(String),
}

impl Lerp for StyleValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(f64::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(Rgba8::lerp(x, y, t)),
            // Keywords (and mismatched kinds) hold the left value until the
            // segment completes.
            _ => {
                if t < 1.0 {
                    a.clone()
                } else {
                    b.clone()
                }
            }
        }
    }
}

/// An opaque record of named style values, keyed by stable style names.
///
/// All breakpoints of one table are expected to carry the same key set;
/// interpolation only produces keys present in both bracketing states.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleState(BTreeMap<String, StyleValue>);

impl StyleState {
    /// Empty state with no style keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a style value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Insert or replace a style value.
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) -> Option<StyleValue> {
        self.0.insert(key.into(), value)
    }

    /// Number of style keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys in stable (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(key, value)` pairs in stable (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, StyleValue)> for StyleState {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Lerp for StyleState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.0.iter()
            .filter_map(|(key, va)| {
                b.0.get(key)
                    .map(|vb| (key.clone(), StyleValue::lerp(va, vb, t)))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/style.rs"]
mod tests;

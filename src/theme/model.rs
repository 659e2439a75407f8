use std::collections::BTreeMap;

use crate::foundation::error::{UnfurlError, UnfurlResult};
use crate::interp::table::{Breakpoint, InterpolationTable, StyleTable};
use crate::mapper::progress::ProgressScope;
use crate::reveal::intersect::{EdgeInsets, InsetValue};

/// A complete theme configuration.
///
/// A theme is a pure data model that can be:
/// - built programmatically (see [`crate::ThemeBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// It declares the ambient style breakpoints one page-scoped mapper samples,
/// plus per-element reveal settings. Driving it is performed by
/// [`crate::PageSession`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ThemeSpec {
    /// Theme name for authoring/debugging.
    pub name: String,
    /// Scroll scope of the ambient mapper.
    #[serde(default)]
    pub scope: ProgressScope,
    /// Ordered style breakpoints spanning progress 0 to 1.
    pub stops: Vec<StopSpec>,
    /// Reveal settings keyed by stable element ids.
    #[serde(default)]
    pub reveals: BTreeMap<String, RevealSpec>,
}

/// One style breakpoint of a theme.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StopSpec {
    /// Progress position in `[0, 1]`.
    pub position: f64,
    /// Easing toward the next stop.
    #[serde(default)]
    pub ease: crate::interp::ease::Ease,
    /// Named style values pinned at this position.
    pub style: crate::interp::style::StyleState,
}

/// Reveal settings for one element.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    /// Viewport margin before intersection testing.
    #[serde(default)]
    pub margin: MarginSpec,
}

impl RevealSpec {
    /// Uniform margin from the observed `"-60px"`-style convention.
    pub fn with_margin(margin: InsetValue) -> Self {
        Self {
            margin: MarginSpec::Uniform(margin),
        }
    }

    /// The effective edge insets.
    pub fn insets(&self) -> EdgeInsets {
        match self.margin {
            MarginSpec::Uniform(v) => EdgeInsets::uniform(v),
            MarginSpec::Edges(e) => e,
        }
    }
}

/// Margin shorthand: a single uniform value (`"-60px"`) or explicit edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MarginSpec {
    /// Same inset on all four edges.
    Uniform(InsetValue),
    /// Per-edge insets.
    Edges(EdgeInsets),
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self::Uniform(InsetValue::Px(0.0))
    }
}

impl ThemeSpec {
    /// Parse a theme from JSON and validate it in one step.
    pub fn from_json(s: &str) -> UnfurlResult<Self> {
        let theme: Self =
            serde_json::from_str(s).map_err(|e| UnfurlError::serde(e.to_string()))?;
        theme.validate()?;
        Ok(theme)
    }

    #[tracing::instrument(skip(self), fields(theme = %self.name))]
    /// Validate the declarative contract the engine's hot paths assume.
    pub fn validate(&self) -> UnfurlResult<()> {
        if self.name.trim().is_empty() {
            return Err(UnfurlError::validation("theme name must be non-empty"));
        }
        if let ProgressScope::Element { height, .. } = self.scope
            && height < 0.0
        {
            return Err(UnfurlError::validation("element scope height must be >= 0"));
        }

        self.to_table()?.validate()?;

        let first_keys: Vec<&str> = self.stops[0].style.keys().collect();
        for stop in &self.stops[1..] {
            let keys: Vec<&str> = stop.style.keys().collect();
            if keys != first_keys {
                return Err(UnfurlError::validation(format!(
                    "stop at {} does not use the same style keys as the first stop",
                    stop.position
                )));
            }
        }

        for id in self.reveals.keys() {
            if id.trim().is_empty() {
                return Err(UnfurlError::validation("reveal id must be non-empty"));
            }
        }
        Ok(())
    }

    /// Lower the stops into a sampling table.
    pub fn to_table(&self) -> UnfurlResult<StyleTable> {
        InterpolationTable::new(
            self.stops
                .iter()
                .map(|s| Breakpoint {
                    position: s.position,
                    state: s.style.clone(),
                    ease: s.ease,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;

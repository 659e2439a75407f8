use std::collections::BTreeMap;

use crate::foundation::error::{UnfurlError, UnfurlResult};
use crate::interp::ease::Ease;
use crate::interp::style::StyleState;
use crate::mapper::progress::ProgressScope;
use crate::theme::model::{RevealSpec, StopSpec, ThemeSpec};

/// Fluent builder for [`ThemeSpec`] values; validates on `build()`.
pub struct ThemeBuilder {
    name: String,
    scope: ProgressScope,
    stops: Vec<StopSpec>,
    reveals: BTreeMap<String, RevealSpec>,
}

impl ThemeBuilder {
    /// Start a theme with the given name, page scope and no stops.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: ProgressScope::Page,
            stops: Vec::new(),
            reveals: BTreeMap::new(),
        }
    }

    /// Set the ambient mapper's scroll scope.
    pub fn scope(mut self, scope: ProgressScope) -> Self {
        self.scope = scope;
        self
    }

    /// Append a style stop with linear easing toward the next stop.
    pub fn stop(self, position: f64, style: StyleState) -> Self {
        self.stop_eased(position, style, Ease::Linear)
    }

    /// Append a style stop with an explicit easing curve.
    pub fn stop_eased(mut self, position: f64, style: StyleState, ease: Ease) -> Self {
        self.stops.push(StopSpec {
            position,
            ease,
            style,
        });
        self
    }

    /// Declare a revealable element. Duplicate ids are rejected.
    pub fn reveal(mut self, id: impl Into<String>, spec: RevealSpec) -> UnfurlResult<Self> {
        let id = id.into();
        if self.reveals.contains_key(&id) {
            return Err(UnfurlError::validation(format!(
                "duplicate reveal id '{id}'"
            )));
        }
        self.reveals.insert(id, spec);
        Ok(self)
    }

    /// Assemble and validate the theme.
    pub fn build(self) -> UnfurlResult<ThemeSpec> {
        let theme = ThemeSpec {
            name: self.name,
            scope: self.scope,
            stops: self.stops,
            reveals: self.reveals,
        };
        theme.validate()?;
        Ok(theme)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/dsl.rs"]
mod tests;

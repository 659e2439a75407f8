use std::collections::BTreeMap;

use crate::foundation::core::{Progress, Rect, ScrollSnapshot};
use crate::foundation::error::{UnfurlError, UnfurlResult};
use crate::interp::style::StyleState;
use crate::mapper::progress::ProgressMapper;
use crate::reveal::controller::RevealController;
use crate::signal::scroll::ScrollSignal;
use crate::theme::model::ThemeSpec;

/// One page's wiring of a theme: a scroll signal, the ambient style mapper
/// and one reveal controller per declared element.
///
/// The host publishes scroll measurements into [`PageSession::publish`] at
/// event rate and calls [`PageSession::on_frame`] once per animation frame;
/// the rendering layer polls the read accessors. Independent sessions share
/// nothing and may transiently disagree by up to one frame.
#[derive(Debug)]
pub struct PageSession {
    signal: ScrollSignal,
    mapper: ProgressMapper<StyleState>,
    reveals: BTreeMap<String, RevealController>,
}

impl PageSession {
    #[tracing::instrument(skip(theme), fields(theme = %theme.name))]
    /// Build a session from a theme, validating it first.
    pub fn new(theme: &ThemeSpec) -> UnfurlResult<Self> {
        Self::build(theme, false)
    }

    #[tracing::instrument(skip(theme), fields(theme = %theme.name))]
    /// Build a session for a degraded host with no intersection primitive:
    /// every element counts as revealed from the start, so content is never
    /// permanently hidden. The ambient mapper works as usual.
    pub fn degraded(theme: &ThemeSpec) -> UnfurlResult<Self> {
        Self::build(theme, true)
    }

    fn build(theme: &ThemeSpec, degraded: bool) -> UnfurlResult<Self> {
        theme.validate()?;
        let signal = ScrollSignal::new();
        let mapper = ProgressMapper::new(&signal, theme.scope, theme.to_table()?);
        let reveals = theme
            .reveals
            .iter()
            .map(|(id, spec)| {
                let controller = if degraded {
                    RevealController::always_revealed()
                } else {
                    RevealController::new(&signal, spec.insets())
                };
                (id.clone(), controller)
            })
            .collect();
        Ok(Self {
            signal,
            mapper,
            reveals,
        })
    }

    /// The session's scroll signal, for hosts that wire it up directly.
    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    /// Feed one raw scroll/resize measurement. Any event frequency is fine;
    /// work happens once per frame.
    pub fn publish(&self, snapshot: ScrollSnapshot) {
        self.signal.publish(snapshot);
    }

    /// Animation-frame tick driving the mapper and every reveal controller.
    pub fn on_frame(&self) {
        self.mapper.on_frame();
        for controller in self.reveals.values() {
            controller.on_frame();
        }
    }

    /// Latest normalized scroll progress.
    pub fn progress(&self) -> Progress {
        self.mapper.progress()
    }

    /// Latest interpolated ambient style state.
    pub fn current_state(&self) -> StyleState {
        self.mapper.current_state()
    }

    /// Reveal flag for an element id. Unknown ids read as revealed, so a
    /// wiring bug never leaves content permanently hidden.
    pub fn has_entered(&self, id: &str) -> bool {
        self.reveals.get(id).is_none_or(RevealController::has_entered)
    }

    /// Direct access to an element's reveal controller.
    pub fn reveal(&self, id: &str) -> Option<&RevealController> {
        self.reveals.get(id)
    }

    /// Update an element's measured document-space bounds.
    pub fn set_element_bounds(&self, id: &str, bounds: Rect) -> UnfurlResult<()> {
        self.reveals
            .get(id)
            .map(|c| c.set_bounds(bounds))
            .ok_or_else(|| UnfurlError::signal(format!("unknown reveal id '{id}'")))
    }

    /// Serializable view of the session's current outputs, in stable order.
    pub fn frame(&self) -> SessionFrame {
        SessionFrame {
            progress: self.progress().get(),
            state: self.current_state(),
            revealed: self
                .reveals
                .iter()
                .map(|(id, c)| (id.clone(), c.has_entered()))
                .collect(),
        }
    }
}

/// Snapshot of everything a renderer reads from a session, serializable for
/// golden assertions.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SessionFrame {
    /// Normalized progress.
    pub progress: f64,
    /// Interpolated ambient style state.
    pub state: StyleState,
    /// Reveal flags keyed by element id.
    pub revealed: BTreeMap<String, bool>,
}

#[cfg(test)]
#[path = "../../tests/unit/session/page.rs"]
mod tests;

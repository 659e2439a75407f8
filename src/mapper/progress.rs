use std::cell::{Cell, RefCell};

use crate::foundation::core::{Progress, Rect, ScrollSnapshot};
use crate::interp::lerp::Lerp;
use crate::interp::table::InterpolationTable;
use crate::signal::scroll::{ScrollSignal, Subscription};

/// Which span of the document a mapper normalizes against.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ProgressScope {
    /// Page-relative: 0 at document top, 1 with the viewport at the bottom.
    #[default]
    Page,
    /// Element-relative: 0 when the element's top edge is about to enter the
    /// viewport, 1 when its bottom edge has fully scrolled past.
    Element {
        /// Document y-offset of the element's top edge.
        top: f64,
        /// Element height.
        height: f64,
    },
}

impl ProgressScope {
    /// Element scope from a document-space bounding box.
    pub fn element(bounds: Rect) -> Self {
        Self::Element {
            top: bounds.y0,
            height: bounds.height(),
        }
    }

    /// Normalize a scroll measurement into progress for this scope.
    ///
    /// Degenerate geometry (non-scrollable page, zero travel span) resolves
    /// to 0 rather than NaN.
    pub fn resolve(self, snap: ScrollSnapshot) -> Progress {
        match self {
            Self::Page => {
                let scrollable = snap.content_height - snap.viewport.height;
                if scrollable <= 0.0 {
                    Progress::ZERO
                } else {
                    Progress::clamped(snap.scroll_top / scrollable)
                }
            }
            Self::Element { top, height } => {
                let span = snap.viewport.height + height;
                if span <= 0.0 {
                    Progress::ZERO
                } else {
                    let travelled = snap.scroll_top + snap.viewport.height - top;
                    Progress::clamped(travelled / span)
                }
            }
        }
    }
}

/// Maps a scroll signal to normalized progress and interpolated style state.
///
/// One mapper drives page-wide ambient state for one scroll scope. Several
/// mappers may share a signal; each recomputes independently and they may
/// transiently disagree by up to one frame. Dropping a mapper releases its
/// subscription, so ticks scheduled after unmount are no-ops.
#[derive(Debug)]
pub struct ProgressMapper<T> {
    sub: Subscription,
    scope: Cell<ProgressScope>,
    table: InterpolationTable<T>,
    progress: Cell<Progress>,
    state: RefCell<T>,
}

impl<T> ProgressMapper<T>
where
    T: Lerp + Clone,
{
    /// Subscribe a new mapper to `signal`.
    ///
    /// Progress reads 0 and state reads the table's start until the first
    /// measurement; if the signal already carries one, it is consumed
    /// immediately.
    pub fn new(signal: &ScrollSignal, scope: ProgressScope, table: InterpolationTable<T>) -> Self {
        let state = table.sample(Progress::ZERO);
        let mapper = Self {
            sub: signal.subscribe(),
            scope: Cell::new(scope),
            table,
            progress: Cell::new(Progress::ZERO),
            state: RefCell::new(state),
        };
        mapper.on_frame();
        mapper
    }

    /// Animation-frame tick: recompute iff a publish (or scope change)
    /// arrived since the last tick. Any number of intervening events
    /// coalesce into this one recompute.
    pub fn on_frame(&self) {
        if !self.sub.take_pending() {
            return;
        }
        let Some(snap) = self.sub.snapshot() else {
            return;
        };
        let p = self.scope.get().resolve(snap);
        self.progress.set(p);
        *self.state.borrow_mut() = self.table.sample(p);
        tracing::trace!(progress = p.get(), "mapper recomputed");
    }

    /// Latest completed progress computation. Never NaN; 0 before the first
    /// measurement.
    pub fn progress(&self) -> Progress {
        self.progress.get()
    }

    /// Latest completed state computation.
    pub fn current_state(&self) -> T {
        self.state.borrow().clone()
    }

    /// The scope currently tracked.
    pub fn scope(&self) -> ProgressScope {
        self.scope.get()
    }

    /// Re-target the mapper, e.g. after the host re-measures an element's
    /// geometry on layout change. Takes effect on the next frame.
    pub fn set_scope(&self, scope: ProgressScope) {
        self.scope.set(scope);
        self.sub.request();
    }

    /// The table this mapper samples.
    pub fn table(&self) -> &InterpolationTable<T> {
        &self.table
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapper/progress.rs"]
mod tests;

use std::cell::Cell;

use crate::foundation::core::Rect;
use crate::reveal::intersect::{EdgeInsets, intersects};
use crate::signal::scroll::{ScrollSignal, Subscription};

/// One-shot "has entered the viewport" tracker for a single element.
///
/// The flag starts false, flips to true the first time the element's
/// document-space bounds intersect the inset viewport, and never resets:
/// scrolling the element back out of view leaves it revealed. The flag is
/// the controller's only output; applying the entrance animation is the
/// caller's business.
#[derive(Debug)]
pub struct RevealController {
    /// `None` in degraded mode (no intersection primitive on the host).
    sub: Option<Subscription>,
    insets: EdgeInsets,
    /// Element bounds in document coordinates; `None` until the host
    /// measures a mounted element.
    bounds: Cell<Option<Rect>>,
    entered: Cell<bool>,
}

impl RevealController {
    /// Track a new element against `signal` with the given insets.
    pub fn new(signal: &ScrollSignal, insets: EdgeInsets) -> Self {
        Self {
            sub: Some(signal.subscribe()),
            insets,
            bounds: Cell::new(None),
            entered: Cell::new(false),
        }
    }

    /// Degraded-host fallback: no intersection primitive available, so the
    /// element counts as revealed from the start. Failing open keeps content
    /// visible; it is never an error.
    pub fn always_revealed() -> Self {
        Self {
            sub: None,
            insets: EdgeInsets::none(),
            bounds: Cell::new(None),
            entered: Cell::new(true),
        }
    }

    /// Update the element's document-space bounds after the host (re)runs
    /// layout. Schedules an intersection test for the next frame.
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(Some(bounds));
        if let Some(sub) = &self.sub {
            sub.request();
        }
    }

    /// Forget the element's bounds, e.g. when it is conditionally unmounted.
    /// An element that never re-mounts simply never reveals.
    pub fn clear_bounds(&self) {
        self.bounds.set(None);
    }

    /// Animation-frame tick: runs at most one intersection test, and none at
    /// all once the element has entered.
    pub fn on_frame(&self) {
        let Some(sub) = &self.sub else {
            return;
        };
        if !sub.take_pending() || self.entered.get() {
            return;
        }
        let (Some(snap), Some(bounds)) = (sub.snapshot(), self.bounds.get()) else {
            return;
        };
        if intersects(snap.viewport_rect(), &self.insets, bounds) {
            self.entered.set(true);
            tracing::debug!(?bounds, "element revealed");
        }
    }

    /// False until the first intersection; true forever after.
    pub fn has_entered(&self) -> bool {
        self.entered.get()
    }

    /// The insets this controller tests with.
    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;

use std::cell::Cell;

/// Single-flight recompute latch.
///
/// Scroll events may arrive at any rate; consumers recompute once per
/// animation frame. [`FrameGate::request`] arms the latch, and
/// [`FrameGate::take`] disarms it, so any number of requests between two
/// frames collapse into a single recompute.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// A disarmed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the latch. Idempotent.
    pub fn request(&self) {
        self.pending.set(true);
    }

    /// Disarm and report whether a recompute was pending.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    /// True while a recompute is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/frame.rs"]
mod tests;

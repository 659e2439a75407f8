use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::foundation::core::ScrollSnapshot;
use crate::signal::frame::FrameGate;

/// Shared, read-only scroll signal handle.
///
/// The hosting page owns one signal per scroll container and publishes a
/// fresh [`ScrollSnapshot`] on every raw scroll/resize event. Consumers
/// subscribe and are marked pending on publish; actual recomputation happens
/// on the next animation frame. Handles are cheap clones of one shared
/// state; everything is single-threaded.
#[derive(Clone, Debug, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<SignalInner>>,
}

#[derive(Debug, Default)]
struct SignalInner {
    /// Latest measurement; `None` until the host publishes the first one.
    snapshot: Option<ScrollSnapshot>,
    /// Subscriber gates; freed slots are reused.
    slots: SmallVec<[Option<Rc<FrameGate>>; 8]>,
}

impl ScrollSignal {
    /// A signal with no measurement and no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest measurement and arm every live subscriber's gate.
    ///
    /// O(subscribers); safe to call at raw scroll-event frequency.
    pub fn publish(&self, snapshot: ScrollSnapshot) {
        let mut inner = self.inner.borrow_mut();
        inner.snapshot = Some(snapshot);
        for gate in inner.slots.iter().flatten() {
            gate.request();
        }
    }

    /// Latest measurement, or `None` before the first publish.
    pub fn get(&self) -> Option<ScrollSnapshot> {
        self.inner.borrow().snapshot
    }

    /// Register a consumer. Dropping the returned [`Subscription`]
    /// unsubscribes synchronously.
    pub fn subscribe(&self) -> Subscription {
        let gate = Rc::new(FrameGate::new());
        let mut inner = self.inner.borrow_mut();
        // Late subscribers on an already-measured signal start pending so
        // their first frame computes real state instead of defaults.
        if inner.snapshot.is_some() {
            gate.request();
        }
        let slot = match inner.slots.iter().position(Option::is_none) {
            Some(free) => {
                inner.slots[free] = Some(Rc::clone(&gate));
                free
            }
            None => {
                inner.slots.push(Some(Rc::clone(&gate)));
                inner.slots.len() - 1
            }
        };
        Subscription {
            signal: Rc::downgrade(&self.inner),
            slot,
            gate,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.iter().flatten().count()
    }
}

/// RAII registration of one consumer on a [`ScrollSignal`].
///
/// Dropping a subscription removes it from the signal immediately, so a
/// publish that races an unmount is a no-op for the departed consumer.
#[derive(Debug)]
pub struct Subscription {
    signal: Weak<RefCell<SignalInner>>,
    slot: usize,
    gate: Rc<FrameGate>,
}

impl Subscription {
    /// Arm this subscription's own gate, for consumer-side input changes
    /// (re-measured element geometry, swapped scope) that require a
    /// recompute without a new scroll event.
    pub fn request(&self) {
        self.gate.request();
    }

    /// Consume the pending flag for this frame.
    pub fn take_pending(&self) -> bool {
        self.gate.take()
    }

    /// True when a publish arrived since the last frame.
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Read the signal's latest measurement through this subscription.
    ///
    /// `None` before the first publish, or after the signal itself was
    /// dropped (a stale tick; callers treat it as a no-op).
    pub fn snapshot(&self) -> Option<ScrollSnapshot> {
        self.signal.upgrade().and_then(|rc| rc.borrow().snapshot)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(rc) = self.signal.upgrade()
            && let Ok(mut inner) = rc.try_borrow_mut()
            && let Some(slot) = inner.slots.get_mut(self.slot)
        {
            *slot = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/scroll.rs"]
mod tests;

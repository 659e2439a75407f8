//! Unfurl is a scroll-progress-driven visual state engine.
//!
//! It turns a raw scroll signal into the two kinds of presentation state a
//! scroll-linked page needs:
//!
//! 1. **Continuous**: a normalized progress value in `[0, 1]`, mapped
//!    through an ordered breakpoint table into piecewise-interpolated style
//!    state (background/foreground colors, a gauge's fill level, ...).
//! 2. **One-shot**: a per-element "has entered the viewport" flag that
//!    gates an entrance transition exactly once per element.
//!
//! # Pipeline overview
//!
//! 1. **Publish**: the host pushes a [`ScrollSnapshot`] into a
//!    [`ScrollSignal`] on every raw scroll/resize event.
//! 2. **Coalesce**: publishes arm single-flight gates; nothing is computed
//!    until the next animation frame, so any event rate collapses to at most
//!    one recompute per consumer per frame.
//! 3. **Sample**: [`ProgressMapper`] normalizes the measurement for its
//!    scope and samples its [`InterpolationTable`]; [`RevealController`]s
//!    run their one-shot intersection tests.
//! 4. **Read**: the rendering layer polls plain accessors:
//!    [`PageSession::progress`], [`PageSession::current_state`],
//!    [`PageSession::has_entered`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic sampling**: interpolation is a pure function of the
//!   progress value and the table; repeated reads with no intervening scroll
//!   are identical.
//! - **Themes are data**: per-theme breakpoints and reveal margins live in a
//!   serde model ([`ThemeSpec`]), validated at the declarative boundary and
//!   never in the per-frame sampling path.
//! - **Single-threaded**: everything runs on the UI thread; handles are
//!   `Rc`-based and unsubscription is synchronous with drop.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod interp;
mod mapper;
mod reveal;
mod session;
mod signal;
mod theme;

pub use foundation::core::{Point, Progress, Rect, Rgba8, ScrollSnapshot, Size, Vec2};
pub use foundation::error::{UnfurlError, UnfurlResult};
pub use interp::ease::Ease;
pub use interp::lerp::Lerp;
pub use interp::style::{StyleState, StyleValue};
pub use interp::table::{Breakpoint, InterpolationTable, StyleTable};
pub use mapper::progress::{ProgressMapper, ProgressScope};
pub use reveal::controller::RevealController;
pub use reveal::intersect::{EdgeInsets, InsetValue, intersects};
pub use session::page::{PageSession, SessionFrame};
pub use signal::frame::FrameGate;
pub use signal::scroll::{ScrollSignal, Subscription};
pub use theme::dsl::ThemeBuilder;
pub use theme::model::{MarginSpec, RevealSpec, StopSpec, ThemeSpec};

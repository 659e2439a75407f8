use crate::foundation::core::Progress;
use crate::foundation::error::{UnfurlError, UnfurlResult};
use crate::interp::ease::Ease;
use crate::interp::lerp::Lerp;
use crate::interp::style::StyleState;

/// A pinned `(position, state)` pair in an interpolation table.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint<T> {
    /// Progress position in `[0, 1]`; strictly increasing across a table.
    pub position: f64,
    /// State reproduced exactly when progress hits `position`.
    pub state: T,
    /// Easing applied toward the next breakpoint.
    #[serde(default)]
    pub ease: Ease,
}

impl<T> Breakpoint<T> {
    /// Breakpoint with linear easing toward its successor.
    pub fn new(position: f64, state: T) -> Self {
        Self {
            position,
            state,
            ease: Ease::Linear,
        }
    }
}

/// An ordered breakpoint table mapping progress to interpolated state.
///
/// Sampling walks the table in O(log n) and is a pure function of the
/// progress value: well-formed tables (strictly increasing positions
/// spanning `[0, 1]`) yield continuous output with every breakpoint state
/// reproduced exactly at its position. Well-formedness is a documented
/// precondition of [`InterpolationTable::sample`], checked only by
/// [`InterpolationTable::validate`] at declarative boundaries (builders,
/// theme deserialization) and never in the sampling path.
#[derive(Clone, Debug, serde::Serialize)]
pub struct InterpolationTable<T> {
    breakpoints: Vec<Breakpoint<T>>,
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for InterpolationTable<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;

        #[derive(serde::Deserialize)]
        struct Repr<T> {
            breakpoints: Vec<Breakpoint<T>>,
        }

        // Deserialization is a declarative boundary: an empty table can
        // never reach `sample`.
        let repr = Repr::deserialize(deserializer)?;
        if repr.breakpoints.is_empty() {
            return Err(serde::de::Error::custom(
                "interpolation table must have at least one breakpoint",
            ));
        }
        Ok(Self {
            breakpoints: repr.breakpoints,
        })
    }
}

/// Table of named style values, the shape every theme configuration lowers
/// into.
pub type StyleTable = InterpolationTable<StyleState>;

impl<T> InterpolationTable<T>
where
    T: Lerp + Clone,
{
    /// Build a table from breakpoints. At least one breakpoint is required;
    /// ordering is the caller's contract (see [`InterpolationTable::validate`]).
    pub fn new(breakpoints: Vec<Breakpoint<T>>) -> UnfurlResult<Self> {
        if breakpoints.is_empty() {
            return Err(UnfurlError::table(
                "interpolation table must have at least one breakpoint",
            ));
        }
        Ok(Self { breakpoints })
    }

    /// Degenerate single-entry table: every progress value samples `state`.
    pub fn constant(state: T) -> Self {
        Self {
            breakpoints: vec![Breakpoint::new(0.0, state)],
        }
    }

    /// The breakpoints in table order.
    pub fn breakpoints(&self) -> &[Breakpoint<T>] {
        &self.breakpoints
    }

    /// Check the full well-formedness contract: at least two breakpoints,
    /// strictly increasing positions, first at 0 and last at 1.
    pub fn validate(&self) -> UnfurlResult<()> {
        if self.breakpoints.len() < 2 {
            return Err(UnfurlError::table(
                "interpolation table needs at least two breakpoints",
            ));
        }
        if !self
            .breakpoints
            .windows(2)
            .all(|w| w[0].position < w[1].position)
        {
            return Err(UnfurlError::table(
                "breakpoint positions must be strictly increasing",
            ));
        }
        let first = self.breakpoints[0].position;
        let last = self.breakpoints[self.breakpoints.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(UnfurlError::table(format!(
                "breakpoints must span [0, 1], got [{first}, {last}]"
            )));
        }
        Ok(())
    }

    /// Interpolated state at `p`.
    ///
    /// Progress outside the breakpoint span clamps to the boundary
    /// breakpoint's state exactly; duplicate positions collapse to the left
    /// state (`t = 0` when the segment has zero width).
    pub fn sample(&self, p: Progress) -> T {
        let p = p.get();
        let idx = self.breakpoints.partition_point(|b| b.position <= p);

        if idx == 0 {
            return self.breakpoints[0].state.clone();
        }
        if idx >= self.breakpoints.len() {
            return self.breakpoints[self.breakpoints.len() - 1].state.clone();
        }

        let a = &self.breakpoints[idx - 1];
        let b = &self.breakpoints[idx];
        let denom = b.position - a.position;
        if denom <= 0.0 {
            return a.state.clone();
        }

        let t = (p - a.position) / denom;
        T::lerp(&a.state, &b.state, a.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/table.rs"]
mod tests;

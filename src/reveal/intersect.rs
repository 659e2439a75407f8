use crate::foundation::core::Rect;
use crate::foundation::error::{UnfurlError, UnfurlResult};

/// A signed inset for one viewport edge, CSS `rootMargin` style.
///
/// Positive values grow the effective viewport outward (reveal triggers
/// earlier); negative values shrink it inward, so an element must travel
/// that far into the real viewport before counting as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsetValue {
    /// Absolute pixel inset.
    Px(f64),
    /// Percentage of the viewport dimension along this edge's axis.
    Percent(f64),
}

impl InsetValue {
    /// Parse the CSS-style textual form: `"-40px"`, `"12px"`, `"-10%"`.
    pub fn parse(s: &str) -> UnfurlResult<Self> {
        let s = s.trim();
        let (digits, ctor): (&str, fn(f64) -> Self) = if let Some(d) = s.strip_suffix("px") {
            (d, Self::Px)
        } else if let Some(d) = s.strip_suffix('%') {
            (d, Self::Percent)
        } else {
            return Err(UnfurlError::validation(format!(
                "inset '{s}' must end in 'px' or '%'"
            )));
        };
        let v: f64 = digits
            .trim()
            .parse()
            .map_err(|_| UnfurlError::validation(format!("inset '{s}' is not a number")))?;
        if !v.is_finite() {
            return Err(UnfurlError::validation(format!("inset '{s}' must be finite")));
        }
        Ok(ctor(v))
    }

    /// Pixel value given the viewport dimension this edge resolves against.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(v) => v / 100.0 * reference,
        }
    }
}

impl std::fmt::Display for InsetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl serde::Serialize for InsetValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for InsetValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Signed insets applied to the viewport before intersection testing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Top edge inset.
    pub top: InsetValue,
    /// Right edge inset.
    pub right: InsetValue,
    /// Bottom edge inset.
    pub bottom: InsetValue,
    /// Left edge inset.
    pub left: InsetValue,
}

impl EdgeInsets {
    /// No inset; the effective viewport is the geometric viewport.
    pub fn none() -> Self {
        Self::uniform(InsetValue::Px(0.0))
    }

    /// The same inset on all four edges.
    pub fn uniform(value: InsetValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The same pixel inset on all four edges.
    pub fn uniform_px(px: f64) -> Self {
        Self::uniform(InsetValue::Px(px))
    }

    /// The effective viewport after insets: positive insets expand each edge
    /// outward, negative contract it inward. Percentages resolve against the
    /// viewport height for top/bottom and width for left/right.
    pub fn apply(&self, viewport: Rect) -> Rect {
        let w = viewport.width();
        let h = viewport.height();
        Rect::new(
            viewport.x0 - self.left.resolve(w),
            viewport.y0 - self.top.resolve(h),
            viewport.x1 + self.right.resolve(w),
            viewport.y1 + self.bottom.resolve(h),
        )
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::none()
    }
}

/// Whether `element` intersects the inset viewport.
///
/// Touching edges count as intersecting, matching platform intersection
/// observers which report a hit at ratio 0. An inset that collapses the
/// effective viewport past zero area never intersects.
pub fn intersects(viewport: Rect, insets: &EdgeInsets, element: Rect) -> bool {
    let eff = insets.apply(viewport);
    if eff.x1 < eff.x0 || eff.y1 < eff.y0 {
        return false;
    }
    element.x0 <= eff.x1 && eff.x0 <= element.x1 && element.y0 <= eff.y1 && eff.y0 <= element.y1
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/intersect.rs"]
mod tests;

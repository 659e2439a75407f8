use crate::foundation::error::{UnfurlError, UnfurlResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Normalized scroll progress in `[0, 1]`.
///
/// Construction clamps, so a `Progress` can never hold NaN or an
/// out-of-range value. Before the first scroll measurement the engine
/// reports [`Progress::ZERO`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the very top of the tracked range.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the very end of the tracked range.
    pub const ONE: Self = Self(1.0);

    /// Clamp an arbitrary value into `[0, 1]`. NaN maps to 0.
    pub fn clamped(p: f64) -> Self {
        if p.is_nan() {
            return Self::ZERO;
        }
        Self(p.clamp(0.0, 1.0))
    }

    /// The inner value, guaranteed finite and in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Straight-alpha RGBA8 color.
///
/// Style interpolation runs independently per channel in this component
/// space, with each channel rounded to the nearest integer afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a CSS-style hex color: `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> UnfurlResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| UnfurlError::validation(format!("color '{s}' must start with '#'")))?;
        if !matches!(digits.len(), 6 | 8) {
            return Err(UnfurlError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| UnfurlError::validation(format!("color '{s}' has non-hex digits")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: if digits.len() == 8 { channel(6..8)? } else { 255 },
        })
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// One measurement of the host scroll state, in document coordinates.
///
/// The host publishes a fresh snapshot on every scroll/resize event; the
/// engine only ever reads the most recent one per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSnapshot {
    /// Document y-offset of the viewport's top edge.
    pub scroll_top: f64,
    /// Visible viewport dimensions.
    pub viewport: Size,
    /// Total scrollable content height.
    pub content_height: f64,
}

impl ScrollSnapshot {
    /// Snapshot from scroll offset, viewport size and content height.
    pub fn new(scroll_top: f64, viewport: Size, content_height: f64) -> Self {
        Self {
            scroll_top,
            viewport,
            content_height,
        }
    }

    /// The viewport box in document coordinates.
    pub fn viewport_rect(self) -> Rect {
        Rect::new(
            0.0,
            self.scroll_top,
            self.viewport.width,
            self.scroll_top + self.viewport.height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

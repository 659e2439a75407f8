use crate::foundation::core::Rgba8;

/// Linear interpolation between two values of the same type.
///
/// `t` is expected in `[0, 1]`; implementations must reproduce `a` exactly
/// at `t = 0` and `b` exactly at `t = 1` so breakpoint states are pinned.
pub trait Lerp: Sized {
    /// Interpolate from `a` toward `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Rgba8 {
    /// Per-channel interpolation in component space, rounded to the nearest
    /// representable value. Deliberately not a perceptual color blend.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/lerp.rs"]
mod tests;

//! RGBA color with validated components and HSV conversions.

use crate::error::ConfigError;

/// Color with `r`, `g`, `b`, `a` components in `[0, 1]`.
///
/// Validated at construction; the shading combinators below clamp instead,
/// so render-time arithmetic can never push a component out of range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self, ConfigError> {
        for c in [r, g, b, a] {
            if !(0.0..=1.0).contains(&c) || c.is_nan() {
                return Err(ConfigError::InvalidColorComponent(c));
            }
        }
        Ok(Self { r, g, b, a })
    }

    pub fn opaque(rgb: [f32; 3]) -> Result<Self, ConfigError> {
        Self::new(rgb[0], rgb[1], rgb[2], 1.0)
    }

    /// Replace alpha, clamped to `[0, 1]`.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scale the color channels by `k`, clamped to `[0, 1]`; alpha unchanged.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: (self.r * k).clamp(0.0, 1.0),
            g: (self.g * k).clamp(0.0, 1.0),
            b: (self.b * k).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Add `d` to each color channel, clamped to `[0, 1]`; alpha unchanged.
    #[inline]
    pub fn brightened(self, d: f32) -> Self {
        Self {
            r: (self.r + d).clamp(0.0, 1.0),
            g: (self.g + d).clamp(0.0, 1.0),
            b: (self.b + d).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Channel-wise blend toward `other` by `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Hue/saturation/value of the color channels. Hue is in `[0, 1)`.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let v = max;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= f32::EPSILON {
            return (0.0, s, v);
        }
        let h = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        } / 6.0;
        (h, s, v)
    }

    /// Build a color from hue/saturation/value. Hue wraps; `s`, `v`, and `a`
    /// are clamped to `[0, 1]`.
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match i as i32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACCENT_TEAL, RING_GOLD};

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!(
            Rgba::new(1.2, 0.0, 0.0, 1.0),
            Err(ConfigError::InvalidColorComponent(_))
        ));
        assert!(matches!(
            Rgba::new(0.0, -0.1, 0.0, 1.0),
            Err(ConfigError::InvalidColorComponent(_))
        ));
        assert!(Rgba::new(0.0, 0.5, 1.0, 0.0).is_ok());
    }

    #[test]
    fn hsv_round_trip_on_palette() {
        for rgb in [RING_GOLD, ACCENT_TEAL, [0.1, 0.1, 0.1]] {
            let c = Rgba::opaque(rgb).unwrap();
            let (h, s, v) = c.to_hsv();
            let back = Rgba::from_hsv(h, s, v, 1.0);
            assert!((back.r - c.r).abs() < 1e-5, "r mismatch for {rgb:?}");
            assert!((back.g - c.g).abs() < 1e-5, "g mismatch for {rgb:?}");
            assert!((back.b - c.b).abs() < 1e-5, "b mismatch for {rgb:?}");
        }
    }

    #[test]
    fn shading_combinators_stay_in_range() {
        let c = Rgba::opaque(RING_GOLD).unwrap();
        let bright = c.scaled(3.0).brightened(0.5);
        for v in [bright.r, bright.g, bright.b] {
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(c.with_alpha(1.7).a, 1.0);
        assert_eq!(c.with_alpha(-0.3).a, 0.0);
    }
}

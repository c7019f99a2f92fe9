//! Blackbody color approximation and small color helpers.
//!
//! Intermediate color math is allowed to leave the [0, 1] range to encode
//! over-bright particles; [`ColorRgb::clamped`] produces display-safe values
//! and is applied at GPU-upload time, never during generation.

use glam::Vec3;

use crate::error::SceneError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamp each channel into [0, 1].
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<ColorRgb> for Vec3 {
    fn from(c: ColorRgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for ColorRgb {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Piecewise-linear approximation of blackbody emission color.
///
/// Input is clamped to [1000, 12000] K. Five bands: red-orange below 3000 K,
/// orange-yellow to 5000 K, yellow-white to 6500 K, white to blue-white to
/// 8000 K, blue-white to blue above. Band endpoints meet exactly, so the
/// mapping is continuous across the whole range.
pub fn blackbody_color(kelvin: f32) -> ColorRgb {
    let t = kelvin.clamp(1000.0, 12_000.0);

    if t < 3000.0 {
        ColorRgb::new(1.0, 0.6 * (t - 1000.0) / 2000.0, 0.0)
    } else if t < 5000.0 {
        ColorRgb::new(
            1.0,
            0.6 + 0.4 * (t - 3000.0) / 2000.0,
            (0.3 * (t - 4000.0) / 1000.0).max(0.0),
        )
    } else if t < 6500.0 {
        ColorRgb::new(1.0, 1.0, 0.3 + 0.5 * (t - 5000.0) / 1500.0)
    } else if t < 8000.0 {
        ColorRgb::new(
            1.0 - 0.2 * (t - 6500.0) / 1500.0,
            1.0,
            0.8 + 0.2 * (t - 6500.0) / 1500.0,
        )
    } else {
        ColorRgb::new(
            0.8 - 0.2 * (t - 8000.0) / 4000.0,
            1.0 - 0.2 * (t - 8000.0) / 4000.0,
            1.0,
        )
    }
}

/// Component-wise linear interpolation.
///
/// `t` is deliberately not clamped: callers overshoot past 1.0 for punchier
/// highlights. Clamping, where needed, is the caller's responsibility.
pub fn lerp_color(a: ColorRgb, b: ColorRgb, t: f32) -> ColorRgb {
    ColorRgb::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
    )
}

/// Parse a `#RRGGBB` hex color (leading `#` optional).
pub fn hex_to_rgb(hex: &str) -> Result<ColorRgb, SceneError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SceneError::BadHexColor(hex.to_string()));
    }
    let channel = |i: usize| -> f32 {
        // slice bounds and digit validity checked above
        u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0) as f32 / 255.0
    };
    Ok(ColorRgb::new(channel(0), channel(2), channel(4)))
}

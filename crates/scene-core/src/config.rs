//! Configuration structs for scene presets.
//!
//! Everything a scene can tune lives here as data: field radii and
//! densities, per-layer motion constants, the camera's zoom curve and
//! per-section multiplier tables, section tints.

use glam::Vec3;

use crate::color::ColorRgb;
use crate::constants::SECTION_COUNT;
use crate::error::SceneError;
use crate::field::FieldKind;
use crate::scene::GeometryShape;

/// Statistical parameters recognized by [`crate::field::generate_field`].
///
/// Radii are expressed in multiples of `core_radius` so every field in a
/// scene shares one dimensional scale. `min_radius > max_radius` is legal and
/// concentrates the radial power-law toward `min_radius`.
#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Scene-wide scale unit (Schwarzschild radius or galactic core radius).
    pub core_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Exponent of the inverse-CDF radial draw: `r = min + u^exp * (max - min)`.
    pub radial_exponent: f32,
    /// Base vertical thickness of disk-like kinds.
    pub height_scale: f32,
    /// Extra thickness per unit of normalized radius (flaring disks).
    pub height_growth: f32,
    /// Per-particle intensity range `[lo, hi]`.
    pub intensity: [f32; 2],
    /// Range used to normalize radius for brightness falloff; defaults to
    /// `[min_radius, max_radius]` when left as zeros.
    pub norm_radius: [f32; 2],
    /// Probability of a white flare override per particle.
    pub flare_chance: f64,
    /// Brightness multiplier range applied by a flare.
    pub flare_brightness: [f32; 2],
    /// Size multiplier range applied by a flare.
    pub flare_size: [f32; 2],
    /// Probability of a shock-front brightening (disk kinds).
    pub shock_chance: f64,
    /// Global multiplier applied to every particle size.
    pub size_scale: f32,
    /// Spiral-arm structure (galaxy and dust kinds).
    pub arm_count: u32,
    pub spiral_tightness: f32,
    pub arm_width: f32,
    /// Fraction of dust-lane particles drawn as diffuse interstellar medium.
    pub diffuse_fraction: f64,
    /// Jet geometry (jet kinds only).
    pub jet: JetParams,
}

#[derive(Clone, Copy, Debug)]
pub struct JetParams {
    pub length: f32,
    /// Exponent of the height draw along the jet axis.
    pub height_exponent: f32,
    /// Multiplier on `length` giving the component's full reach.
    pub reach: f32,
    /// Exponent of the radial draw around the axis.
    pub radius_exponent: f32,
    pub base_radius: f32,
    /// Radius gained per unit of height (opening angle).
    pub radius_growth: f32,
}

impl Default for JetParams {
    fn default() -> Self {
        Self {
            length: 25.0,
            height_exponent: 0.4,
            reach: 2.0,
            radius_exponent: 4.0,
            base_radius: 0.1,
            radius_growth: 0.03,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            core_radius: 1.0,
            min_radius: 1.0,
            max_radius: 10.0,
            radial_exponent: 1.0,
            height_scale: 0.1,
            height_growth: 0.0,
            intensity: [0.5, 1.0],
            norm_radius: [0.0, 0.0],
            flare_chance: 0.0,
            flare_brightness: [3.0, 8.0],
            flare_size: [1.8, 3.0],
            shock_chance: 0.0,
            size_scale: 1.0,
            arm_count: 2,
            spiral_tightness: 0.22,
            arm_width: 0.8,
            diffuse_fraction: 0.0,
            jet: JetParams::default(),
        }
    }
}

impl FieldParams {
    /// Radius span for validation and range checks, low end first.
    pub fn radius_span(&self) -> (f32, f32) {
        if self.min_radius <= self.max_radius {
            (self.min_radius, self.max_radius)
        } else {
            (self.max_radius, self.min_radius)
        }
    }

    /// Normalization range for brightness falloff.
    pub fn norm_span(&self) -> (f32, f32) {
        if self.norm_radius == [0.0, 0.0] {
            self.radius_span()
        } else {
            (self.norm_radius[0], self.norm_radius[1])
        }
    }

    pub fn validate(&self, kind: FieldKind) -> Result<(), SceneError> {
        let fail = |reason: String| SceneError::InvalidParams {
            kind: kind.name(),
            reason,
        };
        for (label, v) in [
            ("core_radius", self.core_radius),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("radial_exponent", self.radial_exponent),
            ("height_scale", self.height_scale),
            ("size_scale", self.size_scale),
        ] {
            if !v.is_finite() {
                return Err(fail(format!("{label} is not finite")));
            }
        }
        if self.core_radius <= 0.0 {
            return Err(fail("core_radius must be positive".into()));
        }
        if self.min_radius < 0.0 || self.max_radius < 0.0 {
            return Err(fail("radii must be non-negative".into()));
        }
        let (_, hi) = self.radius_span();
        if hi <= 0.0 {
            return Err(fail("radius span must reach above zero".into()));
        }
        if !(0.0..=1.0).contains(&self.flare_chance)
            || !(0.0..=1.0).contains(&self.shock_chance)
            || !(0.0..=1.0).contains(&self.diffuse_fraction)
        {
            return Err(fail("probabilities must be within [0, 1]".into()));
        }
        if kind.is_spiral() && self.arm_count == 0 {
            return Err(fail("arm_count must be at least 1".into()));
        }
        if kind.is_jet() && (self.jet.length <= 0.0 || !self.jet.length.is_finite()) {
            return Err(fail("jet length must be positive".into()));
        }
        Ok(())
    }
}

/// Per-layer rotation policy applied every tick by the animation driver.
///
/// With `absolute` set, the y rotation is assigned from elapsed time each
/// frame; otherwise it accumulates. `spin` is radians per second either way.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerMotion {
    pub spin: f32,
    pub spin_wobble: f32,
    pub spin_wobble_freq: f32,
    /// Extra spin (rad/s) at full scroll progress.
    pub scroll_coupling: f32,
    pub sway_x: f32,
    pub sway_x_freq: f32,
    pub sway_z: f32,
    pub sway_z_freq: f32,
    /// How strongly progress suppresses the sway terms, 0 (never) to 1 (fully).
    pub sway_fade: f32,
    pub absolute: bool,
}

/// Per-section zoom adjustment applied on top of the eased zoom curve.
#[derive(Clone, Copy, Debug)]
pub enum SectionZoom {
    /// Divide the base target depth by the entry for the active section.
    Divisor([f32; SECTION_COUNT]),
    /// Subtract `step * section_index` from the base target depth.
    LinearStep(f32),
}

/// Camera motion policy: zoom curve, orbital sweep, focus tightening, and
/// the variable smoothing gains.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub start_z: f32,
    pub end_z: f32,
    /// Exponent of the eased zoom curve (1.0 = linear).
    pub zoom_exponent: f32,
    pub section_zoom: SectionZoom,
    pub start_y: f32,
    pub end_y: f32,
    pub start_fov: f32,
    pub end_fov: f32,
    /// Total orbital sweep (radians) across full progress.
    pub orbit_sweep: f32,
    pub orbit_radius: f32,
    /// Fraction of the orbit radius removed at full progress.
    pub orbit_dampening: f32,
    /// Time-driven orbital drift (rad/s).
    pub orbit_drift: f32,
    pub bob_amplitude: f32,
    /// Look-at offset magnitude at zero progress; shrinks toward the origin.
    pub focus_offset: f32,
    pub tilt_amplitude: f32,
    pub roll_amplitude: f32,
    /// Base smoothing gain per tick.
    pub base_gain: f32,
    /// Zoom gain multiplier growth: `gain_z = base * (1 + progress * boost)`.
    pub zoom_gain_boost: f32,
    /// Height gain as a fraction of the base gain.
    pub height_gain_scale: f32,
    /// Gain for lateral position, field of view, and the look-at point.
    pub fast_gain: f32,
}

/// One generated point-cloud layer of a scene.
#[derive(Clone, Debug)]
pub struct FieldLayerConfig {
    pub name: &'static str,
    pub kind: FieldKind,
    pub count: usize,
    pub params: FieldParams,
    pub motion: LayerMotion,
    /// Material-level size multiplier applied on top of per-particle sizes.
    pub point_scale: f32,
}

/// One static mesh layer (event-horizon spheres, lensing rings, glow shells).
#[derive(Clone, Debug)]
pub struct GeometryLayerConfig {
    pub name: &'static str,
    pub shape: GeometryShape,
    pub color: ColorRgb,
    pub opacity: f32,
    /// Additive glow versus ordinary alpha occluder (the horizon spheres).
    pub additive: bool,
    pub motion: LayerMotion,
}

/// A complete scene description. Layer lists are ordered back-to-front; the
/// composer preserves that order for rendering (additive blending makes it a
/// quality concern rather than a correctness one).
#[derive(Clone, Debug)]
pub struct ScenePreset {
    pub name: &'static str,
    /// Static x tilt of the whole scene.
    pub base_tilt: f32,
    /// Additional root rotation per unit of scroll progress (x, y, z).
    pub tilt_coupling: Vec3,
    pub section_tints: [ColorRgb; SECTION_COUNT],
    pub field_layers: Vec<FieldLayerConfig>,
    pub geometry_layers: Vec<GeometryLayerConfig>,
    pub camera: CameraConfig,
}

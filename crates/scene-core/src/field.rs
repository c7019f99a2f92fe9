//! Procedural point-cloud generation.
//!
//! One parameterized generator covers every visual layer: the three
//! accretion-disk zones, lensed ring, halo, the three jet components, dust
//! lanes, molecular clouds, the spiral-galaxy disk, background star shells,
//! and quantum foam. Which structural recipe runs is selected by
//! [`FieldKind`]; everything tunable comes in through [`FieldParams`].
//!
//! Generation is fully deterministic: the RNG stream is derived from the
//! caller's seed mixed with a per-kind salt, so the same (kind, count,
//! params, seed) quadruple always produces bit-identical output.

use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::prelude::*;

use crate::color::{blackbody_color, lerp_color, ColorRgb};
use crate::config::FieldParams;
use crate::constants::{
    COOL_GAS, DARK_DUST, IONIZED_GAS, MOLECULAR_GAS, STELLAR_NURSERY, WARM_DUST,
};
use crate::error::SceneError;

/// Floor applied to every divisor and power-law base so no NaN or infinity
/// can reach an output array.
pub const EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    InnerDisk,
    MainDisk,
    OuterDisk,
    LensedRing,
    Halo,
    JetCore,
    JetSheath,
    JetCocoon,
    DustLane,
    MolecularCloud,
    SpiralArmStar,
    BackgroundStar,
    QuantumFoam,
}

impl FieldKind {
    pub const ALL: [FieldKind; 13] = [
        FieldKind::InnerDisk,
        FieldKind::MainDisk,
        FieldKind::OuterDisk,
        FieldKind::LensedRing,
        FieldKind::Halo,
        FieldKind::JetCore,
        FieldKind::JetSheath,
        FieldKind::JetCocoon,
        FieldKind::DustLane,
        FieldKind::MolecularCloud,
        FieldKind::SpiralArmStar,
        FieldKind::BackgroundStar,
        FieldKind::QuantumFoam,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::InnerDisk => "inner-disk",
            FieldKind::MainDisk => "main-disk",
            FieldKind::OuterDisk => "outer-disk",
            FieldKind::LensedRing => "lensed-ring",
            FieldKind::Halo => "halo",
            FieldKind::JetCore => "jet-core",
            FieldKind::JetSheath => "jet-sheath",
            FieldKind::JetCocoon => "jet-cocoon",
            FieldKind::DustLane => "dust-lane",
            FieldKind::MolecularCloud => "molecular-cloud",
            FieldKind::SpiralArmStar => "spiral-arm-star",
            FieldKind::BackgroundStar => "background-star",
            FieldKind::QuantumFoam => "quantum-foam",
        }
    }

    pub fn is_jet(self) -> bool {
        matches!(
            self,
            FieldKind::JetCore | FieldKind::JetSheath | FieldKind::JetCocoon
        )
    }

    pub fn is_spiral(self) -> bool {
        matches!(self, FieldKind::DustLane | FieldKind::SpiralArmStar)
    }

    /// Per-kind seed salt so sibling layers sharing a scene seed still draw
    /// independent streams.
    fn salt(self) -> u64 {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0) as u64;
        (index + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| SceneError::UnknownKind(s.to_string()))
    }
}

/// GPU-uploadable particle, colors clamped to display range at pack time.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// An immutable generated point cloud: index-aligned positions, colors, and
/// per-particle sizes. Regenerated wholesale on configuration change, never
/// mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    sizes: Vec<f32>,
}

impl Field {
    fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            sizes: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, position: Vec3, color: ColorRgb, size: f32) {
        debug_assert!(position.is_finite(), "non-finite particle position");
        debug_assert!(color.is_finite(), "non-finite particle color");
        debug_assert!(size.is_finite(), "non-finite particle size");
        self.positions.push(position);
        // Negative light is meaningless; over-bright stays (clamped at pack).
        self.colors
            .push(Vec3::new(color.r.max(0.0), color.g.max(0.0), color.b.max(0.0)));
        self.sizes.push(size.max(0.0));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Pack into GPU instances, clamping colors into display range.
    pub fn instances(&self) -> Vec<PointInstance> {
        self.positions
            .iter()
            .zip(&self.colors)
            .zip(&self.sizes)
            .map(|((p, c), s)| PointInstance {
                position: p.to_array(),
                size: *s,
                color: [
                    c.x.clamp(0.0, 1.0),
                    c.y.clamp(0.0, 1.0),
                    c.z.clamp(0.0, 1.0),
                    1.0,
                ],
            })
            .collect()
    }
}

/// Generate `count` particles of the given kind.
///
/// `count == 0` is valid and yields an empty field. Invalid parameters fail
/// before any allocation happens.
pub fn generate_field(
    kind: FieldKind,
    count: usize,
    params: &FieldParams,
    seed: u64,
) -> Result<Field, SceneError> {
    params.validate(kind)?;
    let mut rng = StdRng::seed_from_u64(seed ^ kind.salt());
    let mut field = Field::with_capacity(count);
    for _ in 0..count {
        match kind {
            FieldKind::InnerDisk | FieldKind::MainDisk | FieldKind::OuterDisk => {
                disk_particle(kind, params, &mut rng, &mut field)
            }
            FieldKind::LensedRing => lensed_particle(params, &mut rng, &mut field),
            FieldKind::Halo => halo_particle(params, &mut rng, &mut field),
            FieldKind::JetCore | FieldKind::JetSheath | FieldKind::JetCocoon => {
                jet_particle(kind, params, &mut rng, &mut field)
            }
            FieldKind::DustLane => dust_particle(params, &mut rng, &mut field),
            FieldKind::MolecularCloud => cloud_particle(params, &mut rng, &mut field),
            FieldKind::SpiralArmStar => galaxy_particle(params, &mut rng, &mut field),
            FieldKind::BackgroundStar => star_particle(params, &mut rng, &mut field),
            FieldKind::QuantumFoam => foam_particle(params, &mut rng, &mut field),
        }
    }
    Ok(field)
}

/// Inverse-CDF radial draw: `min + u^exp * (max - min)`. An exponent above
/// one concentrates mass toward `min_radius`; spans may be inverted to flip
/// the concentration end.
fn draw_radius(rng: &mut StdRng, params: &FieldParams) -> f32 {
    let u: f32 = rng.gen();
    params.min_radius + u.powf(params.radial_exponent) * (params.max_radius - params.min_radius)
}

fn range(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Shakura-Sunyaev temperature profile, hotter toward the horizon.
fn disk_temperature(radius: f32, core_radius: f32) -> f32 {
    10_000.0 * (radius / core_radius).max(EPS).powf(-0.75)
}

/// Doppler beaming and gravitational redshift for a circular orbit at
/// `radius` (geometrized units, GM = c = 1). The redshift factor is floored
/// just inside the ISCO so the innermost particles stay luminous instead of
/// collapsing to black.
fn relativistic_boost(radius: f32, angle: f32) -> f32 {
    let r = radius.max(EPS);
    let orbital_velocity = (1.0 / r).sqrt() * (1.0 + 0.15 / r);
    let velocity_angle = angle + orbital_velocity * 2.0;
    let radial_velocity = velocity_angle.cos() * orbital_velocity;
    let transverse_velocity = velocity_angle.sin() * orbital_velocity;
    let doppler = 1.0 / (1.0 + radial_velocity).max(EPS);
    let redshift = (1.0 - 2.0 / r).max(0.1).sqrt();
    doppler * redshift * (1.0 + transverse_velocity.abs() * 0.5)
}

fn disk_particle(kind: FieldKind, params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let radius = draw_radius(rng, params);
    let radius_norm = {
        let (lo, hi) = params.norm_span();
        ((radius - lo) / (hi - lo).max(EPS)).clamp(0.0, 1.0)
    };
    let intensity = range(rng, params.intensity[0], params.intensity[1]);
    let angle = rng.gen::<f32>() * TAU;

    // Magnetic turbulence and a weak spiral term give filament structure
    // without simulating anything.
    let turbulence_scale = intensity * 0.1;
    let magnetic_turbulence = (angle * 3.0 + radius * 0.5).sin() * turbulence_scale;
    let spiral_arm = (angle * 2.0 - radius * 0.3).sin() * 0.05;
    let thickness = params.height_scale + radius_norm * params.height_growth;
    let height = (rng.gen::<f32>() - 0.5) * thickness;

    let position = Vec3::new(
        radius * angle.cos() + magnetic_turbulence,
        height + (angle * 5.0 + radius * 0.8).sin() * turbulence_scale * 0.5,
        radius * angle.sin() + spiral_arm,
    );

    let temperature = disk_temperature(radius, params.core_radius);
    let blackbody = blackbody_color(temperature);
    let boost = relativistic_boost(radius, angle);
    let radial_intensity = (1.0 - radius_norm).powi(4) * intensity;

    let (mut color, mut size, mut brightness) = match kind {
        FieldKind::InnerDisk => (
            // ultra-hot ISCO material, driven toward white
            lerp_color(blackbody, ColorRgb::WHITE, 0.7),
            range(rng, 1.5, 3.5),
            range(rng, 8.0, 12.0) * boost,
        ),
        FieldKind::MainDisk => {
            let zone = radial_intensity.powi(2);
            if zone > 0.8 {
                (
                    lerp_color(blackbody, ColorRgb::new(1.0, 0.9, 0.6), 0.8),
                    range(rng, 1.2, 3.0),
                    range(rng, 6.0, 9.0) * boost,
                )
            } else if zone > 0.5 {
                (
                    lerp_color(blackbody, ColorRgb::new(1.0, 0.8, 0.4), 0.9),
                    range(rng, 1.0, 2.5),
                    range(rng, 4.0, 6.0) * boost,
                )
            } else {
                (
                    lerp_color(blackbody, ColorRgb::new(1.0, 0.7, 0.25), 0.95),
                    range(rng, 0.8, 2.0),
                    range(rng, 2.5, 4.0) * boost,
                )
            }
        }
        _ => (
            // cooler outer regions, pulled toward deep orange
            lerp_color(blackbody, ColorRgb::new(1.0, 0.5, 0.15), 0.7),
            range(rng, 0.6, 1.6),
            range(rng, 1.5, 2.5) * boost,
        ),
    };

    // Rare overrides: magnetic reconnection flares and shock fronts.
    if rng.gen::<f64>() < params.flare_chance {
        brightness *= range(rng, params.flare_brightness[0], params.flare_brightness[1]);
        size *= range(rng, params.flare_size[0], params.flare_size[1]);
        color = ColorRgb::WHITE;
    } else if rng.gen::<f64>() < params.shock_chance {
        brightness *= 2.5;
        size *= 1.8;
        color = lerp_color(color, ColorRgb::new(1.0, 0.9, 0.8), 0.6);
    }

    // Flow patterns modulate brightness; quantum flicker near the horizon.
    let magnetic_field = (angle * 4.0 + radius * 0.8).sin() * (angle * 2.0 - radius * 0.3).cos();
    brightness *= (1.0 + magnetic_field * 0.15 * intensity) * (1.0 + (angle * 3.0 - radius * 0.5).sin() * 0.1);
    if radius < params.core_radius * 2.5 && rng.gen::<f64>() < 0.01 {
        brightness *= range(rng, 2.0, 5.0);
        color = lerp_color(color, ColorRgb::new(0.8, 0.9, 1.0), 0.4);
    }

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn lensed_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let radius = draw_radius(rng, params);
    let angle = rng.gen::<f32>() * TAU;
    // Lensed back-side material appears displaced above and below the plane.
    let side = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    let height = side * (0.3 + rng.gen::<f32>() * 0.8);

    let position = Vec3::new(radius * angle.cos(), height, radius * angle.sin());
    let blackbody = blackbody_color(disk_temperature(radius, params.core_radius));
    let boost = relativistic_boost(radius, angle);

    let mut color = lerp_color(blackbody, ColorRgb::new(0.8, 0.6, 0.3), 0.6);
    let mut size = range(rng, 0.5, 1.3);
    let mut brightness = range(rng, params.intensity[0], params.intensity[1]) * boost * 0.7;
    if rng.gen::<f64>() < params.flare_chance {
        brightness *= range(rng, params.flare_brightness[0], params.flare_brightness[1]);
        size *= range(rng, params.flare_size[0], params.flare_size[1]);
        color = ColorRgb::WHITE;
    }

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn halo_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let radius = draw_radius(rng, params);
    let angle = rng.gen::<f32>() * TAU;
    let (lo, _) = params.radius_span();
    let reach = (radius - lo).max(0.0);
    let height = (rng.gen::<f32>() - 0.5) * (params.height_scale + reach * params.height_growth);

    let position = Vec3::new(radius * angle.cos(), height, radius * angle.sin());
    let color = ColorRgb::new(0.6, 0.3, 0.1);
    let brightness = range(rng, params.intensity[0], params.intensity[1]);
    let size = range(rng, 0.3, 0.8);

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn jet_particle(kind: FieldKind, params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let jet = &params.jet;
    let direction = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    let height = rng.gen::<f32>().powf(jet.height_exponent) * jet.length * jet.reach;
    let radius_base =
        rng.gen::<f32>().powf(jet.radius_exponent) * (jet.base_radius + height * jet.radius_growth);

    let angle = rng.gen::<f32>() * TAU;
    // Helical field lines, kink instability, magnetic pinch.
    let helix_angle = angle + height * 0.15;
    let kink = (height * 0.05).sin() * 0.2;
    let pinch = 1.0 + (height * 0.1).sin() * 0.1;
    let radius = radius_base * pinch * (1.0 + helix_angle.sin() * 0.2 + kink);

    let position = Vec3::new(radius * angle.cos(), height * direction, radius * angle.sin());

    let height_norm = height / (jet.length * 2.0).max(EPS);
    let lorentz = 1.0 + height_norm * 10.0;
    let synchrotron = lorentz * lorentz;

    let (mut color, mut size, mut brightness) = match kind {
        FieldKind::JetCore => {
            if height_norm < 0.1 {
                (ColorRgb::WHITE, range(rng, 3.0, 7.0), synchrotron * range(rng, 3.0, 5.0))
            } else if height_norm < 0.4 {
                (
                    ColorRgb::new(0.85, 0.9, 1.0),
                    range(rng, 2.5, 5.5),
                    synchrotron * range(rng, 2.0, 3.5),
                )
            } else if height_norm < 0.7 {
                (
                    ColorRgb::new(0.6, 0.8, 1.0),
                    range(rng, 2.0, 4.5),
                    synchrotron * range(rng, 1.5, 2.5),
                )
            } else {
                (
                    ColorRgb::new(0.4, 0.6, 0.95),
                    range(rng, 1.5, 3.5),
                    synchrotron * range(rng, 0.8, 1.6),
                )
            }
        }
        FieldKind::JetSheath => (
            ColorRgb::new(0.7, 0.75, 0.9),
            range(rng, 1.5, 3.5),
            synchrotron * 0.6 * range(rng, 0.6, 1.2),
        ),
        _ => (
            ColorRgb::new(0.8, 0.6, 0.7),
            range(rng, 1.2, 3.0),
            synchrotron * 0.4 * range(rng, 0.4, 0.9),
        ),
    };

    if rng.gen::<f64>() < params.flare_chance {
        brightness *= 6.0;
        size *= 3.0;
        color = ColorRgb::WHITE;
    } else if kind == FieldKind::JetCore && rng.gen::<f64>() < params.shock_chance {
        // magnetic reconnection events
        brightness *= 4.0;
        size *= 2.0;
        color = lerp_color(color, ColorRgb::new(1.0, 0.8, 1.0), 0.6);
    }

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn dust_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let (lo, hi) = params.radius_span();
    if rng.gen::<f64>() < params.diffuse_fraction {
        // Diffuse interstellar medium spread across the whole disk.
        let radius = rng.gen::<f32>().powf(0.9) * hi;
        let angle = rng.gen::<f32>() * TAU;
        let position = Vec3::new(
            radius * angle.cos() + (rng.gen::<f32>() - 0.5) * 3.0,
            (rng.gen::<f32>() - 0.5) * 3.0,
            radius * angle.sin() + (rng.gen::<f32>() - 0.5) * 3.0,
        );
        let opacity = range(rng, 0.1, 0.25);
        let size = range(rng, 1.5, 4.5);
        field.push(position, COOL_GAS.scaled(opacity), size * params.size_scale);
        return;
    }

    // Dark lanes hug the gap between spiral arms.
    let radius = lo + rng.gen::<f32>().powf(params.radial_exponent) * (hi - lo);
    let arm_index = rng.gen_range(0..params.arm_count.max(1));
    let arm_start = (arm_index as f32 / params.arm_count.max(1) as f32) * TAU;
    let spiral_angle = arm_start
        + params.spiral_tightness * (radius / params.core_radius).max(EPS).ln();
    let between_arms = spiral_angle + PI / params.arm_count.max(1) as f32;
    let final_angle = between_arms + (rng.gen::<f32>() - 0.5) * params.arm_width * 0.8;

    let position = Vec3::new(
        radius * final_angle.cos() + (rng.gen::<f32>() - 0.5) * 2.0,
        (rng.gen::<f32>() - 0.5) * 1.5,
        radius * final_angle.sin() + (rng.gen::<f32>() - 0.5) * 2.0,
    );

    let progress = (radius / hi.max(EPS)).clamp(0.0, 1.0);
    let color = if progress < 0.3 {
        lerp_color(DARK_DUST, WARM_DUST, progress / 0.3)
    } else if progress < 0.7 {
        lerp_color(WARM_DUST, COOL_GAS, (progress - 0.3) / 0.4)
    } else {
        lerp_color(COOL_GAS, MOLECULAR_GAS, (progress - 0.7) / 0.3)
    };

    let mut opacity = range(rng, 0.2, 0.5);
    let mut size = range(rng, 2.0, 6.0);
    if rng.gen::<f64>() < 0.05 {
        // dust illuminated by a nearby star
        opacity *= 1.4;
        size *= 1.2;
    }
    field.push(position, color.scaled(opacity), size * params.size_scale);
}

fn cloud_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let (lo, hi) = params.radius_span();
    let radius = lo + rng.gen::<f32>() * (hi - lo);
    let clumpiness = (radius * 0.15).sin() * 0.3;
    let angle = rng.gen::<f32>() * TAU + clumpiness;

    let position = Vec3::new(
        radius * angle.cos() + (rng.gen::<f32>() - 0.5) * 5.0,
        (rng.gen::<f32>() - 0.5) * params.height_scale,
        radius * angle.sin() + (rng.gen::<f32>() - 0.5) * 5.0,
    );

    let roll: f32 = rng.gen();
    let (color, opacity) = if roll < 0.3 {
        (STELLAR_NURSERY, range(rng, 0.4, 0.7))
    } else if roll < 0.6 {
        (IONIZED_GAS, range(rng, 0.3, 0.5))
    } else {
        (MOLECULAR_GAS, range(rng, 0.2, 0.5))
    };
    let size = range(rng, 3.0, 8.0);

    field.push(position, color.scaled(opacity), size * params.size_scale);
}

fn galaxy_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let max_radius = params.max_radius;
    let core_radius = params.core_radius;
    let bulge_radius = params.min_radius.max(core_radius);

    // Exponential disk density profile.
    let u: f32 = rng.gen();
    let radius = (-(1.0 - u * 0.95).max(EPS).ln() * (max_radius / 4.0)).min(max_radius);

    #[derive(PartialEq)]
    enum Population {
        Core,
        Bulge,
        YoungArm,
        OldDisk,
    }

    let (position, population) = if radius < core_radius {
        let angle = rng.gen::<f32>() * TAU;
        let r = radius * range(rng, 0.3, 1.0);
        (
            Vec3::new(
                r * angle.cos(),
                (rng.gen::<f32>() - 0.5) * 0.2,
                r * angle.sin(),
            ),
            Population::Core,
        )
    } else if radius < bulge_radius {
        let angle = rng.gen::<f32>() * TAU;
        let r = radius + (rng.gen::<f32>() - 0.5) * 0.8;
        (
            Vec3::new(
                r * angle.cos(),
                (rng.gen::<f32>() - 0.5) * (1.2 * (1.0 - radius / bulge_radius)),
                r * angle.sin(),
            ),
            Population::Bulge,
        )
    } else {
        // Logarithmic spiral arms: pick the nearest arm to a uniform angle.
        let base_angle = rng.gen::<f32>() * TAU;
        let mut best_arm_angle = base_angle;
        let mut min_arm_distance = f32::INFINITY;
        for arm in 0..params.arm_count {
            let arm_start = (arm as f32 / params.arm_count as f32) * TAU;
            let spiral_angle =
                arm_start + params.spiral_tightness * (radius / core_radius).max(EPS).ln();
            let diff = (base_angle - spiral_angle).rem_euclid(TAU);
            let wrapped = diff.min(TAU - diff);
            if wrapped < min_arm_distance {
                min_arm_distance = wrapped;
                best_arm_angle = spiral_angle;
            }
        }
        let arm_probability = (-min_arm_distance / params.arm_width.max(EPS)).exp();
        let in_arm = rng.gen::<f32>() < arm_probability;
        let final_angle = if in_arm {
            best_arm_angle + (rng.gen::<f32>() - 0.5) * params.arm_width * 0.4
        } else {
            base_angle + (rng.gen::<f32>() - 0.5) * 0.5
        };
        // Exponential scale-height vertical profile.
        let scale_height = 0.25 * (1.0 + radius / max_radius);
        let magnitude = -(rng.gen::<f32>().max(EPS)).ln() * scale_height;
        let y = if rng.gen::<f32>() < 0.5 { -magnitude } else { magnitude };
        (
            Vec3::new(radius * final_angle.cos(), y, radius * final_angle.sin()),
            if in_arm {
                Population::YoungArm
            } else {
                Population::OldDisk
            },
        )
    };

    let distance = (position.x * position.x + position.z * position.z).sqrt();
    let normalized = distance / max_radius.max(EPS);

    let (mut color, mut size) = match population {
        Population::Core => {
            let core_intensity = (1.0 - distance / core_radius.max(EPS)).max(0.0);
            let color = if rng.gen::<f32>() < 0.7 {
                // evolved orange-red giants
                ColorRgb::new(1.0, range(rng, 0.6, 0.9), range(rng, 0.3, 0.5))
            } else {
                ColorRgb::new(1.0, range(rng, 0.9, 1.0), range(rng, 0.6, 0.8))
            };
            (color, range(rng, 3.5, 6.5) + core_intensity * 2.0)
        }
        Population::Bulge => {
            let color = if rng.gen::<f32>() < 0.6 {
                // K-type orange
                ColorRgb::new(1.0, range(rng, 0.7, 0.9), range(rng, 0.4, 0.7))
            } else {
                // G-type yellow
                ColorRgb::new(1.0, range(rng, 0.8, 1.0), range(rng, 0.6, 0.9))
            };
            (color, range(rng, 2.5, 5.0))
        }
        Population::YoungArm => {
            if normalized < 0.4 {
                let color = if rng.gen::<f32>() < 0.5 {
                    // hot O/B stars
                    ColorRgb::new(range(rng, 0.7, 1.0), range(rng, 0.8, 1.0), 1.0)
                } else {
                    // white A/F stars
                    ColorRgb::new(range(rng, 0.9, 1.0), range(rng, 0.9, 1.0), range(rng, 0.95, 1.0))
                };
                (color, range(rng, 2.5, 5.0))
            } else {
                let color = if rng.gen::<f32>() < 0.6 {
                    ColorRgb::new(range(rng, 0.9, 1.0), range(rng, 0.9, 1.0), range(rng, 0.95, 1.0))
                } else {
                    // red giants
                    ColorRgb::new(1.0, range(rng, 0.5, 0.8), range(rng, 0.2, 0.5))
                };
                (color, range(rng, 2.0, 4.0))
            }
        }
        Population::OldDisk => {
            if normalized < 0.5 {
                (
                    ColorRgb::new(1.0, range(rng, 0.6, 0.9), range(rng, 0.3, 0.5)),
                    range(rng, 1.8, 3.3),
                )
            } else {
                // M-type red dwarfs
                (
                    ColorRgb::new(1.0, range(rng, 0.4, 0.6), range(rng, 0.1, 0.3)),
                    range(rng, 1.2, 2.4),
                )
            }
        }
    };

    // Occasional bright giants.
    if rng.gen::<f64>() < 0.05 {
        color = if rng.gen::<f32>() < 0.6 {
            ColorRgb::new(range(rng, 0.8, 1.0), range(rng, 0.85, 1.0), 1.0)
        } else {
            ColorRgb::new(1.0, range(rng, 0.4, 0.6), range(rng, 0.1, 0.3))
        };
        size *= 1.8;
    }

    let mut brightness = range(rng, 0.7, 1.0);
    if population == Population::YoungArm && rng.gen::<f64>() < 0.1 {
        // sparkle in the arms
        brightness *= 1.5;
        size *= 1.3;
    }

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn star_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let (lo, hi) = params.radius_span();
    let radius = range(rng, lo, hi);
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();

    let position = Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    );

    let class: f32 = rng.gen();
    let (color, size, brightness) = if class < 0.1 {
        // blue giants
        (ColorRgb::new(0.7, 0.8, 1.0), range(rng, 2.5, 4.5), range(rng, 0.8, 1.0))
    } else if class < 0.3 {
        (ColorRgb::new(0.9, 0.9, 1.0), range(rng, 2.0, 3.5), range(rng, 0.6, 0.9))
    } else if class < 0.6 {
        (ColorRgb::new(1.0, 0.9, 0.6), range(rng, 1.5, 2.7), range(rng, 0.5, 0.8))
    } else {
        (ColorRgb::new(1.0, 0.5, 0.2), range(rng, 1.2, 2.2), range(rng, 0.3, 0.7))
    };
    let brightness = brightness * range(rng, params.intensity[0], params.intensity[1]);

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

fn foam_particle(params: &FieldParams, rng: &mut StdRng, field: &mut Field) {
    let (lo, hi) = params.radius_span();
    let radius = range(rng, lo, hi);
    // Quantum positional uncertainty smears the shell.
    let effective_radius = radius + (rng.gen::<f32>() - 0.5) * 0.05 * rng.gen::<f32>();
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();

    let position = Vec3::new(
        effective_radius * phi.sin() * theta.cos(),
        effective_radius * phi.sin() * theta.sin(),
        effective_radius * phi.cos(),
    );

    // Hawking-style glow fading away from the horizon.
    let glow = (-(effective_radius - params.core_radius) * 10.0).exp().min(1.0);
    let (color, size, brightness) = if rng.gen::<f64>() < params.flare_chance {
        // virtual pair creation
        (ColorRgb::new(0.8, 0.9, 1.0), range(rng, 0.15, 0.35), glow * range(rng, 2.0, 5.0))
    } else {
        (ColorRgb::new(0.6, 0.7, 0.9), range(rng, 0.05, 0.15), glow * range(rng, 0.3, 0.8))
    };
    let brightness = brightness * range(rng, params.intensity[0], params.intensity[1]);

    field.push(position, color.scaled(brightness), size * params.size_scale);
}

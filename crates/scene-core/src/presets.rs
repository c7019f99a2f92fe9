//! The two built-in scene presets.
//!
//! Everything here is data: the distinct visual parameters of the black-hole
//! and spiral-galaxy scenes feed one shared generator, composer, and camera
//! director. The constants are tuned visual-design parameters, not derived
//! physics.

use glam::Vec3;

use crate::color::ColorRgb;
use crate::config::{
    CameraConfig, FieldLayerConfig, FieldParams, GeometryLayerConfig, JetParams, LayerMotion,
    ScenePreset, SectionZoom,
};
use crate::constants::{
    DISK_INNER_RADIUS, DISK_OUTER_RADIUS, GALAXY_ARM_COUNT, GALAXY_BULGE_RADIUS,
    GALAXY_CORE_RADIUS, GALAXY_MAX_RADIUS, GALAXY_SPIRAL_TIGHTNESS, GALAXY_ARM_WIDTH, JET_LENGTH,
    PHOTON_SPHERE, SCHWARZSCHILD_RADIUS, SECTION_COUNT,
};
use crate::field::FieldKind;
use crate::scene::GeometryShape;

const NO_TINT: [ColorRgb; SECTION_COUNT] = [ColorRgb::WHITE; SECTION_COUNT];

pub fn preset_by_name(name: &str) -> Option<ScenePreset> {
    match name {
        "black-hole" => Some(black_hole_preset()),
        "spiral-galaxy" => Some(spiral_galaxy_preset()),
        _ => None,
    }
}

/// Cinematic black hole: multi-zone accretion disk, relativistic jets,
/// quantum foam hugging the horizon, lensing rings, a background star shell.
pub fn black_hole_preset() -> ScenePreset {
    let rs = SCHWARZSCHILD_RADIUS;

    let disk_motion = LayerMotion {
        spin: 1.5,
        spin_wobble: 0.3,
        spin_wobble_freq: 0.1,
        scroll_coupling: 0.9,
        sway_x: 0.04,
        sway_x_freq: 0.05,
        sway_z: 0.02,
        sway_z_freq: 0.08,
        ..Default::default()
    };
    let jet_motion = LayerMotion {
        spin: 0.48,
        spin_wobble: 0.18,
        spin_wobble_freq: 0.15,
        ..Default::default()
    };
    let disk_params = |min: f32, max: f32, exp: f32, height: f32, growth: f32, intensity: [f32; 2]| {
        FieldParams {
            core_radius: rs,
            min_radius: min,
            max_radius: max,
            radial_exponent: exp,
            height_scale: height,
            height_growth: growth,
            intensity,
            norm_radius: [DISK_INNER_RADIUS, DISK_OUTER_RADIUS],
            ..Default::default()
        }
    };
    let jet_params = |jet: JetParams| FieldParams {
        core_radius: rs,
        min_radius: 0.0,
        max_radius: jet.length * jet.reach,
        flare_chance: 0.008,
        shock_chance: 0.003,
        jet,
        ..Default::default()
    };

    ScenePreset {
        name: "black-hole",
        base_tilt: 0.2,
        tilt_coupling: Vec3::new(0.1, 0.05, -0.02),
        section_tints: NO_TINT,
        field_layers: vec![
            FieldLayerConfig {
                name: "background-stars",
                kind: FieldKind::BackgroundStar,
                count: 8_000,
                params: FieldParams {
                    core_radius: rs,
                    min_radius: 30.0,
                    max_radius: 80.0,
                    intensity: [1.0, 1.0],
                    ..Default::default()
                },
                motion: LayerMotion {
                    spin: 0.012,
                    ..Default::default()
                },
                point_scale: 3.5,
            },
            FieldLayerConfig {
                name: "quantum-foam",
                kind: FieldKind::QuantumFoam,
                count: 15_000,
                params: FieldParams {
                    core_radius: rs,
                    min_radius: rs * 0.9,
                    max_radius: rs * 1.7,
                    intensity: [1.0, 1.0],
                    flare_chance: 0.02,
                    ..Default::default()
                },
                motion: LayerMotion::default(),
                point_scale: 0.02,
            },
            FieldLayerConfig {
                name: "hawking-glow",
                kind: FieldKind::QuantumFoam,
                count: 8_000,
                params: FieldParams {
                    core_radius: rs,
                    min_radius: rs,
                    max_radius: rs + 0.8,
                    intensity: [0.25, 0.4],
                    ..Default::default()
                },
                motion: LayerMotion {
                    spin: 0.9,
                    ..Default::default()
                },
                point_scale: 0.03,
            },
            FieldLayerConfig {
                name: "halo",
                kind: FieldKind::Halo,
                count: 4_800,
                params: FieldParams {
                    core_radius: rs,
                    min_radius: DISK_OUTER_RADIUS,
                    max_radius: DISK_OUTER_RADIUS * 3.0,
                    radial_exponent: 1.5,
                    height_scale: 0.2,
                    height_growth: 0.1,
                    intensity: [0.3, 0.7],
                    ..Default::default()
                },
                motion: disk_motion,
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "lensed-ring",
                kind: FieldKind::LensedRing,
                count: 4_200,
                params: FieldParams {
                    flare_chance: 0.000_5,
                    ..disk_params(
                        DISK_INNER_RADIUS,
                        DISK_OUTER_RADIUS * 0.8,
                        2.5,
                        0.0,
                        0.0,
                        [0.8, 1.5],
                    )
                },
                motion: disk_motion,
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "outer-disk",
                kind: FieldKind::OuterDisk,
                count: 9_000,
                params: disk_params(
                    DISK_OUTER_RADIUS * 0.6,
                    DISK_OUTER_RADIUS,
                    2.0,
                    0.08,
                    0.15,
                    [0.8, 1.5],
                ),
                motion: disk_motion,
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "main-disk",
                kind: FieldKind::MainDisk,
                count: 18_000,
                params: FieldParams {
                    shock_chance: 0.005,
                    ..disk_params(
                        PHOTON_SPHERE,
                        DISK_OUTER_RADIUS * 0.7,
                        3.0,
                        0.03,
                        0.08,
                        [1.5, 2.5],
                    )
                },
                motion: disk_motion,
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "inner-disk",
                kind: FieldKind::InnerDisk,
                // the span runs ISCO -> photon sphere so the density
                // concentrates against the ISCO edge
                count: 24_000,
                params: FieldParams {
                    flare_chance: 0.001,
                    shock_chance: 0.005,
                    ..disk_params(DISK_INNER_RADIUS, PHOTON_SPHERE, 6.0, 0.015, 0.0, [2.5, 4.0])
                },
                motion: disk_motion,
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "jet-cocoon",
                kind: FieldKind::JetCocoon,
                count: 1_800,
                params: jet_params(JetParams {
                    length: JET_LENGTH,
                    height_exponent: 0.8,
                    reach: 1.2,
                    radius_exponent: 1.5,
                    base_radius: 0.4,
                    radius_growth: 0.15,
                }),
                motion: jet_motion,
                point_scale: 1.2,
            },
            FieldLayerConfig {
                name: "jet-sheath",
                kind: FieldKind::JetSheath,
                count: 3_000,
                params: jet_params(JetParams {
                    length: JET_LENGTH,
                    height_exponent: 0.6,
                    reach: 1.5,
                    radius_exponent: 2.0,
                    base_radius: 0.2,
                    radius_growth: 0.08,
                }),
                motion: jet_motion,
                point_scale: 1.2,
            },
            FieldLayerConfig {
                name: "jet-core",
                kind: FieldKind::JetCore,
                count: 7_200,
                params: jet_params(JetParams {
                    length: JET_LENGTH,
                    height_exponent: 0.4,
                    reach: 2.0,
                    radius_exponent: 4.0,
                    base_radius: 0.1,
                    radius_growth: 0.03,
                }),
                motion: jet_motion,
                point_scale: 1.2,
            },
        ],
        geometry_layers: vec![
            GeometryLayerConfig {
                name: "einstein-ring",
                shape: GeometryShape::Ring {
                    inner_radius: PHOTON_SPHERE * 0.95,
                    outer_radius: PHOTON_SPHERE * 1.1,
                },
                color: ColorRgb::new(1.0, 0.667, 0.267), // #ffaa44
                opacity: 0.8,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "secondary-lensing-ring",
                shape: GeometryShape::Ring {
                    inner_radius: PHOTON_SPHERE * 1.15,
                    outer_radius: PHOTON_SPHERE * 1.3,
                },
                color: ColorRgb::new(1.0, 0.533, 0.2), // #ff8833
                opacity: 0.5,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "disk-base",
                shape: GeometryShape::Ring {
                    inner_radius: DISK_INNER_RADIUS * 0.9,
                    outer_radius: DISK_OUTER_RADIUS * 0.6,
                },
                color: ColorRgb::new(1.0, 0.4, 0.0), // #ff6600
                opacity: 0.4,
                additive: true,
                motion: disk_motion,
            },
            GeometryLayerConfig {
                name: "inner-glow-ring",
                shape: GeometryShape::Ring {
                    inner_radius: DISK_INNER_RADIUS * 0.95,
                    outer_radius: DISK_INNER_RADIUS * 1.8,
                },
                color: ColorRgb::new(1.0, 0.667, 0.2), // #ffaa33
                opacity: 0.7,
                additive: true,
                motion: disk_motion,
            },
            GeometryLayerConfig {
                name: "outer-lensing-ring",
                shape: GeometryShape::Ring {
                    inner_radius: rs * 2.5,
                    outer_radius: rs * 2.8,
                },
                color: ColorRgb::new(0.8, 0.4, 0.0), // #cc6600
                opacity: 0.12,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "horizon-shell",
                shape: GeometryShape::Sphere {
                    radius: rs * 1.02,
                    squash_y: 1.0,
                },
                color: ColorRgb::BLACK,
                opacity: 0.98,
                additive: false,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "event-horizon",
                shape: GeometryShape::Sphere {
                    radius: rs * 0.98,
                    squash_y: 1.0,
                },
                color: ColorRgb::BLACK,
                opacity: 1.0,
                additive: false,
                motion: LayerMotion::default(),
            },
        ],
        camera: CameraConfig {
            start_z: 50.0,
            end_z: 1.5,
            zoom_exponent: 1.8,
            // per-section arrival drama; the table must stay monotonic
            section_zoom: SectionZoom::Divisor([1.0, 2.5, 4.0, 6.0, 8.5, 12.0]),
            start_y: 15.0,
            end_y: -2.0,
            start_fov: 75.0,
            end_fov: 25.0,
            orbit_sweep: std::f32::consts::TAU,
            orbit_radius: 15.0,
            orbit_dampening: 0.9,
            orbit_drift: 0.05,
            bob_amplitude: 3.0,
            focus_offset: 5.0,
            tilt_amplitude: 0.3,
            roll_amplitude: 0.1,
            base_gain: 0.05,
            zoom_gain_boost: 4.0,
            height_gain_scale: 0.8,
            fast_gain: 0.08,
        },
    }
}

/// Photorealistic barred spiral galaxy: quarter-million-particle disk, dust
/// lanes, molecular clouds and nebulae, a volumetric glow-shell core, three
/// parallax starfield depths.
pub fn spiral_galaxy_preset() -> ScenePreset {
    let spiral = |min: f32, max: f32, exp: f32| FieldParams {
        core_radius: GALAXY_CORE_RADIUS,
        min_radius: min,
        max_radius: max,
        radial_exponent: exp,
        arm_count: GALAXY_ARM_COUNT,
        spiral_tightness: GALAXY_SPIRAL_TIGHTNESS,
        arm_width: GALAXY_ARM_WIDTH,
        ..Default::default()
    };
    let starfield = |min: f32, max: f32, size_scale: f32| FieldParams {
        core_radius: GALAXY_CORE_RADIUS,
        min_radius: min,
        max_radius: max,
        size_scale,
        intensity: [0.7, 1.0],
        ..Default::default()
    };
    let starfield_motion = |spin: f32, coupling: f32| LayerMotion {
        spin,
        scroll_coupling: coupling,
        absolute: true,
        ..Default::default()
    };

    ScenePreset {
        name: "spiral-galaxy",
        base_tilt: 0.3,
        tilt_coupling: Vec3::new(0.1, 0.05, -0.02),
        section_tints: [
            ColorRgb::WHITE,                 // home
            ColorRgb::WHITE,                 // about
            ColorRgb::new(0.4, 0.8, 1.0),    // skills: cyan
            ColorRgb::new(0.6, 0.4, 1.0),    // projects: purple
            ColorRgb::new(1.0, 0.5, 0.3),    // experience: orange
            ColorRgb::new(0.3, 1.0, 0.5),    // contact: green
        ],
        field_layers: vec![
            FieldLayerConfig {
                name: "far-stars",
                kind: FieldKind::BackgroundStar,
                count: 5_000,
                params: starfield(120.0, 300.0, 0.12),
                motion: starfield_motion(0.0002, 0.03),
                point_scale: 0.025,
            },
            FieldLayerConfig {
                name: "mid-stars",
                kind: FieldKind::BackgroundStar,
                count: 4_000,
                params: starfield(60.0, 120.0, 0.2),
                motion: starfield_motion(0.0004, 0.08),
                point_scale: 0.05,
            },
            FieldLayerConfig {
                name: "near-stars",
                kind: FieldKind::BackgroundStar,
                count: 3_000,
                params: starfield(25.0, 60.0, 0.3),
                motion: starfield_motion(0.0008, 0.15),
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "ambient-space",
                kind: FieldKind::BackgroundStar,
                count: 15_000,
                params: FieldParams {
                    intensity: [0.1, 0.3],
                    ..starfield(25.0, 80.0, 0.3)
                },
                motion: LayerMotion::default(),
                point_scale: 0.3,
            },
            FieldLayerConfig {
                name: "dust-lanes",
                kind: FieldKind::DustLane,
                count: 24_500,
                params: FieldParams {
                    diffuse_fraction: 0.286,
                    ..spiral(GALAXY_CORE_RADIUS, GALAXY_MAX_RADIUS, 1.2)
                },
                motion: LayerMotion {
                    spin: 0.09,
                    ..Default::default()
                },
                point_scale: 0.5,
            },
            FieldLayerConfig {
                name: "molecular-clouds",
                kind: FieldKind::MolecularCloud,
                count: 10_500,
                params: FieldParams {
                    height_scale: 2.5,
                    ..spiral(GALAXY_BULGE_RADIUS, GALAXY_MAX_RADIUS * 0.8, 1.0)
                },
                motion: LayerMotion {
                    spin: 0.09,
                    ..Default::default()
                },
                point_scale: 0.5,
            },
            FieldLayerConfig {
                name: "nebula",
                kind: FieldKind::MolecularCloud,
                count: 6_000,
                params: FieldParams {
                    height_scale: 0.8,
                    ..spiral(3.0, 13.0, 1.0)
                },
                motion: LayerMotion::default(),
                point_scale: 0.2,
            },
            FieldLayerConfig {
                name: "galaxy",
                kind: FieldKind::SpiralArmStar,
                count: 250_000,
                params: spiral(GALAXY_BULGE_RADIUS, GALAXY_MAX_RADIUS, 1.0),
                motion: LayerMotion {
                    spin: 0.09,
                    scroll_coupling: 0.108,
                    sway_x: 0.03,
                    sway_x_freq: 0.08,
                    sway_z: 0.02,
                    sway_z_freq: 0.05,
                    sway_fade: 0.7,
                    ..Default::default()
                },
                point_scale: 0.1,
            },
            FieldLayerConfig {
                name: "core-cloud",
                kind: FieldKind::Halo,
                count: 8_000,
                params: FieldParams {
                    core_radius: GALAXY_CORE_RADIUS,
                    min_radius: 0.0,
                    max_radius: 2.5,
                    radial_exponent: 2.0,
                    height_scale: 0.8,
                    height_growth: 0.5,
                    intensity: [0.8, 1.4],
                    ..Default::default()
                },
                motion: LayerMotion {
                    spin: 0.12,
                    scroll_coupling: 0.06,
                    ..Default::default()
                },
                point_scale: 0.08,
            },
            FieldLayerConfig {
                name: "star-clusters",
                kind: FieldKind::BackgroundStar,
                count: 1_200,
                params: FieldParams {
                    intensity: [0.8, 1.0],
                    ..starfield(0.0, 1.5, 0.5)
                },
                motion: LayerMotion {
                    spin: -0.15,
                    scroll_coupling: -0.09,
                    ..Default::default()
                },
                point_scale: 0.12,
            },
        ],
        geometry_layers: vec![
            GeometryLayerConfig {
                name: "outer-halo-glow",
                shape: GeometryShape::Sphere { radius: 1.8, squash_y: 0.95 },
                color: ColorRgb::new(0.690, 0.769, 0.871), // #B0C4DE
                opacity: 0.3,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "halo-glow",
                shape: GeometryShape::Sphere { radius: 1.2, squash_y: 0.9 },
                color: ColorRgb::new(1.0, 0.647, 0.0), // #FFA500
                opacity: 0.5,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "bulge-glow",
                shape: GeometryShape::Sphere { radius: 0.8, squash_y: 0.8 },
                color: ColorRgb::new(1.0, 0.702, 0.4), // #FFB366
                opacity: 0.7,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "core-glow",
                shape: GeometryShape::Sphere { radius: 0.4, squash_y: 1.0 },
                color: ColorRgb::new(1.0, 0.973, 0.863), // #FFF8DC
                opacity: 0.9,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "inner-core",
                shape: GeometryShape::Sphere { radius: 1.0, squash_y: 0.7 },
                color: ColorRgb::new(1.0, 0.843, 0.0), // #FFD700
                opacity: 0.5,
                additive: true,
                motion: LayerMotion {
                    spin: -0.09,
                    scroll_coupling: -0.06,
                    ..Default::default()
                },
            },
            GeometryLayerConfig {
                name: "volumetric-shell-1",
                shape: GeometryShape::Sphere { radius: 1.4, squash_y: 0.7 },
                color: ColorRgb::new(1.0, 0.647, 0.0), // #FFA500
                opacity: 0.35,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "volumetric-shell-2",
                shape: GeometryShape::Sphere { radius: 2.0, squash_y: 0.75 },
                color: ColorRgb::new(1.0, 0.549, 0.0), // #FF8C00
                opacity: 0.22,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "volumetric-shell-3",
                shape: GeometryShape::Sphere { radius: 2.8, squash_y: 0.8 },
                color: ColorRgb::new(1.0, 0.467, 0.0), // #FF7700
                opacity: 0.12,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "volumetric-shell-4",
                shape: GeometryShape::Sphere { radius: 3.5, squash_y: 0.82 },
                color: ColorRgb::new(1.0, 0.4, 0.0), // #FF6600
                opacity: 0.08,
                additive: true,
                motion: LayerMotion::default(),
            },
            GeometryLayerConfig {
                name: "arm-transition-glow",
                shape: GeometryShape::Sphere { radius: 4.5, squash_y: 0.85 },
                color: ColorRgb::new(0.980, 0.8, 0.078), // #FACC14
                opacity: 0.05,
                additive: true,
                motion: LayerMotion::default(),
            },
        ],
        camera: CameraConfig {
            start_z: 60.0,
            end_z: 3.0,
            zoom_exponent: 1.0,
            // linear variant: two extra depth units per section crossed
            section_zoom: SectionZoom::LinearStep(2.0),
            start_y: 15.0,
            end_y: 0.0,
            start_fov: 75.0,
            end_fov: 45.0,
            orbit_sweep: std::f32::consts::PI * 1.2,
            orbit_radius: 8.0,
            orbit_dampening: 0.7,
            orbit_drift: 0.0075,
            bob_amplitude: 3.0,
            focus_offset: 2.5,
            tilt_amplitude: 0.3,
            roll_amplitude: 0.1,
            base_gain: 0.02,
            zoom_gain_boost: 2.0,
            height_gain_scale: 0.6,
            fast_gain: 0.06,
        },
    }
}

use crate::color::ColorRgb;

// Shared scale and tuning constants for the two scene presets.

// Black-hole scene scale units (multiples of the Schwarzschild radius)
pub const SCHWARZSCHILD_RADIUS: f32 = 1.0; // event horizon
pub const PHOTON_SPHERE: f32 = SCHWARZSCHILD_RADIUS * 1.5; // where light orbits
pub const DISK_INNER_RADIUS: f32 = SCHWARZSCHILD_RADIUS * 2.0; // ISCO
pub const DISK_OUTER_RADIUS: f32 = SCHWARZSCHILD_RADIUS * 8.0; // extended disk
pub const JET_LENGTH: f32 = SCHWARZSCHILD_RADIUS * 25.0;

// Spiral-galaxy scene structure
pub const GALAXY_CORE_RADIUS: f32 = 1.8; // bright central bulge
pub const GALAXY_BULGE_RADIUS: f32 = 5.0;
pub const GALAXY_MAX_RADIUS: f32 = 28.0;
pub const GALAXY_ARM_COUNT: u32 = 2; // barred spiral
pub const GALAXY_SPIRAL_TIGHTNESS: f32 = 0.22;
pub const GALAXY_ARM_WIDTH: f32 = 0.8;

// Scroll sections (equal-weighted buckets of total progress)
pub const SECTION_COUNT: usize = 6;
pub const SECTION_NAMES: [&str; SECTION_COUNT] =
    ["home", "about", "skills", "projects", "experience", "contact"];

// Interstellar medium palette (dust-lane color ramp)
pub const DARK_DUST: ColorRgb = ColorRgb::new(0.169, 0.094, 0.063); // #2B1810
pub const WARM_DUST: ColorRgb = ColorRgb::new(0.545, 0.271, 0.075); // #8B4513
pub const COOL_GAS: ColorRgb = ColorRgb::new(0.255, 0.412, 0.882); // #4169E1
pub const IONIZED_GAS: ColorRgb = ColorRgb::new(0.863, 0.078, 0.235); // #DC143C
pub const MOLECULAR_GAS: ColorRgb = ColorRgb::new(0.110, 0.110, 0.110); // #1C1C1C
pub const STELLAR_NURSERY: ColorRgb = ColorRgb::new(1.0, 0.412, 0.706); // #FF69B4

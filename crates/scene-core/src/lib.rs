//! Core logic for the scroll-driven space-scene renderer: procedural field
//! generation, the blackbody color model, scene composition, the cinematic
//! camera director, the per-frame animation tick, and scroll mapping.

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod field;
pub mod presets;
pub mod scene;
pub mod scroll;
pub mod shaders;

pub use camera::{camera_target, CameraDirector, CameraPose};
pub use color::{blackbody_color, hex_to_rgb, lerp_color, ColorRgb};
pub use config::{
    CameraConfig, FieldLayerConfig, FieldParams, GeometryLayerConfig, JetParams, LayerMotion,
    ScenePreset, SectionZoom,
};
pub use constants::{SECTION_COUNT, SECTION_NAMES};
pub use error::SceneError;
pub use field::{generate_field, Field, FieldKind, PointInstance};
pub use presets::{black_hole_preset, preset_by_name, spiral_galaxy_preset};
pub use scene::{GeometryShape, LayerContent, Scene, SceneLayer, StaticGeometry, Transform};
pub use scroll::{map_scroll, ScrollState};

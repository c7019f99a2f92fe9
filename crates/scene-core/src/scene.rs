//! Scene composition and layer ownership.
//!
//! A [`Scene`] owns every layer for the lifetime of the mounted
//! visualization. Fields are generated once at composition and are immutable
//! afterward; only the per-layer transforms, the root transform, and the
//! section tint mutate, all of them through the animation driver.

use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

use crate::color::ColorRgb;
use crate::config::{LayerMotion, ScenePreset};
use crate::constants::SECTION_COUNT;
use crate::error::SceneError;
use crate::field::{generate_field, Field};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub scale: f32,
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: 1.0,
            position: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.position,
        )
    }
}

/// Static mesh shapes the composer knows how to place. Dimensions are in
/// the same `core_radius` multiples as the generated fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryShape {
    /// Sphere, optionally squashed on y (glow shells, bulge halos).
    Sphere { radius: f32, squash_y: f32 },
    /// Flat ring in the xz plane (lensing rings, disk base layers).
    Ring { inner_radius: f32, outer_radius: f32 },
}

#[derive(Clone, Debug)]
pub struct StaticGeometry {
    pub shape: GeometryShape,
    pub color: ColorRgb,
    pub opacity: f32,
    pub additive: bool,
}

#[derive(Clone, Debug)]
pub enum LayerContent {
    Points(Field),
    Geometry(StaticGeometry),
}

/// One renderable layer plus its live transform and motion policy.
#[derive(Clone, Debug)]
pub struct SceneLayer {
    pub name: &'static str,
    pub content: LayerContent,
    pub transform: Transform,
    pub motion: LayerMotion,
    /// Material-level size multiplier for point layers.
    pub point_scale: f32,
}

impl SceneLayer {
    pub fn field(&self) -> Option<&Field> {
        match &self.content {
            LayerContent::Points(f) => Some(f),
            LayerContent::Geometry(_) => None,
        }
    }
}

/// The composed scene: layers in back-to-front draw order, a root transform
/// carrying the global scroll-driven tilt, and the active section tint.
pub struct Scene {
    layers: SmallVec<[SceneLayer; 24]>,
    index: FnvHashMap<&'static str, usize>,
    pub root: Transform,
    pub tint: ColorRgb,
    pub base_tilt: f32,
    pub tilt_coupling: Vec3,
    pub section_tints: [ColorRgb; SECTION_COUNT],
}

impl Scene {
    /// Build every layer of a preset. Configuration is validated up front;
    /// any invalid layer fails the whole composition before GPU upload or
    /// animation can observe a half-built scene.
    pub fn compose(preset: &ScenePreset, seed: u64) -> Result<Self, SceneError> {
        if preset.field_layers.is_empty() && preset.geometry_layers.is_empty() {
            return Err(SceneError::EmptyScene(preset.name.to_string()));
        }
        for layer in &preset.field_layers {
            layer.params.validate(layer.kind)?;
        }

        let mut layers: SmallVec<[SceneLayer; 24]> = SmallVec::new();
        for config in &preset.field_layers {
            let field = generate_field(config.kind, config.count, &config.params, seed)?;
            log::info!(
                "[scene:{}] layer `{}` kind={} particles={}",
                preset.name,
                config.name,
                config.kind,
                field.len()
            );
            layers.push(SceneLayer {
                name: config.name,
                content: LayerContent::Points(field),
                transform: Transform::default(),
                motion: config.motion,
                point_scale: config.point_scale,
            });
        }
        for config in &preset.geometry_layers {
            layers.push(SceneLayer {
                name: config.name,
                content: LayerContent::Geometry(StaticGeometry {
                    shape: config.shape,
                    color: config.color,
                    opacity: config.opacity,
                    additive: config.additive,
                }),
                transform: Transform::default(),
                motion: config.motion,
                point_scale: 1.0,
            });
        }

        let index = layers
            .iter()
            .enumerate()
            .map(|(i, l)| (l.name, i))
            .collect::<FnvHashMap<_, _>>();

        log::info!(
            "[scene:{}] composed {} layers ({} point clouds, {} geometries)",
            preset.name,
            layers.len(),
            preset.field_layers.len(),
            preset.geometry_layers.len()
        );

        Ok(Self {
            layers,
            index,
            root: Transform {
                rotation: Vec3::new(preset.base_tilt, 0.0, 0.0),
                ..Transform::default()
            },
            tint: ColorRgb::WHITE,
            base_tilt: preset.base_tilt,
            tilt_coupling: preset.tilt_coupling,
            section_tints: preset.section_tints,
        })
    }

    /// Layers in draw order (back-to-front as configured).
    pub fn layers(&self) -> &[SceneLayer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [SceneLayer] {
        &mut self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&SceneLayer> {
        self.index.get(name).map(|&i| &self.layers[i])
    }

    pub fn particle_count(&self) -> usize {
        self.layers.iter().filter_map(|l| l.field().map(Field::len)).sum()
    }
}

//! The per-frame tick.
//!
//! One free function advances the whole mutable state of the system: layer
//! rotations, the scene's root tilt and section tint, and the camera pose.
//! The latest scroll state is passed by argument each call, so the tick
//! always observes fresh input without any captured references.
//!
//! The tick path never allocates; field data is generated only at
//! composition time and is untouched here.

use glam::Vec3;

use crate::camera::CameraDirector;
use crate::scroll::ScrollState;
use crate::scene::Scene;

pub fn tick(
    scene: &mut Scene,
    camera: &mut CameraDirector,
    scroll: &ScrollState,
    elapsed: f32,
    dt: f32,
) {
    let progress = if scroll.progress.is_finite() {
        scroll.progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    // Global tilt tightens with progress; tint follows the active section.
    scene.root.rotation = Vec3::new(
        scene.base_tilt + progress * scene.tilt_coupling.x,
        progress * scene.tilt_coupling.y,
        progress * scene.tilt_coupling.z,
    );
    scene.tint = scene.section_tints[scroll.section_index.min(scene.section_tints.len() - 1)];

    for layer in scene.layers_mut() {
        let m = layer.motion;
        let wobble = (elapsed * m.spin_wobble_freq).sin() * m.spin_wobble;
        if m.absolute {
            layer.transform.rotation.y =
                elapsed * m.spin + progress * m.scroll_coupling + wobble;
        } else {
            layer.transform.rotation.y +=
                (m.spin + wobble + progress * m.scroll_coupling) * dt;
        }
        let sway_fade = 1.0 - progress * m.sway_fade;
        if m.sway_x != 0.0 {
            layer.transform.rotation.x = (elapsed * m.sway_x_freq).sin() * m.sway_x * sway_fade;
        }
        if m.sway_z != 0.0 {
            layer.transform.rotation.z = (elapsed * m.sway_z_freq).cos() * m.sway_z * sway_fade;
        }
    }

    camera.update(progress, elapsed);
}

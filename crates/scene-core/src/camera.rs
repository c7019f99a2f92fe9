//! Cinematic camera director.
//!
//! Each tick the director computes a target pose as a pure function of
//! scroll progress and elapsed time, then eases the live pose toward it with
//! a variable-gain low-pass filter: the zoom gain grows with progress so the
//! camera answers faster during the final approach instead of lagging.

use glam::{Mat4, Vec2, Vec3};

use crate::config::{CameraConfig, SectionZoom};
use crate::constants::SECTION_COUNT;

/// A complete camera pose. `tilt` holds the extra x rotation and z roll
/// applied on top of the look-at orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub fov_deg: f32,
    pub look_at: Vec3,
    pub tilt: Vec2,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.tilt.y)
            * Mat4::from_rotation_x(self.tilt.x)
            * Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect.max(1e-3), znear, zfar)
    }
}

/// Pure target computation. Progress and elapsed time are clamped here so
/// the director stays robust against malformed upstream input.
pub fn camera_target(config: &CameraConfig, progress: f32, elapsed: f32) -> CameraPose {
    let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    let t = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

    let eased = p.powf(config.zoom_exponent);
    let base_z = config.start_z - eased * (config.start_z - config.end_z);

    // Discrete per-section step keyed to the equal-weighted scroll partition.
    // The punctuated "arrival" jump at each boundary is intentional.
    let section = ((p * SECTION_COUNT as f32) as usize).min(SECTION_COUNT - 1);
    let target_z = match config.section_zoom {
        SectionZoom::Divisor(table) => (base_z / table[section].max(1e-3)).max(config.end_z),
        SectionZoom::LinearStep(step) => (base_z - section as f32 * step).max(config.end_z),
    };

    let target_y = config.start_y - eased * (config.start_y - config.end_y);
    let target_fov = config.start_fov - eased * (config.start_fov - config.end_fov);

    // Orbital sweep that tightens as the zoom completes.
    let orbit_angle = p * config.orbit_sweep + t * config.orbit_drift;
    let orbit_radius = config.orbit_radius * (1.0 - p * config.orbit_dampening);
    let orbit_x = orbit_angle.sin() * orbit_radius;
    let orbit_z = orbit_angle.cos() * orbit_radius * 0.8;
    let bob = (orbit_angle * 2.0 + t * 0.1).sin() * config.bob_amplitude * (1.0 - p * 0.8);

    // The attention point itself tightens toward the origin.
    let focus = (1.0 - eased) * config.focus_offset;
    let look_at = Vec3::new(
        (orbit_angle + p * 0.8).sin() * focus,
        (orbit_angle * 0.4).sin() * focus * 0.4,
        (orbit_angle + p * 0.8).cos() * focus * 0.6,
    );

    let tilt = Vec2::new(
        (orbit_angle * 0.5).sin() * config.tilt_amplitude * (1.0 - p * 0.6),
        (orbit_angle * 0.2).sin() * config.roll_amplitude * (1.0 - p),
    );

    CameraPose {
        position: Vec3::new(orbit_x, target_y + bob, target_z + orbit_z * 0.2),
        fov_deg: target_fov,
        look_at,
        tilt,
    }
}

/// Owns the single live camera pose and eases it toward the per-tick target.
pub struct CameraDirector {
    config: CameraConfig,
    current: CameraPose,
}

impl CameraDirector {
    pub fn new(config: CameraConfig) -> Self {
        let current = camera_target(&config, 0.0, 0.0);
        Self { config, current }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn current(&self) -> &CameraPose {
        &self.current
    }

    /// Advance the live pose one tick toward the target for the given
    /// progress and elapsed time. Inputs are clamped at this boundary.
    pub fn update(&mut self, progress: f32, elapsed: f32) -> &CameraPose {
        let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        let target = camera_target(&self.config, p, elapsed);

        // Variable-gain low-pass: depth answers faster as progress grows,
        // height trails for a weightier feel, lateral motion and FOV share
        // the fast gain.
        let gain_z = self.config.base_gain * (1.0 + p * self.config.zoom_gain_boost);
        let gain_y = self.config.base_gain * self.config.height_gain_scale;
        let gain_fast = self.config.fast_gain;

        let cur = &mut self.current;
        cur.position.z += (target.position.z - cur.position.z) * gain_z;
        cur.position.y += (target.position.y - cur.position.y) * gain_y;
        cur.position.x += (target.position.x - cur.position.x) * gain_fast;
        cur.fov_deg += (target.fov_deg - cur.fov_deg) * gain_fast;
        cur.look_at += (target.look_at - cur.look_at) * gain_fast;
        // Tilt is applied directly; it is already a smooth function of time.
        cur.tilt = target.tilt;

        &self.current
    }
}

use glam::Vec3;

use scene_core::{
    black_hole_preset, driver, map_scroll, spiral_galaxy_preset, CameraDirector, ColorRgb,
    FieldKind, FieldLayerConfig, FieldParams, LayerMotion, Scene, SceneError, ScenePreset,
    SECTION_COUNT,
};

/// A small preset so driver tests stay fast.
fn tiny_preset() -> ScenePreset {
    let mut preset = black_hole_preset();
    preset.field_layers = vec![
        FieldLayerConfig {
            name: "spinner",
            kind: FieldKind::BackgroundStar,
            count: 100,
            params: FieldParams::default(),
            motion: LayerMotion {
                spin: 1.0,
                scroll_coupling: 0.5,
                ..Default::default()
            },
            point_scale: 1.0,
        },
        FieldLayerConfig {
            name: "clock",
            kind: FieldKind::BackgroundStar,
            count: 100,
            params: FieldParams::default(),
            motion: LayerMotion {
                spin: 0.25,
                absolute: true,
                ..Default::default()
            },
            point_scale: 1.0,
        },
    ];
    preset.geometry_layers.clear();
    preset
}

#[test]
fn presets_compose_with_their_documented_layer_lists() {
    let scene = Scene::compose(&black_hole_preset(), 42).unwrap();
    let names: Vec<_> = scene.layers().iter().map(|l| l.name).collect();
    assert_eq!(
        names,
        [
            "background-stars",
            "quantum-foam",
            "hawking-glow",
            "halo",
            "lensed-ring",
            "outer-disk",
            "main-disk",
            "inner-disk",
            "jet-cocoon",
            "jet-sheath",
            "jet-core",
            "einstein-ring",
            "secondary-lensing-ring",
            "disk-base",
            "inner-glow-ring",
            "outer-lensing-ring",
            "horizon-shell",
            "event-horizon",
        ]
    );
    // 24000 + 18000 + 9000 + 4200 + 4800 + 7200 + 3000 + 1800 + 15000 + 8000 + 8000
    assert_eq!(scene.particle_count(), 103_000);

    let galaxy = Scene::compose(&spiral_galaxy_preset(), 42).unwrap();
    assert_eq!(galaxy.layers().len(), 20);
    assert!(galaxy.particle_count() > 300_000);
    assert!(galaxy.layer("galaxy").is_some());
    assert!(galaxy.layer("no-such-layer").is_none());
}

#[test]
fn presets_resolve_by_name() {
    assert_eq!(scene_core::preset_by_name("black-hole").unwrap().name, "black-hole");
    assert_eq!(
        scene_core::preset_by_name("spiral-galaxy").unwrap().name,
        "spiral-galaxy"
    );
    assert!(scene_core::preset_by_name("wormhole").is_none());
}

#[test]
fn composition_is_deterministic_for_a_fixed_seed() {
    let a = Scene::compose(&black_hole_preset(), 7).unwrap();
    let b = Scene::compose(&black_hole_preset(), 7).unwrap();
    for (la, lb) in a.layers().iter().zip(b.layers()) {
        assert_eq!(la.field().map(|f| f.positions()), lb.field().map(|f| f.positions()));
    }
}

#[test]
fn invalid_layer_config_fails_the_whole_composition() {
    let mut preset = tiny_preset();
    preset.field_layers[0].params.max_radius = f32::INFINITY;
    assert!(matches!(
        Scene::compose(&preset, 1),
        Err(SceneError::InvalidParams { .. })
    ));

    let mut empty = tiny_preset();
    empty.field_layers.clear();
    empty.geometry_layers.clear();
    assert!(matches!(
        Scene::compose(&empty, 1),
        Err(SceneError::EmptyScene(_))
    ));
}

#[test]
fn tick_advances_rotations_deterministically() {
    let preset = tiny_preset();
    let mut a = Scene::compose(&preset, 3).unwrap();
    let mut b = Scene::compose(&preset, 3).unwrap();
    let mut cam_a = CameraDirector::new(preset.camera.clone());
    let mut cam_b = CameraDirector::new(preset.camera.clone());
    let scroll = map_scroll(450.0, 900.0, SECTION_COUNT);

    for frame in 0..120 {
        let elapsed = frame as f32 / 60.0;
        driver::tick(&mut a, &mut cam_a, &scroll, elapsed, 1.0 / 60.0);
        driver::tick(&mut b, &mut cam_b, &scroll, elapsed, 1.0 / 60.0);
    }
    for (la, lb) in a.layers().iter().zip(b.layers()) {
        assert_eq!(la.transform.rotation, lb.transform.rotation);
    }
    assert_eq!(cam_a.current(), cam_b.current());

    // additive spin integrates spin + coupling; absolute spin tracks time
    let spinner = a.layer("spinner").unwrap();
    let expected = (1.0 + 0.5 * 0.5) * 2.0; // (spin + progress*coupling) * seconds
    assert!(
        (spinner.transform.rotation.y - expected).abs() < 1e-3,
        "spinner at {} rad, expected {expected}",
        spinner.transform.rotation.y
    );
    let clock = a.layer("clock").unwrap();
    let last_elapsed = 119.0 / 60.0;
    assert!((clock.transform.rotation.y - 0.25 * last_elapsed).abs() < 1e-5);
}

#[test]
fn tick_leaves_field_data_untouched() {
    let preset = tiny_preset();
    let mut scene = Scene::compose(&preset, 5).unwrap();
    let mut camera = CameraDirector::new(preset.camera.clone());
    let before: Vec<Vec3> = scene.layers()[0].field().unwrap().positions().to_vec();

    let scroll = map_scroll(600.0, 900.0, SECTION_COUNT);
    for frame in 0..60 {
        driver::tick(&mut scene, &mut camera, &scroll, frame as f32 / 60.0, 1.0 / 60.0);
    }
    assert_eq!(scene.layers()[0].field().unwrap().positions(), &before[..]);
}

#[test]
fn root_tilt_and_tint_follow_scroll() {
    let preset = spiral_galaxy_preset();
    let mut scene = Scene::compose(&tiny_galaxy(&preset), 1).unwrap();
    let mut camera = CameraDirector::new(preset.camera.clone());

    // skills is the third section: cyan tint
    let scroll = map_scroll(2_400.0, 5_999.0, SECTION_COUNT);
    assert_eq!(scroll.section_index, 2);
    driver::tick(&mut scene, &mut camera, &scroll, 1.0, 1.0 / 60.0);
    assert_eq!(scene.tint, ColorRgb::new(0.4, 0.8, 1.0));

    let expected_x = scene.base_tilt + scroll.progress * scene.tilt_coupling.x;
    assert!((scene.root.rotation.x - expected_x).abs() < 1e-6);
    assert!((scene.root.rotation.y - scroll.progress * 0.05).abs() < 1e-6);

    // defensive clamping: a corrupted scroll state must not propagate
    let mut corrupt = scroll;
    corrupt.progress = f32::NAN;
    driver::tick(&mut scene, &mut camera, &corrupt, 2.0, 1.0 / 60.0);
    assert!(scene.root.rotation.x.is_finite());
    assert!(camera.current().position.is_finite());
}

fn tiny_galaxy(preset: &ScenePreset) -> ScenePreset {
    let mut small = preset.clone();
    for layer in &mut small.field_layers {
        layer.count = layer.count.min(200);
    }
    small.geometry_layers.truncate(2);
    small
}

use scene_core::{generate_field, FieldKind, FieldParams, SceneError};

fn default_params() -> FieldParams {
    FieldParams::default()
}

#[test]
fn generation_is_deterministic_for_a_fixed_seed() {
    for kind in FieldKind::ALL {
        let params = default_params();
        let a = generate_field(kind, 2_000, &params, 42).unwrap();
        let b = generate_field(kind, 2_000, &params, 42).unwrap();
        assert_eq!(a, b, "kind {kind} not reproducible");
    }
}

#[test]
fn different_seeds_draw_different_streams() {
    let params = default_params();
    let a = generate_field(FieldKind::MainDisk, 1_000, &params, 1).unwrap();
    let b = generate_field(FieldKind::MainDisk, 1_000, &params, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn arrays_stay_index_aligned() {
    for kind in FieldKind::ALL {
        let field = generate_field(kind, 1_234, &default_params(), 7).unwrap();
        assert_eq!(field.len(), 1_234);
        assert_eq!(field.positions().len(), field.colors().len());
        assert_eq!(field.colors().len(), field.sizes().len());
    }
}

#[test]
fn zero_count_yields_an_empty_field() {
    let field = generate_field(FieldKind::Halo, 0, &default_params(), 9).unwrap();
    assert!(field.is_empty());
    assert!(field.instances().is_empty());
}

#[test]
fn every_generated_value_is_finite_and_non_negative() {
    // A single NaN corrupts a particle's whole visual output, so this is the
    // most important property in the module.
    for kind in FieldKind::ALL {
        let field = generate_field(kind, 5_000, &default_params(), 3).unwrap();
        for p in field.positions() {
            assert!(p.is_finite(), "kind {kind} produced position {p:?}");
        }
        for c in field.colors() {
            assert!(c.is_finite(), "kind {kind} produced color {c:?}");
            assert!(c.min_element() >= 0.0, "kind {kind} produced negative color {c:?}");
        }
        for s in field.sizes() {
            assert!(s.is_finite() && *s >= 0.0, "kind {kind} produced size {s}");
        }
    }
}

#[test]
fn packed_instances_are_display_safe() {
    for kind in [FieldKind::InnerDisk, FieldKind::JetCore, FieldKind::QuantumFoam] {
        let params = FieldParams {
            flare_chance: 0.05,
            shock_chance: 0.05,
            intensity: [2.5, 4.0],
            ..default_params()
        };
        let field = generate_field(kind, 5_000, &params, 11).unwrap();
        for instance in field.instances() {
            for channel in instance.color {
                assert!((0.0..=1.0).contains(&channel), "channel {channel} escaped clamp");
            }
        }
    }
}

#[test]
fn background_stars_respect_the_configured_shell() {
    let params = FieldParams {
        min_radius: 30.0,
        max_radius: 80.0,
        ..default_params()
    };
    let field = generate_field(FieldKind::BackgroundStar, 100, &params, 5).unwrap();
    assert_eq!(field.len(), 100);
    for p in field.positions() {
        let r = p.length();
        assert!(
            (29.9..=80.1).contains(&r),
            "star at radius {r} escaped the shell"
        );
    }
    for c in field.colors() {
        assert!(c.is_finite());
    }
}

#[test]
fn jets_populate_both_hemispheres() {
    let field = generate_field(FieldKind::JetCore, 2_000, &default_params(), 13).unwrap();
    let above = field.positions().iter().filter(|p| p.y > 0.0).count();
    let below = field.positions().iter().filter(|p| p.y < 0.0).count();
    assert!(above > 500, "upper jet underpopulated: {above}");
    assert!(below > 500, "lower jet underpopulated: {below}");
}

#[test]
fn disk_thickness_follows_height_scale() {
    // With zero turbulence intensity the vertical extent is exactly the
    // configured half-thickness.
    let params = FieldParams {
        min_radius: 2.0,
        max_radius: 8.0,
        height_scale: 0.03,
        height_growth: 0.0,
        intensity: [0.0, 0.0],
        ..default_params()
    };
    let field = generate_field(FieldKind::MainDisk, 3_000, &params, 17).unwrap();
    for p in field.positions() {
        assert!(
            p.y.abs() <= 0.015 + 1e-5,
            "disk particle at height {} exceeds the configured thickness",
            p.y
        );
    }
}

#[test]
fn spiral_disk_stays_inside_its_radius() {
    let params = FieldParams {
        core_radius: 1.8,
        min_radius: 5.0,
        max_radius: 28.0,
        ..default_params()
    };
    let field = generate_field(FieldKind::SpiralArmStar, 20_000, &params, 19).unwrap();
    for p in field.positions() {
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!(
            planar <= 28.0 + 0.5,
            "galaxy particle at planar radius {planar}"
        );
    }
}

#[test]
fn inverted_radius_span_concentrates_at_the_far_end() {
    // The inner disk runs ISCO -> photon sphere with a high exponent, so
    // most particles hug the ISCO edge.
    let params = FieldParams {
        min_radius: 2.0,
        max_radius: 1.5,
        radial_exponent: 6.0,
        intensity: [0.0, 0.0],
        ..default_params()
    };
    let field = generate_field(FieldKind::InnerDisk, 4_000, &params, 23).unwrap();
    let near_isco = field
        .positions()
        .iter()
        .filter(|p| (p.x * p.x + p.z * p.z).sqrt() > 1.9)
        .count();
    assert!(
        near_isco > field.len() / 2,
        "only {near_isco} of {} particles near the concentration end",
        field.len()
    );
}

#[test]
fn unknown_kind_names_are_rejected() {
    match "warp-field".parse::<FieldKind>() {
        Err(SceneError::UnknownKind(name)) => assert_eq!(name, "warp-field"),
        other => panic!("expected UnknownKind, got {other:?}"),
    }
    for kind in FieldKind::ALL {
        assert_eq!(kind.name().parse::<FieldKind>().unwrap(), kind);
    }
}

#[test]
fn invalid_params_fail_before_generation() {
    let bad_radius = FieldParams {
        min_radius: -1.0,
        ..default_params()
    };
    assert!(matches!(
        generate_field(FieldKind::Halo, 10, &bad_radius, 1),
        Err(SceneError::InvalidParams { .. })
    ));

    let nan_radius = FieldParams {
        max_radius: f32::NAN,
        ..default_params()
    };
    assert!(matches!(
        generate_field(FieldKind::MainDisk, 10, &nan_radius, 1),
        Err(SceneError::InvalidParams { .. })
    ));

    let bad_chance = FieldParams {
        flare_chance: 1.5,
        ..default_params()
    };
    assert!(matches!(
        generate_field(FieldKind::JetCore, 10, &bad_chance, 1),
        Err(SceneError::InvalidParams { .. })
    ));
}

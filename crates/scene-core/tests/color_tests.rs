use scene_core::{blackbody_color, hex_to_rgb, lerp_color, ColorRgb, SceneError};

#[test]
fn blackbody_is_continuous_at_band_boundaries() {
    // Property: no channel may jump by more than 0.02 across a band edge.
    for boundary in [3000.0_f32, 5000.0, 6500.0, 8000.0] {
        let below = blackbody_color(boundary - 0.1);
        let above = blackbody_color(boundary + 0.1);
        for (lo, hi, name) in [
            (below.r, above.r, "r"),
            (below.g, above.g, "g"),
            (below.b, above.b, "b"),
        ] {
            assert!(
                (hi - lo).abs() < 0.02,
                "channel {name} jumps {lo} -> {hi} at {boundary}K"
            );
        }
    }
}

#[test]
fn blackbody_clamps_out_of_range_temperatures() {
    assert_eq!(blackbody_color(-500.0), blackbody_color(1000.0));
    assert_eq!(blackbody_color(0.0), blackbody_color(1000.0));
    assert_eq!(blackbody_color(50_000.0), blackbody_color(12_000.0));
}

#[test]
fn blackbody_channels_stay_in_unit_range() {
    let mut t = 1000.0_f32;
    while t <= 12_000.0 {
        let c = blackbody_color(t);
        for (v, name) in [(c.r, "r"), (c.g, "g"), (c.b, "b")] {
            assert!(v.is_finite(), "non-finite {name} at {t}K");
            assert!((0.0..=1.0).contains(&v), "{name}={v} out of range at {t}K");
        }
        t += 50.0;
    }
}

#[test]
fn blackbody_runs_red_to_blue() {
    let cool = blackbody_color(1500.0);
    let hot = blackbody_color(11_000.0);
    assert!(cool.r > cool.b, "cool temperatures should lean red");
    assert!(hot.b > hot.r, "hot temperatures should lean blue");
}

#[test]
fn lerp_color_interpolates_and_overshoots() {
    let a = ColorRgb::new(0.0, 0.5, 1.0);
    let b = ColorRgb::new(1.0, 0.5, 0.0);
    assert_eq!(lerp_color(a, b, 0.0), a);
    assert_eq!(lerp_color(a, b, 1.0), b);
    let mid = lerp_color(a, b, 0.5);
    assert!((mid.r - 0.5).abs() < 1e-6);
    // t past 1.0 is allowed and extrapolates
    let over = lerp_color(a, b, 2.0);
    assert!((over.r - 2.0).abs() < 1e-6);
    assert!((over.b - -1.0).abs() < 1e-6);
}

#[test]
fn clamped_brings_overshoot_back_into_range() {
    let c = ColorRgb::new(2.4, -0.3, 0.5).clamped();
    assert_eq!(c, ColorRgb::new(1.0, 0.0, 0.5));
}

#[test]
fn hex_parses_with_and_without_hash() {
    let c = hex_to_rgb("#FF6600").unwrap();
    assert!((c.r - 1.0).abs() < 1e-6);
    assert!((c.g - 0.4).abs() < 1e-3);
    assert!(c.b.abs() < 1e-6);
    assert_eq!(hex_to_rgb("ff6600").unwrap(), c);
}

#[test]
fn hex_rejects_malformed_input() {
    for bad in ["", "#ff66", "#ff66001", "#ggff00", "not a color"] {
        match hex_to_rgb(bad) {
            Err(SceneError::BadHexColor(s)) => assert_eq!(s, bad),
            other => panic!("expected BadHexColor for {bad:?}, got {other:?}"),
        }
    }
}

use scene_core::{map_scroll, SECTION_COUNT, SECTION_NAMES};

#[test]
fn progress_is_monotonic_in_offset() {
    let height = 900.0;
    let mut prev = map_scroll(0.0, height, SECTION_COUNT).progress;
    let mut offset = 0.0;
    while offset <= height {
        let state = map_scroll(offset, height, SECTION_COUNT);
        assert!(
            state.progress >= prev,
            "progress decreased at offset {offset}"
        );
        prev = state.progress;
        offset += 7.5;
    }
}

#[test]
fn section_partition_is_equal_weighted() {
    // Property: an offset of h*k/n lands in section min(k, n-1).
    for n in [2usize, 3, 4, 6, 8] {
        for h in [600.0_f32, 900.0, 4800.0] {
            for k in 0..=n {
                let offset = h * k as f32 / n as f32;
                let state = map_scroll(offset, h, n);
                assert_eq!(
                    state.section_index,
                    k.min(n - 1),
                    "offset {offset} of {h} with {n} sections"
                );
            }
        }
    }
}

#[test]
fn halfway_scroll_sits_at_start_of_fourth_section() {
    let state = map_scroll(450.0, 900.0, 6);
    assert_eq!(state.progress, 0.5);
    assert_eq!(state.section_index, 3);
    assert_eq!(state.section_name, "projects");
}

#[test]
fn degenerate_container_yields_zero_progress() {
    let state = map_scroll(100.0, 0.0, 6);
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.section_index, 0);
    assert_eq!(state.section_name, "home");

    let negative = map_scroll(100.0, -50.0, 6);
    assert_eq!(negative.progress, 0.0);
}

#[test]
fn progress_clamps_to_unit_range() {
    assert_eq!(map_scroll(-300.0, 900.0, 6).progress, 0.0);
    let over = map_scroll(2000.0, 900.0, 6);
    assert_eq!(over.progress, 1.0);
    assert_eq!(over.section_index, SECTION_COUNT - 1);
    assert_eq!(over.section_name, "contact");
}

#[test]
fn section_names_follow_the_page_order() {
    let height = 600.0;
    for (k, expected) in SECTION_NAMES.iter().enumerate() {
        // sample the middle of each section
        let offset = height * (k as f32 + 0.5) / SECTION_COUNT as f32;
        let state = map_scroll(offset, height, SECTION_COUNT);
        assert_eq!(state.section_name, *expected);
    }
}

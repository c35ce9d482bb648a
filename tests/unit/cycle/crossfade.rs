use super::*;

fn driver() -> CycleDriver {
    CycleDriver::start(
        vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        4000,
        Millis(0),
    )
    .unwrap()
}

#[test]
fn at_rest_only_current_slide_is_visible() {
    let d = driver();
    let layers = slide_layers(&d, Millis(100), 1000, 8.0);
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].opacity, 1.0);
    assert_eq!(layers[0].blur_px, 0.0);
    for l in &layers[1..] {
        assert_eq!(l.opacity, 0.0);
        assert_eq!(l.blur_px, 8.0);
    }
}

#[test]
fn mid_fade_blends_previous_and_current() {
    let mut d = driver();
    d.advance_to(Millis(4000));
    let layers = slide_layers(&d, Millis(4500), 1000, 8.0);
    assert_eq!(layers[1].opacity, 0.5);
    assert_eq!(layers[0].opacity, 0.5);
    assert_eq!(layers[2].opacity, 0.0);
    assert_eq!(layers[1].blur_px, 4.0);
}

#[test]
fn fade_completes_before_next_advance() {
    let mut d = driver();
    d.advance_to(Millis(4000));
    let layers = slide_layers(&d, Millis(5000), 1000, 8.0);
    assert_eq!(layers[1].opacity, 1.0);
    assert_eq!(layers[0].opacity, 0.0);
    let total: f64 = layers.iter().map(|l| l.opacity).sum();
    assert_eq!(total, 1.0);
}

#[test]
fn single_image_show_stays_opaque() {
    let mut d = CycleDriver::start(vec!["only.jpg".into()], 1000, Millis(0)).unwrap();
    d.advance_to(Millis(1000));
    let layers = slide_layers(&d, Millis(1200), 500, 8.0);
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].index, 0);
    assert_eq!(layers[0].opacity, 1.0);
    assert_eq!(layers[0].blur_px, 0.0);
}

#[test]
fn multi_tick_advance_fades_out_the_slide_that_was_on_screen() {
    let mut d = driver();
    d.advance_to(Millis(3999));
    let before = slide_layers(&d, Millis(3999), 1000, 8.0);
    assert_eq!(before[0].opacity, 1.0);

    // One clock jump fires two ticks: a -> c, skipping b.
    assert_eq!(d.advance_to(Millis(8000)), 2);
    assert_eq!(d.current_index(), 2);
    let start = slide_layers(&d, Millis(8000), 1000, 8.0);
    assert_eq!(start[0].opacity, 1.0);
    assert_eq!(start[1].opacity, 0.0);
    assert_eq!(start[2].opacity, 0.0);

    let mid = slide_layers(&d, Millis(8500), 1000, 8.0);
    assert_eq!(mid[0].opacity, 0.5);
    assert_eq!(mid[1].opacity, 0.0);
    assert_eq!(mid[2].opacity, 0.5);
}

#[test]
fn full_lap_in_one_advance_shows_current_at_rest() {
    let mut d = driver();
    assert_eq!(d.advance_to(Millis(12_000)), 3);
    assert_eq!(d.current_index(), 0);
    let layers = slide_layers(&d, Millis(12_000), 1000, 8.0);
    assert_eq!(layers[0].opacity, 1.0);
    assert_eq!(layers[1].opacity, 0.0);
    assert_eq!(layers[2].opacity, 0.0);
}

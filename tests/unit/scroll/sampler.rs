use super::*;
use proptest::prelude::*;

#[test]
fn nav_switch_is_strictly_past_threshold() {
    assert!(!nav_scrolled(0.0, 50.0));
    assert!(!nav_scrolled(50.0, 50.0));
    assert!(nav_scrolled(50.5, 50.0));
}

#[test]
fn listeners_follow_scroll_events() {
    let mut s = ScrollSampler::new();
    s.subscribe("nav".into(), ScrollListener::nav_bar(50.0));
    s.subscribe("hero-img".into(), ScrollListener::parallax(0.1));

    assert!(s.on_scroll(120.0));
    assert_eq!(
        s.get(&"nav".into()),
        Some(&ScrollListener::NavBar {
            threshold_px: 50.0,
            scrolled: true
        })
    );
    assert_eq!(
        s.get(&"hero-img".into()),
        Some(&ScrollListener::Parallax {
            factor: 0.1,
            offset_px: 120.0 * 0.1
        })
    );

    // Back near the top: the switch flips back, no hysteresis.
    s.on_scroll(10.0);
    assert!(matches!(
        s.get(&"nav".into()),
        Some(ScrollListener::NavBar { scrolled: false, .. })
    ));
}

#[test]
fn subscribe_samples_current_offset() {
    let mut s = ScrollSampler::new();
    s.on_scroll(900.0);
    s.subscribe("nav".into(), ScrollListener::nav_bar(50.0));
    assert!(matches!(
        s.get(&"nav".into()),
        Some(ScrollListener::NavBar { scrolled: true, .. })
    ));
}

#[test]
fn unsubscribed_listener_is_released() {
    let mut s = ScrollSampler::new();
    s.subscribe("p".into(), ScrollListener::parallax(0.1));
    let released = s.unsubscribe(&"p".into());
    assert!(released.is_some());
    assert_eq!(s.listener_count(), 0);
    s.on_scroll(500.0);
    assert!(s.get(&"p".into()).is_none());
    assert_eq!(s.offset_y(), 500.0);
}

#[test]
fn non_finite_offsets_are_dropped() {
    let mut s = ScrollSampler::new();
    s.on_scroll(40.0);
    assert!(!s.on_scroll(f64::NAN));
    assert!(!s.on_scroll(f64::INFINITY));
    assert_eq!(s.offset_y(), 40.0);
}

proptest! {
    #[test]
    fn signals_are_pure_functions_of_offset(y in 0.0f64..1.0e6) {
        let mut s = ScrollSampler::new();
        s.subscribe("nav".into(), ScrollListener::nav_bar(50.0));
        s.subscribe("p".into(), ScrollListener::parallax(0.1));
        s.on_scroll(y);
        let Some(ScrollListener::NavBar { scrolled, .. }) = s.get(&"nav".into()).copied() else {
            panic!("nav listener missing");
        };
        let Some(ScrollListener::Parallax { offset_px, .. }) = s.get(&"p".into()).copied() else {
            panic!("parallax listener missing");
        };
        prop_assert_eq!(scrolled, y > 50.0);
        prop_assert_eq!(offset_px, y * 0.1);
    }
}

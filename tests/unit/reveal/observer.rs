use super::*;
use crate::foundation::core::Viewport;

fn vp() -> Viewport {
    Viewport {
        width: 1000.0,
        height: 1000.0,
    }
}

fn key(s: &str) -> ElementKey {
    ElementKey::from(s)
}

#[test]
fn ratio_of_partially_visible_element() {
    let element = Rect::new(0.0, 900.0, 1000.0, 1100.0);
    let viewport = vp().visible_rect(0.0);
    assert!((intersection_ratio(element, viewport) - 0.5).abs() < 1e-12);
    assert_eq!(intersection_ratio(element, vp().visible_rect(2000.0)), 0.0);
    assert_eq!(intersection_ratio(element, vp().visible_rect(500.0)), 1.0);
}

#[test]
fn zero_area_elements_count_when_touching() {
    let line = Rect::new(0.0, 400.0, 1000.0, 400.0);
    assert_eq!(intersection_ratio(line, vp().visible_rect(0.0)), 1.0);
    assert_eq!(intersection_ratio(line, vp().visible_rect(500.0)), 0.0);
}

#[test]
fn on_screen_element_reveals_at_attach() {
    let mut obs = VisibilityObserver::new(ObserverCapability::Available);
    let revealed = obs
        .attach(
            key("hero"),
            Rect::new(0.0, 100.0, 500.0, 300.0),
            0.15,
            TransitionTiming::default(),
            vp().visible_rect(0.0),
            Millis(0),
        )
        .unwrap();
    assert!(revealed);
    assert_eq!(obs.get(&key("hero")).unwrap().revealed_at(), Some(Millis(0)));
    assert_eq!(obs.watching(), 0);
}

#[test]
fn reveal_fires_once_past_threshold_and_never_reverts() {
    let mut obs = VisibilityObserver::new(ObserverCapability::Available);
    // 1000px tall element starting one viewport below the fold.
    let rect = Rect::new(0.0, 1000.0, 1000.0, 2000.0);
    let revealed = obs
        .attach(
            key("card"),
            rect,
            0.15,
            TransitionTiming::default(),
            vp().visible_rect(0.0),
            Millis(0),
        )
        .unwrap();
    assert!(!revealed);
    assert!(!obs.get(&key("card")).unwrap().revealed());

    // 10% visible: below threshold.
    assert!(obs.observe(vp().visible_rect(100.0), Millis(10)).is_empty());
    assert!(!obs.get(&key("card")).unwrap().revealed());

    // 20% visible: fires.
    assert_eq!(obs.observe(vp().visible_rect(200.0), Millis(20)), vec![key("card")]);
    assert!(obs.get(&key("card")).unwrap().revealed());

    // Back to 0% visible: stays revealed, no second firing.
    assert!(obs.observe(vp().visible_rect(0.0), Millis(30)).is_empty());
    assert!(obs.observe(vp().visible_rect(300.0), Millis(40)).is_empty());
    let t = obs.get(&key("card")).unwrap();
    assert!(t.revealed());
    assert_eq!(t.revealed_at(), Some(Millis(20)));
}

#[test]
fn unavailable_capability_never_reveals() {
    let mut obs = VisibilityObserver::new(ObserverCapability::Unavailable);
    let revealed = obs
        .attach(
            key("hero"),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            0.15,
            TransitionTiming::default(),
            vp().visible_rect(0.0),
            Millis(0),
        )
        .unwrap();
    assert!(!revealed);
    assert!(obs.observe(vp().visible_rect(0.0), Millis(5)).is_empty());
    assert!(!obs.get(&key("hero")).unwrap().revealed());
}

#[test]
fn detach_releases_the_target() {
    let mut obs = VisibilityObserver::new(ObserverCapability::Available);
    obs.attach(
        key("a"),
        Rect::new(0.0, 5000.0, 100.0, 5100.0),
        0.15,
        TransitionTiming::default(),
        vp().visible_rect(0.0),
        Millis(0),
    )
    .unwrap();
    assert!(obs.detach(&key("a")).is_some());
    assert!(obs.is_empty());
    assert!(obs.observe(vp().visible_rect(4500.0), Millis(1)).is_empty());
    assert!(obs.detach(&key("a")).is_none());
}

#[test]
fn attach_validates_threshold_and_duplicates() {
    let mut obs = VisibilityObserver::default();
    let err = obs
        .attach(
            key("a"),
            Rect::ZERO,
            0.0,
            TransitionTiming::default(),
            vp().visible_rect(0.0),
            Millis(0),
        )
        .unwrap_err();
    assert!(matches!(err, FxError::Validation(_)));

    let far = Rect::new(0.0, 5000.0, 10.0, 5010.0);
    obs.attach(
        key("a"),
        far,
        0.5,
        TransitionTiming::default(),
        vp().visible_rect(0.0),
        Millis(0),
    )
    .unwrap();
    let err = obs
        .attach(
            key("a"),
            far,
            0.5,
            TransitionTiming::default(),
            vp().visible_rect(0.0),
            Millis(0),
        )
        .unwrap_err();
    assert!(matches!(err, FxError::Lifecycle(_)));
}

#[test]
fn relayout_into_view_reveals() {
    let mut obs = VisibilityObserver::default();
    obs.attach(
        key("late"),
        Rect::new(0.0, 3000.0, 100.0, 3100.0),
        0.15,
        TransitionTiming::default(),
        vp().visible_rect(0.0),
        Millis(0),
    )
    .unwrap();
    assert!(obs.relayout(
        &key("late"),
        Rect::new(0.0, 200.0, 100.0, 300.0),
        vp().visible_rect(0.0),
        Millis(7)
    ));
    assert!(!obs.relayout(&key("missing"), Rect::ZERO, vp().visible_rect(0.0), Millis(8)));
}

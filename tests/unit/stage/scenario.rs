use super::*;
use crate::foundation::core::ElementKey;

#[test]
fn minimal_scenario_uses_defaults() {
    let sc = Scenario::from_json_str(r#"{ "events": [] }"#).unwrap();
    assert_eq!(sc.config, FxConfig::default());
    assert_eq!(sc.observer, ObserverCapability::Available);
    let snaps = sc.run().unwrap();
    assert_eq!(snaps.len(), 1);
    assert_eq!(snaps[0].now_ms, 0);
}

#[test]
fn unavailable_observer_keeps_everything_hidden() {
    let sc = Scenario::from_json_str(
        r#"{
            "observer": "unavailable",
            "events": [
                { "type": "mount", "spec": { "kind": "reveal", "key": "hero",
                  "rect": { "x0": 0, "y0": 0, "x1": 100, "y1": 100 } } },
                { "type": "scroll", "offset_y": 10 },
                { "type": "advance", "now_ms": 5000 }
            ]
        }"#,
    )
    .unwrap();
    let snaps = sc.run().unwrap();
    let last = snaps.last().unwrap();
    let hero = ElementKey::from("hero");
    assert!(!last.is_revealed(&hero));
    assert_eq!(last.reveals[&hero].style.opacity, 0.0);
}

#[test]
fn invalid_config_fails_before_replay() {
    let sc = Scenario::from_json_str(
        r#"{ "config": { "reveal": { "threshold": 2.0 } }, "events": [] }"#,
    )
    .unwrap();
    assert!(sc.run().is_err());
}

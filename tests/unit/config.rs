use super::*;

#[test]
fn empty_document_yields_defaults() {
    let cfg = FxConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FxConfig::default());
    assert_eq!(cfg.reveal.threshold, 0.15);
    assert_eq!(cfg.reveal.duration_ms, 1000);
    assert_eq!(cfg.scroll.nav_threshold_px, 50.0);
    assert_eq!(cfg.scroll.parallax_factor, 0.1);
    assert_eq!(cfg.slideshow.interval_ms, 4000);
    assert_eq!(cfg.tilt.max_rotation_deg, 10.0);
    assert_eq!(cfg.tilt.disable_below_width_px, 768.0);
    assert_eq!(cfg.particles.leaf_count, 12);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = FxConfig::from_json_str(r#"{ "reveal": { "delay_ms": 300 } }"#).unwrap();
    assert_eq!(cfg.reveal.delay_ms, 300);
    assert_eq!(cfg.reveal.threshold, 0.15);
}

#[test]
fn threshold_must_be_a_visible_fraction() {
    for bad in ["0.0", "-0.2", "1.5"] {
        let doc = format!(r#"{{ "reveal": {{ "threshold": {bad} }} }}"#);
        let err = FxConfig::from_json_str(&doc).unwrap_err();
        assert!(matches!(err, FxError::Validation(_)), "{bad}");
    }
    assert!(FxConfig::from_json_str(r#"{ "reveal": { "threshold": 1.0 } }"#).is_ok());
}

#[test]
fn crossfade_must_finish_before_next_advance() {
    let err = FxConfig::from_json_str(
        r#"{ "slideshow": { "interval_ms": 1000, "crossfade_ms": 1000 } }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("crossfade_ms"));

    let err = FxConfig::from_json_str(r#"{ "slideshow": { "interval_ms": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("interval_ms"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = FxConfig::from_json_str("{ reveal").unwrap_err();
    assert!(matches!(err, FxError::Serde(_)));
}

#[test]
fn mount_overrides_win_over_defaults() {
    let cfg = RevealConfig::default();
    let t = cfg.timing(Some(400), None);
    assert_eq!(t.delay_ms, 400);
    assert_eq!(t.duration_ms, 1000);
    assert_eq!(t.ease, Ease::OutCubic);
}

#[test]
fn load_reports_missing_file() {
    let err = FxConfig::load(Path::new("target/does-not-exist/scrollfx.json")).unwrap_err();
    assert!(matches!(err, FxError::Other(_)));
}

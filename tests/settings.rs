use timing_diagram::config::INITIAL_ROWS;
use timing_diagram::{AppSettings, ColorScheme, SettingsError, TimingDiagramApp, TimingDiagramConfig};

#[test]
fn defaults_match_reference_window() {
    let cfg = TimingDiagramConfig::default();
    assert_eq!(cfg.title, "Timing Diagram Generator");
    assert_eq!(INITIAL_ROWS, 3);
    assert!(cfg.features.grid);
    assert!(cfg.features.legend);
    assert!(cfg.features.axis_labels);
    assert!(!cfg.features.points);
}

#[test]
fn partial_settings_override_only_given_fields() {
    let s = AppSettings::from_json_str(r#"{ "color_scheme": "Light", "grid": false }"#).unwrap();
    let mut cfg = TimingDiagramConfig::default();
    s.apply(&mut cfg);
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
    assert!(!cfg.features.grid);
    assert!(cfg.features.legend);
    assert_eq!(cfg.title, "Timing Diagram Generator");
}

#[test]
fn settings_cannot_change_initial_rows() {
    let s = AppSettings::from_json_str(r#"{ "initial_rows": 0 }"#).unwrap();
    assert_eq!(s, AppSettings::default());

    let mut cfg = TimingDiagramConfig::default();
    s.apply(&mut cfg);
    let app = TimingDiagramApp::new(&cfg);
    assert_eq!(app.registry.len(), 3);
}

#[test]
fn empty_object_is_a_no_op() {
    let s = AppSettings::from_json_str("{}").unwrap();
    assert_eq!(s, AppSettings::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = AppSettings::from_json_str("{ grid: ").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("timing-diagram-does-not-exist/settings.json");
    let err = AppSettings::from_path(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn reads_settings_from_file() {
    let dir = std::env::temp_dir().join(format!("timing-diagram-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    std::fs::write(&path, r#"{ "title": "Bus view", "window_size": [640.0, 480.0], "points": true }"#)
        .unwrap();

    let s = AppSettings::from_path(&path).unwrap();
    let mut cfg = TimingDiagramConfig::default();
    s.apply(&mut cfg);
    assert_eq!(cfg.title, "Bus view");
    assert_eq!(cfg.window_size, [640.0, 480.0]);
    assert!(cfg.features.points);

    std::fs::remove_dir_all(&dir).ok();
}

//! Integration tests for configuration management

use gradepoint::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        !config.calculation.scale.is_empty(),
        "Default scale should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
reports_dir = "/tmp/reports"

[calculation]
scale = "5.0 Scale (Weighted)"
include_transfer_in_gpa = false
rigor_adjustment = 1.2
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "/tmp/reports");
    assert_eq!(config.calculation.scale, "5.0 Scale (Weighted)");
    assert!(!config.calculation.include_transfer_in_gpa);
    assert!((config.calculation.rigor_adjustment - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_partial_toml_uses_serde_defaults() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    // Missing sections default; numeric policy knobs carry their baselines
    assert!(config.calculation.include_transfer_in_gpa);
    assert!((config.calculation.honors_bonus_points - 0.5).abs() < f64::EPSILON);
    assert!((config.calculation.ap_bonus_points - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_merge_defaults_fills_empty_strings() {
    let toml_str = r#"
[logging]
level = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("parse config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.calculation.scale, defaults.calculation.scale);
}

#[test]
fn test_merge_defaults_preserves_user_values() {
    let toml_str = r#"
[logging]
level = "error"

[calculation]
scale = "Percentage Scale"
"#;

    let mut config = Config::from_toml(toml_str).expect("parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.calculation.scale, "Percentage Scale");
}

#[test]
fn test_gradepoint_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADEPOINT/logs/run.log"
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    assert!(!config.logging.file.contains("$GRADEPOINT"));
    assert!(config.logging.file.ends_with("/logs/run.log"));
}

#[test]
fn test_toml_roundtrip() {
    let config = Config::from_defaults();
    let serialized = toml::to_string_pretty(&config).expect("serialize config");
    let reparsed = Config::from_toml(&serialized).expect("reparse config");

    assert_eq!(reparsed.logging.level, config.logging.level);
    assert_eq!(reparsed.calculation.scale, config.calculation.scale);
    assert!(
        (reparsed.calculation.rigor_adjustment - config.calculation.rigor_adjustment).abs()
            < f64::EPSILON
    );
}

#[test]
fn test_apply_overrides_scale_and_level() {
    let mut config = Config::from_defaults();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        scale: Some("Percentage Scale".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.calculation.scale, "Percentage Scale");
}

#[test]
fn test_get_returns_known_keys() {
    let config = Config::from_defaults();

    assert_eq!(config.get("scale"), Some("4.0 Scale (Standard)".to_string()));
    assert_eq!(config.get("include_transfer"), Some("true".to_string()));
    assert_eq!(config.get("nonsense"), None);
}

//! Configuration system tests
//!
//! Tests for config paths and editor config loading, saving and validation.

use std::fs;

use tolerance_editor::config::{ConfigError, EditorConfig};
use tolerance_editor::config_paths;
use tolerance_editor::model::{
    ConfirmPolicy, EditorModel, LabelSource, PresetError, PresetOption, PresetValue,
};
use tolerance_editor::strings::SupportedLocale;
use tolerance_editor::ToleranceValue;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("tolerance-editor"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.file_name().unwrap(), "config.yaml");
    }
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.presets.len(), 3);
    assert_eq!(config.max_percent, 100.0);
    assert_eq!(config.confirm_policy, ConfirmPolicy::PassThrough);
    assert_eq!(config.locale, SupportedLocale::En);
    assert!(config.validate().is_ok());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        presets: vec![
            PresetOption::literal("0.5%", PresetValue::Value(ToleranceValue::new(0.005))),
            PresetOption::keyed("APP.GENERAL.CUSTOM", PresetValue::Custom),
        ],
        max_percent: 50.0,
        confirm_policy: ConfirmPolicy::RequireValid,
        locale: SupportedLocale::De,
    };
    config.save_to(&path).unwrap();

    let loaded = EditorConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_percent: 5\n").unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(config.max_percent, 5.0);
    assert_eq!(config.presets, EditorConfig::default().presets);
    assert_eq!(config.confirm_policy, ConfirmPolicy::PassThrough);
}

#[test]
fn test_yaml_presets_and_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
presets:
  - label: "1%"
    value: 0.01
  - label_key: APP.GENERAL.CUSTOM
    value: custom
confirm_policy: require_valid
locale: zh-CN
"#,
    )
    .unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(
        config.presets[0].value,
        PresetValue::Value(ToleranceValue::new(0.01))
    );
    assert_eq!(config.presets[0].label, LabelSource::Literal("1%".to_string()));
    assert_eq!(config.presets[1].value, PresetValue::Custom);
    assert_eq!(config.confirm_policy, ConfirmPolicy::RequireValid);
    assert_eq!(config.locale, SupportedLocale::ZhCn);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "presets: [unclosed\n").unwrap();
    assert!(matches!(
        EditorConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_out_of_range_preset_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "presets:\n  - label: big\n    value: 2\n").unwrap();
    assert!(matches!(
        EditorConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_validation() {
    let empty = EditorConfig {
        presets: vec![],
        ..EditorConfig::default()
    };
    assert_eq!(
        empty.validate(),
        Err(ConfigError::Preset(PresetError::Empty))
    );

    let zero_ceiling = EditorConfig {
        max_percent: 0.0,
        ..EditorConfig::default()
    };
    assert_eq!(
        zero_ceiling.validate(),
        Err(ConfigError::InvalidMaxPercent(0.0))
    );
}

#[test]
fn test_model_from_config_applies_ceiling_and_policy() {
    let config = EditorConfig {
        max_percent: 5.0,
        confirm_policy: ConfirmPolicy::RequireValid,
        ..EditorConfig::default()
    };
    let model = EditorModel::from_config(ToleranceValue::new(0.01), &config);
    assert_eq!(model.max_percent(), 5.0);
    assert_eq!(model.confirm_policy, ConfirmPolicy::RequireValid);
    assert_eq!(model.presets().len(), 3);
}

//! File and environment resolution for card stack configuration.

use std::{collections::HashMap, fs};

use cardstack_config::{
    CARD_COUNT_VAR, CONFIG_JSON_VAR, CONFIG_PATH_VAR, CardStackConfig,
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ConfigSource,
    VIEWPORT_VAR,
};
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn empty_root() -> TempDir {
    tempfile::tempdir().expect("create tempdir")
}

#[test]
fn defaults_when_nothing_is_configured() {
    let root = empty_root();
    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[]))
        .expect("defaults load");
    assert_eq!(loaded.source, ConfigSource::Default);
    assert_eq!(loaded.config, CardStackConfig::default());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn default_file_is_discovered_under_search_root() {
    let root = empty_root();
    fs::create_dir_all(root.path().join("config")).expect("mkdir");
    let path = root.path().join("config/cardstack.toml");
    fs::write(&path, "[geometry]\ncard_count = 8\ncard_extent = 600.0\n")
        .expect("write config");

    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[]))
        .expect("file loads");
    assert_eq!(loaded.source, ConfigSource::File(path));
    assert_eq!(loaded.config.geometry.card_count, 8);
    assert_eq!(loaded.config.geometry.card_extent, 600.0);
}

#[test]
fn env_path_wins_over_inline_json_and_default_files() {
    let root = empty_root();
    fs::write(root.path().join("cardstack.toml"), "[geometry]\ncard_count = 3\n")
        .expect("write default");
    let chosen = root.path().join("chosen.json");
    fs::write(&chosen, r#"{"geometry": {"card_count": 11}}"#)
        .expect("write chosen");

    let chosen_str = chosen.display().to_string();
    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[
            (CONFIG_PATH_VAR, chosen_str.as_str()),
            (CONFIG_JSON_VAR, r#"{"geometry": {"card_count": 4}}"#),
        ]))
        .expect("env path loads");
    assert_eq!(loaded.source, ConfigSource::EnvPath(chosen));
    assert_eq!(loaded.config.geometry.card_count, 11);
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let root = empty_root();
    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[
            (CONFIG_PATH_VAR, "   "),
            (CONFIG_JSON_VAR, r#"{"tuning": {"fan_out_x": 14.0}}"#),
        ]))
        .expect("inline json loads");
    assert_eq!(loaded.source, ConfigSource::EnvInline);
    assert_eq!(loaded.config.tuning.fan_out_x, 14.0);
}

#[test]
fn explicit_path_ignores_environment_files() {
    let root = empty_root();
    let explicit = root.path().join("explicit.toml");
    fs::write(&explicit, "[tuning]\nrotate_y_max = 60.0\n").expect("write");

    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .with_path(&explicit)
        .load_with(env(&[(CONFIG_JSON_VAR, r#"{"tuning": {}}"#)]))
        .expect("explicit loads");
    assert_eq!(loaded.source, ConfigSource::File(explicit));
    assert_eq!(loaded.config.tuning.rotate_y_max, 60.0);
}

#[test]
fn env_overrides_apply_on_top_of_file() {
    let root = empty_root();
    fs::write(root.path().join("cardstack.json"), r#"{"geometry": {"card_count": 6}}"#)
        .expect("write");

    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[(CARD_COUNT_VAR, " 12 "), (VIEWPORT_VAR, "640")]))
        .expect("overrides apply");
    assert_eq!(loaded.config.geometry.card_count, 12);
    assert_eq!(loaded.config.geometry.viewport_size, 640.0);
}

#[test]
fn malformed_override_is_reported() {
    let root = empty_root();
    let err = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[(CARD_COUNT_VAR, "many")]))
        .unwrap_err();
    match err {
        ConfigLoadError::InvalidEnv { name, value } => {
            assert_eq!(name, CARD_COUNT_VAR);
            assert_eq!(value, "many");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn guard_rails_reject_zero_cards() {
    let root = empty_root();
    let err = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[(CARD_COUNT_VAR, "0")]))
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::NoCards)
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let root = empty_root();
    let err = ConfigLoader::new()
        .with_path(root.path().join("absent.toml"))
        .load_with(env(&[]))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}

#[test]
fn typed_extension_reports_its_own_parser() {
    let root = empty_root();
    let path = root.path().join("broken.toml");
    fs::write(&path, "geometry = [").expect("write");
    let err = CardStackConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Toml { .. }));
}

#[test]
fn viewport_larger_than_content_loads_with_warning() {
    let root = empty_root();
    let loaded = ConfigLoader::new()
        .with_search_root(root.path())
        .load_with(env(&[(CARD_COUNT_VAR, "1"), (VIEWPORT_VAR, "1200")]))
        .expect("content that fits is valid");
    assert_eq!(loaded.config.geometry.card_count, 1);
    assert_eq!(loaded.config.geometry.max_offset(), 0.0);
    assert!(
        loaded
            .warnings
            .items
            .iter()
            .any(|w| w.message.contains("will never move"))
    );
}

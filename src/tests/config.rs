use itertools::Itertools;

use super::config_from_yaml;
use crate::{ParsedConfigFileContent, DEFAULT_THEME};

const EXAMPLE: &str = r##"content-paths:
  - "./templates/**/*.html"
  - "./static/js/**/*.js"
theme-extensions:
  primary:
    "50": "#eff6ff"
    "500": "#3b82f6"
    "600": "#2563eb"
    "700": "#1d4ed8"
  accent:
    "500": "#f59e0b"
plugins:
  - forms
  - typography
"##;

#[test]
fn test_loading_is_idempotent() {
    let first: ParsedConfigFileContent = serde_yaml::from_str(EXAMPLE).unwrap();
    let second: ParsedConfigFileContent = serde_yaml::from_str(EXAMPLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_preserves_all_three_fields_and_their_order() {
    let content: ParsedConfigFileContent = serde_yaml::from_str(EXAMPLE).unwrap();
    let serialized = serde_yaml::to_string(&content).unwrap();
    let round_tripped: ParsedConfigFileContent = serde_yaml::from_str(&serialized).unwrap();

    assert_eq!(round_tripped, content);
    assert_eq!(round_tripped.content_paths, content.content_paths);
    assert_eq!(round_tripped.plugins, content.plugins);
    assert_eq!(
        round_tripped.theme_extensions.keys().collect_vec(),
        content.theme_extensions.keys().collect_vec()
    );
    assert_eq!(
        round_tripped.theme_extensions["primary"].keys().collect_vec(),
        content.theme_extensions["primary"].keys().collect_vec()
    );
}

#[test]
fn test_missing_keys_fall_back_to_empty() {
    let content: ParsedConfigFileContent = serde_yaml::from_str("plugins:\n  - forms\n").unwrap();
    assert!(content.content_paths.is_empty());
    assert!(content.theme_extensions.is_empty());
    assert_eq!(content.plugins, ["forms"]);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let error = serde_yaml::from_str::<ParsedConfigFileContent>("contnet-paths: []").unwrap_err();
    assert!(error.to_string().contains("unknown field"));
}

#[test]
fn test_resolve_merges_theme_and_orders_plugins() {
    let config = config_from_yaml(EXAMPLE);
    let resolved = config.resolve();

    assert_eq!(resolved.content.len(), 2);
    assert_eq!(resolved.plugins, ["forms", "typography"]);
    assert_eq!(resolved.theme["primary"]["500"], "#3b82f6");
    assert_eq!(resolved.theme["accent"]["500"], "#f59e0b");
    assert_eq!(resolved.theme["blue"], DEFAULT_THEME["blue"]);
    assert_eq!(resolved.theme["gray"], DEFAULT_THEME["gray"]);
}

#[test]
fn test_resolved_config_serializes_to_json() {
    let resolved = config_from_yaml(EXAMPLE).resolve();
    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string_pretty(&resolved).unwrap(),
    )
    .unwrap();
    assert_eq!(json["plugins"][0], "forms");
    assert_eq!(json["theme"]["primary"]["700"], "#1d4ed8");
    assert_eq!(json["content"][1], "./static/js/**/*.js");
}

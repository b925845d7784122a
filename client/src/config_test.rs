use super::*;

#[test]
fn default_paths_and_keys() {
    let config = AppConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.fallback_path, "/unauthorized");
    assert_eq!(config.storage.token, "token");
    assert_eq!(config.storage.user, "user");
    assert!(config.api_base.is_empty());
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = AppConfig::from_json(r#"{ "login_path": "/signin" }"#).unwrap();
    assert_eq!(config.login_path, "/signin");
    assert_eq!(config.fallback_path, DEFAULT_FALLBACK_PATH);
    assert_eq!(config.auto_hide, AutoHide::default());
}

#[test]
fn from_json_trims_trailing_slash_from_api_base() {
    let config = AppConfig::from_json(r#"{ "api_base": "https://api.example.test/ " }"#).unwrap();
    assert_eq!(config.api_base, "https://api.example.test");
    assert_eq!(config.endpoint("/api/accounts"), "https://api.example.test/api/accounts");
}

#[test]
fn from_json_overrides_nested_sections() {
    let raw = r#"{
        "storage": { "token": "fb_token" },
        "auto_hide": { "warning_ms": 1234 }
    }"#;
    let config = AppConfig::from_json(raw).unwrap();
    assert_eq!(config.storage.token, "fb_token");
    assert_eq!(config.storage.user, DEFAULT_USER_KEY);
    assert_eq!(config.auto_hide.warning_ms, 1234);
    assert_eq!(config.auto_hide.error_ms, 6000);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(AppConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn endpoint_is_same_origin_by_default() {
    assert_eq!(AppConfig::default().endpoint("/api/accounts"), "/api/accounts");
}

#[test]
fn auto_hide_maps_each_severity() {
    let hide = AutoHide { error_ms: 1, warning_ms: 2, info_ms: 3, success_ms: 4 };
    assert_eq!(hide.for_severity(Severity::Error), 1);
    assert_eq!(hide.for_severity(Severity::Warning), 2);
    assert_eq!(hide.for_severity(Severity::Info), 3);
    assert_eq!(hide.for_severity(Severity::Success), 4);
}

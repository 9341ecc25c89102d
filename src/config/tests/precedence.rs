//! Tests for configuration layer precedence.

use ortho_config::OrthoConfig;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::{OperationMode, TutorlinkConfig};

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"api_url": "http://default/api"})),
        ("file", json!({"api_url": "http://file/api"}))
    ],
    "http://file/api"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"api_url": "http://file/api"})),
        ("environment", json!({"api_url": "http://env/api"}))
    ],
    "http://env/api"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"api_url": "http://env/api"})),
        ("cli", json!({"api_url": "http://cli/api"}))
    ],
    "http://cli/api"
)]
fn api_url_layer_precedence(#[case] layers: Vec<(&str, Value)>, #[case] expected: &str) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.api_url, expected);
}

#[rstest]
fn unset_fields_fall_back_to_defaults() {
    let config = build_config_from_layers(&[("file", json!({"query": "subject=maths"}))]);

    assert_eq!(config.query.as_deref(), Some("subject=maths"));
    assert_eq!(config.api_url, "http://localhost:5000/api");
    assert_eq!(config.request_timeout_seconds, 15);
    assert_eq!(config.retry_attempts, 2);
    assert_eq!(config.retry_backoff_millis, 250);
    assert_eq!(config.cache_ttl_seconds, 60);
    assert!(config.token.is_none());
    assert!(!config.testimonials);
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        ("file", json!({"token": "file-token", "page_size": 20})),
        ("cli", json!({"page_size": 5})),
    ]);

    assert_eq!(config.token.as_deref(), Some("file-token"));
    assert_eq!(config.page_size, Some(5));
}

/// Loads configuration from CLI arguments with an isolated home directory.
fn load_with_args(env_api_url: Option<&str>, cli_args: &[&str]) -> TutorlinkConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("TUTORLINK_API_URL", env_api_url),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("tutorlink")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    TutorlinkConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn api_url_loads_from_environment_variable() {
    let config = load_with_args(Some("http://env.example/api"), &[]);

    assert_eq!(config.api_url, "http://env.example/api");
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with_args(
        Some("http://env.example/api"),
        &["--api-url", "http://cli.example/api", "--page", "3"],
    );

    assert_eq!(config.api_url, "http://cli.example/api");
    assert_eq!(config.page, Some(3));
}

#[rstest]
fn whoami_and_token_load_from_cli() {
    let config = load_with_args(None, &["--whoami", "--token", " cli-token "]);

    assert_eq!(config.operation_mode(), OperationMode::Session);
    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "cli-token");
}

//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Clears an environment variable on creation and again on drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_ends_with_app_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("cinemaocinema") && path_str.ends_with("config.toml"),
        "got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp(
        "cinemaocinema_test_config.toml",
        r#"
base_url = "http://catalog.local:9000/api"
username = "siddharth"
log_file_path = "/tmp/cinemaocinema-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("valid TOML")
        .expect("file exists");

    assert_eq!(config.base_url.as_deref(), Some("http://catalog.local:9000/api"));
    assert_eq!(config.username.as_deref(), Some("siddharth"));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/cinemaocinema-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("cinemaocinema_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp(
        "cinemaocinema_test_partial.toml",
        r#"
username = "guest"
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.username.as_deref(), Some("guest"));
    assert_eq!(config.base_url, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "dark""#);
    assert!(result.is_err(), "Unknown keys must be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.username, None);
    assert_eq!(config.log_file_path, default_log_path());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        base_url: Some("http://example.test/api".to_string()),
        username: Some("ana".to_string()),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.base_url, "http://example.test/api");
    assert_eq!(resolved.username.as_deref(), Some("ana"));
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
#[serial(cinemaocinema_base_url)]
fn apply_env_overrides_respects_base_url_var() {
    let _guard = EnvGuard::new(BASE_URL_ENV_VAR);
    env::set_var(BASE_URL_ENV_VAR, "http://env.test/api");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.base_url, "http://env.test/api");
}

#[test]
#[serial(cinemaocinema_base_url)]
fn apply_env_overrides_ignores_blank_value() {
    let _guard = EnvGuard::new(BASE_URL_ENV_VAR);
    env::set_var(BASE_URL_ENV_VAR, "   ");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(cinemaocinema_base_url)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(BASE_URL_ENV_VAR);

    let base = ResolvedConfig {
        base_url: "http://original/api".to_string(),
        username: Some("kim".to_string()),
        log_file_path: PathBuf::from("app.log"),
    };

    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(cinemaocinema_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let explicit_path = write_temp(
        "cinemaocinema_explicit.toml",
        r#"username = "explicit""#,
    );
    let env_path = write_temp("cinemaocinema_env.toml", r#"username = "from-env""#);
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.username.as_deref(), Some("explicit"));

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(cinemaocinema_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = write_temp("cinemaocinema_env_only.toml", r#"username = "from-env""#);
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.username.as_deref(), Some("from-env"));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(cinemaocinema_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "");

    assert!(matches!(
        load_config_with_precedence(None),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
#[serial(cinemaocinema_config)]
fn load_config_with_precedence_missing_env_file_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/cinemaocinema/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

#[test]
fn apply_cli_overrides_sets_given_values() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some("http://cli.test/api".to_string()),
        Some("cli-user".to_string()),
    );

    assert_eq!(result.base_url, "http://cli.test/api");
    assert_eq!(result.username.as_deref(), Some("cli-user"));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig {
        base_url: "http://file.test/api".to_string(),
        username: Some("file-user".to_string()),
        log_file_path: PathBuf::from("x.log"),
    };

    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(cinemaocinema_base_url)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(BASE_URL_ENV_VAR);

    // Defaults → file
    let file = ConfigFile {
        base_url: Some("http://file.test/api".to_string()),
        username: Some("file-user".to_string()),
        log_file_path: None,
    };
    let merged = merge_config(Some(file));
    assert_eq!(merged.base_url, "http://file.test/api");

    // File → env
    env::set_var(BASE_URL_ENV_VAR, "http://env.test/api");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.base_url, "http://env.test/api");
    assert_eq!(with_env.username.as_deref(), Some("file-user"));

    // Env → CLI
    let final_config = apply_cli_overrides(with_env, Some("http://cli.test/api".to_string()), None);
    assert_eq!(final_config.base_url, "http://cli.test/api");
    assert_eq!(final_config.username.as_deref(), Some("file-user"));
}

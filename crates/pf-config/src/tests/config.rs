use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.gateway.url.as_str(), eq(crate::DEFAULT_GATEWAY_URL));
    assert_that!(
        config.storage.avatar_bucket.as_str(),
        eq(crate::DEFAULT_AVATAR_BUCKET)
    );
    assert_that!(
        config.storage.cache_control_secs,
        eq(crate::DEFAULT_CACHE_CONTROL_SECS)
    );
    assert!(config.gateway.service_role_key.is_none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_creates_it() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join(".pf");
    let _dir = EnvGuard::set("PF_CONFIG_DIR", nested.to_str().unwrap());

    // When
    Config::load().unwrap();

    // Then
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [gateway]
            url = "https://abc.supabase.co"
            api_key = "anon"
            timeout_secs = 10

            [storage]
            avatar_bucket = "avatars"
            cache_control_secs = 60

            [logging]
            level = "debug"
            colored = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.gateway.url.as_str(), eq("https://abc.supabase.co"));
    assert_that!(config.gateway.timeout_secs, eq(10));
    assert_that!(config.storage.avatar_bucket.as_str(), eq("avatars"));
    assert_that!(config.storage.cache_control_secs, eq(60));
    assert_eq!(config.logging.level.0, LevelFilter::Debug);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [gateway]
            url = "https://from-file.example"
        "#,
    )
    .unwrap();
    let _url = EnvGuard::set("PF_GATEWAY_URL", "https://from-env.example");
    let _role = EnvGuard::set("PF_GATEWAY_SERVICE_ROLE_KEY", "service-key");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.gateway.url.as_str(), eq("https://from-env.example"));
    assert_eq!(
        config.gateway.service_role_key.as_deref(),
        Some("service-key")
    );
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PF_GATEWAY_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.gateway.timeout_secs,
        eq(crate::DEFAULT_GATEWAY_TIMEOUT_SECS)
    );
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[gateway\nurl = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_default_session_when_session_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.session_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join(crate::DEFAULT_SESSION_FILENAME));
}

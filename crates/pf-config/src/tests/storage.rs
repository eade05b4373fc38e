use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_empty_bucket_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _bucket = EnvGuard::set("PF_STORAGE_AVATAR_BUCKET", "");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_bucket_with_slash_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _bucket = EnvGuard::set("PF_STORAGE_AVATAR_BUCKET", "a/b");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_cache_control_over_one_year_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _cache = EnvGuard::set("PF_STORAGE_CACHE_CONTROL_SECS", "31536001");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_cache_control_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _cache = EnvGuard::set("PF_STORAGE_CACHE_CONTROL_SECS", "0");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

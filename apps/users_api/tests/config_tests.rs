// tests/config_tests.rs

use std::collections::HashMap;
use users_api::config::{AppConfig, LogFormat, StorageBackend, DEFAULT_AVATAR_URL, MAX_JWT_EXPIRES_IN_SECS};
use users_api::errors::AppError;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
  let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_only_required_keys_are_set() {
  let config = config_from(&[("DATABASE_URL", "postgres://localhost/users"), ("JWT_SECRET", "s")]).unwrap();

  assert_eq!(config.server_host, "127.0.0.1");
  assert_eq!(config.server_port, 3333);
  assert_eq!(config.storage, StorageBackend::Postgres);
  assert!(!config.run_migrations);
  assert_eq!(config.jwt_expires_in_secs, 86_400);
  assert_eq!(config.default_avatar_url, DEFAULT_AVATAR_URL);
  assert_eq!(config.log_format, LogFormat::Pretty);
  assert_eq!(config.bind_address(), "127.0.0.1:3333");
}

#[test]
fn jwt_secret_is_required() {
  let err = config_from(&[("USER_STORE", "memory"), ("JWT_SECRET", "  ")]).unwrap_err();
  assert!(matches!(err, AppError::Config(ref m) if m.contains("JWT_SECRET")));
}

#[test]
fn postgres_storage_requires_database_url() {
  let err = config_from(&[("JWT_SECRET", "s")]).unwrap_err();
  assert!(matches!(err, AppError::Config(ref m) if m.contains("DATABASE_URL")));

  let config = config_from(&[("JWT_SECRET", "s"), ("USER_STORE", "memory")]).unwrap();
  assert_eq!(config.storage, StorageBackend::Memory);
  assert!(config.database_url.is_none());
}

#[test]
fn invalid_values_name_their_key() {
  for (key, value) in [
    ("PORT", "eighty"),
    ("USER_STORE", "redis"),
    ("RUN_MIGRATIONS", "maybe"),
    ("JWT_EXPIRES_IN_SECS", "0"),
    ("LOG_FORMAT", "xml"),
  ] {
    let err = config_from(&[("JWT_SECRET", "s"), ("USER_STORE", "memory"), (key, value)]).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains(key)), "{} = {}", key, value);
  }
}

#[test]
fn debug_output_redacts_secrets() {
  let config = config_from(&[
    ("JWT_SECRET", "super-secret-value"),
    ("DATABASE_URL", "postgres://user:pw@localhost/users"),
    ("LOG_FORMAT", "json"),
  ])
  .unwrap();
  let rendered = format!("{:?}", config);

  assert!(!rendered.contains("super-secret-value"));
  assert!(!rendered.contains("pw@localhost"));
  assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn token_lifetime_is_capped() {
  let at_cap = MAX_JWT_EXPIRES_IN_SECS.to_string();
  let config = config_from(&[("JWT_SECRET", "s"), ("USER_STORE", "memory"), ("JWT_EXPIRES_IN_SECS", at_cap.as_str())]).unwrap();
  assert_eq!(config.jwt_expires_in_secs, MAX_JWT_EXPIRES_IN_SECS);

  let huge = i64::MAX.to_string();
  let err = config_from(&[("JWT_SECRET", "s"), ("USER_STORE", "memory"), ("JWT_EXPIRES_IN_SECS", huge.as_str())]).unwrap_err();
  assert!(matches!(err, AppError::Config(ref m) if m.contains("JWT_EXPIRES_IN_SECS")));
}

// users_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

pub const DEFAULT_AVATAR_URL: &str = "/uploads/avatars/default.png";

/// Ten years.
pub const MAX_JWT_EXPIRES_IN_SECS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
      "memory" | "in-memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid USER_STORE '{}': expected 'postgres' or 'memory'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage: StorageBackend,
  pub database_url: Option<String>,
  pub run_migrations: bool,
  pub jwt_secret: String,
  pub jwt_expires_in_secs: i64,
  pub default_avatar_url: String,
  pub log_format: LogFormat,
}

// Secrets never reach Debug output.
impl std::fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("storage", &self.storage)
      .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
      .field("run_migrations", &self.run_migrations)
      .field("jwt_secret", &"[REDACTED]")
      .field("jwt_expires_in_secs", &self.jwt_expires_in_secs)
      .field("default_avatar_url", &self.default_avatar_url)
      .field("log_format", &self.log_format)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from any key/value source. Blank values count
  /// as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());
    let get_env_or = |var_name: &str, default: &str| get_env(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_env_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_env_or("PORT", "3333")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let storage = get_env_or("USER_STORE", "postgres").parse::<StorageBackend>()?;
    let database_url = get_env("DATABASE_URL");
    if storage == StorageBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required when USER_STORE=postgres)".to_string(),
      ));
    }
    let run_migrations = get_env_or("RUN_MIGRATIONS", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid RUN_MIGRATIONS value: {}", e)))?;

    let jwt_secret =
      get_env("JWT_SECRET").ok_or_else(|| AppError::Config("Missing environment variable 'JWT_SECRET'".to_string()))?;
    let jwt_expires_in_secs = get_env_or("JWT_EXPIRES_IN_SECS", "86400")
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid JWT_EXPIRES_IN_SECS: {}", e)))?;
    if !(1..=MAX_JWT_EXPIRES_IN_SECS).contains(&jwt_expires_in_secs) {
      return Err(AppError::Config(format!(
        "JWT_EXPIRES_IN_SECS must be between 1 and {}",
        MAX_JWT_EXPIRES_IN_SECS
      )));
    }

    let default_avatar_url = get_env_or("DEFAULT_AVATAR_URL", DEFAULT_AVATAR_URL);
    let log_format = get_env_or("LOG_FORMAT", "pretty").parse::<LogFormat>()?;

    Ok(Self {
      server_host,
      server_port,
      storage,
      database_url,
      run_migrations,
      jwt_secret,
      jwt_expires_in_secs,
      default_avatar_url,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

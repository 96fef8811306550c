// tests/common/mod.rs
#![allow(dead_code)]

use argon2::Params;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;
use users_api::config::AppConfig;
use users_api::domain::{HashProvider, TokenProvider, UserRepository};
use users_api::factories;
use users_api::infra::{Argon2HashProvider, JwtTokenProvider, MemoryUserRepository};
use users_api::pipelines::PipelineDeps;
use users_api::AppState;

pub const TEST_SECRET: &str = "test-secret";
pub const VALID_PASSWORD: &str = "s3cretpass";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn test_config() -> AppConfig {
  AppConfig::from_lookup(|key| match key {
    "USER_STORE" => Some("memory".to_string()),
    "JWT_SECRET" => Some(TEST_SECRET.to_string()),
    _ => None,
  })
  .expect("test config is valid")
}

/// Argon2id at minimal cost; hashing at default cost makes tests crawl.
pub fn fast_hasher() -> Arc<dyn HashProvider> {
  let params = Params::new(8, 1, 1, None).expect("valid argon2 params");
  Arc::new(Argon2HashProvider::with_params(params))
}

pub fn token_provider() -> Arc<dyn TokenProvider> {
  Arc::new(JwtTokenProvider::new(TEST_SECRET, 3600))
}

pub fn memory_repository() -> Arc<MemoryUserRepository> {
  Arc::new(MemoryUserRepository::new(users_api::config::DEFAULT_AVATAR_URL))
}

pub fn pipeline_deps(repository: Arc<MemoryUserRepository>) -> PipelineDeps {
  let repository: Arc<dyn UserRepository> = repository;
  factories::make_pipeline_deps(repository, fast_hasher(), token_provider())
}

/// Full application graph over a fresh in-memory store.
pub fn test_state() -> (AppState, Arc<MemoryUserRepository>) {
  setup_tracing();
  let repository = memory_repository();
  let state = factories::build_app_state_with(Arc::new(test_config()), repository.clone(), fast_hasher())
    .expect("application state builds");
  (state, repository)
}

pub fn valid_user_body(email: &str) -> Value {
  json!({
    "name": "Maria Silva",
    "email": email,
    "phone": "(11) 98765-4321",
    "birthdate": "1990-05-17",
    "password": VALID_PASSWORD,
  })
}

// users_api/src/factories.rs

//! Composition root. Every `make_*` returns a fully wired component behind
//! its trait; `build_app_state` assembles the whole graph.

use crate::config::{AppConfig, StorageBackend};
use crate::domain::{Authenticate, CreateUser, HashProvider, ListUsers, TokenProvider, UpdateUserAvatar, UserRepository};
use crate::errors::{AppError, Result as AppResult};
use crate::infra::{Argon2HashProvider, JwtTokenProvider, MemoryUserRepository, PgUserRepository};
use crate::models::{AuthResult, Identity, UserMapped};
use crate::pipelines::{register_all_pipelines, PipelineDeps};
use crate::sanitizers::{AuthSanitizer, AvatarSanitizer, CreateUserSanitizer};
use crate::services::{AuthenticateService, CreateUserService, ListUsersService, UpdateAvatarService};
use crate::state::AppState;
use crate::validators::{AuthValidator, CreateUserValidator, UpdateAvatarValidator};
use crate::web::controllers::{
  Controller, CreateUserController, ListUsersController, LoginController, UpdateAvatarController,
};
use crate::web::middleware::{AuthMiddleware, Middleware};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use stepline::PipelineRegistry;
use tracing::{info, instrument};

pub fn make_hash_provider() -> Arc<dyn HashProvider> {
  Arc::new(Argon2HashProvider::new())
}

pub fn make_token_provider(config: &AppConfig) -> Arc<dyn TokenProvider> {
  Arc::new(JwtTokenProvider::new(&config.jwt_secret, config.jwt_expires_in_secs))
}

/// Connects (and optionally migrates) PostgreSQL, or builds the in-memory store.
#[instrument(name = "factory::user_repository", skip_all, fields(storage = ?config.storage), err(Display))]
pub async fn make_user_repository(config: &AppConfig) -> AppResult<Arc<dyn UserRepository>> {
  match config.storage {
    StorageBackend::Memory => {
      info!("Using in-memory user repository.");
      Ok(Arc::new(MemoryUserRepository::new(config.default_avatar_url.clone())))
    }
    StorageBackend::Postgres => {
      let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is required for postgres storage".to_string()))?;
      let pool = PgPoolOptions::new().max_connections(10).connect(database_url).await?;
      info!("Successfully connected to the database.");
      if config.run_migrations {
        sqlx::migrate!("./migrations")
          .run(&pool)
          .await
          .map_err(|e| AppError::Config(format!("Migration failed: {}", e)))?;
        info!("Database migrations applied.");
      }
      Ok(Arc::new(PgUserRepository::new(pool, config.default_avatar_url.clone())))
    }
  }
}

pub fn make_pipeline_deps(
  repository: Arc<dyn UserRepository>,
  hasher: Arc<dyn HashProvider>,
  tokens: Arc<dyn TokenProvider>,
) -> PipelineDeps {
  PipelineDeps {
    create_user_sanitizer: Arc::new(CreateUserSanitizer),
    create_user_validator: Arc::new(CreateUserValidator::new(repository.clone())),
    auth_sanitizer: Arc::new(AuthSanitizer),
    auth_validator: Arc::new(AuthValidator::default()),
    avatar_sanitizer: Arc::new(AvatarSanitizer),
    avatar_validator: Arc::new(UpdateAvatarValidator::new(repository.clone())),
    repository,
    hasher,
    tokens,
  }
}

pub fn make_pipeline_registry(deps: &PipelineDeps) -> AppResult<Arc<PipelineRegistry<AppError>>> {
  let registry = PipelineRegistry::<AppError>::new();
  register_all_pipelines(&registry, deps)?;
  Ok(Arc::new(registry))
}

pub fn make_create_user_service(registry: Arc<PipelineRegistry<AppError>>) -> Arc<dyn CreateUser> {
  Arc::new(CreateUserService::new(registry))
}

pub fn make_authenticate_service(registry: Arc<PipelineRegistry<AppError>>) -> Arc<dyn Authenticate> {
  Arc::new(AuthenticateService::new(registry))
}

pub fn make_list_users_service(registry: Arc<PipelineRegistry<AppError>>) -> Arc<dyn ListUsers> {
  Arc::new(ListUsersService::new(registry))
}

pub fn make_update_avatar_service(registry: Arc<PipelineRegistry<AppError>>) -> Arc<dyn UpdateUserAvatar> {
  Arc::new(UpdateAvatarService::new(registry))
}

pub fn make_create_user_controller(service: Arc<dyn CreateUser>) -> Arc<dyn Controller<Output = ()>> {
  Arc::new(CreateUserController::new(service))
}

pub fn make_login_controller(service: Arc<dyn Authenticate>) -> Arc<dyn Controller<Output = AuthResult>> {
  Arc::new(LoginController::new(service))
}

pub fn make_list_users_controller(service: Arc<dyn ListUsers>) -> Arc<dyn Controller<Output = Vec<UserMapped>>> {
  Arc::new(ListUsersController::new(service))
}

pub fn make_update_avatar_controller(service: Arc<dyn UpdateUserAvatar>) -> Arc<dyn Controller<Output = ()>> {
  Arc::new(UpdateAvatarController::new(service))
}

pub fn make_auth_middleware(tokens: Arc<dyn TokenProvider>) -> Arc<dyn Middleware<Output = Identity>> {
  Arc::new(AuthMiddleware::new(tokens))
}

/// Production wiring: default Argon2 cost.
pub fn build_app_state(config: Arc<AppConfig>, repository: Arc<dyn UserRepository>) -> AppResult<AppState> {
  build_app_state_with(config, repository, make_hash_provider())
}

pub fn build_app_state_with(
  config: Arc<AppConfig>,
  repository: Arc<dyn UserRepository>,
  hasher: Arc<dyn HashProvider>,
) -> AppResult<AppState> {
  let tokens = make_token_provider(&config);
  let deps = make_pipeline_deps(repository, hasher, tokens.clone());
  let registry = make_pipeline_registry(&deps)?;

  Ok(AppState {
    create_user: make_create_user_controller(make_create_user_service(registry.clone())),
    login: make_login_controller(make_authenticate_service(registry.clone())),
    list_users: make_list_users_controller(make_list_users_service(registry.clone())),
    update_avatar: make_update_avatar_controller(make_update_avatar_service(registry)),
    auth: make_auth_middleware(tokens),
    config,
  })
}

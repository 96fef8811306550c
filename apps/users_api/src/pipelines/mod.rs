// users_api/src/pipelines/mod.rs

//! One `stepline` pipeline per use case, all registered in a single
//! `PipelineRegistry<AppError>` keyed by context type.

use crate::domain::{HashProvider, TokenProvider, UserRepository};
use crate::errors::{AppError, Result as AppResult};
use crate::sanitizers::{AuthInput, AvatarInput, CreateUserInput, Sanitizer};
use crate::validators::Validator;
use std::sync::Arc;
use stepline::PipelineRegistry;

pub mod authenticate_pipeline;
pub mod contexts;
pub mod create_user_pipeline;
pub mod list_users_pipeline;
pub mod update_avatar_pipeline;

/// Everything the pipelines call into.
#[derive(Clone)]
pub struct PipelineDeps {
  pub repository: Arc<dyn UserRepository>,
  pub hasher: Arc<dyn HashProvider>,
  pub tokens: Arc<dyn TokenProvider>,
  pub create_user_sanitizer: Arc<dyn Sanitizer<Output = CreateUserInput>>,
  pub create_user_validator: Arc<dyn Validator<CreateUserInput>>,
  pub auth_sanitizer: Arc<dyn Sanitizer<Output = AuthInput>>,
  pub auth_validator: Arc<dyn Validator<AuthInput>>,
  pub avatar_sanitizer: Arc<dyn Sanitizer<Output = AvatarInput>>,
  pub avatar_validator: Arc<dyn Validator<AvatarInput>>,
}

pub fn register_all_pipelines(registry: &PipelineRegistry<AppError>, deps: &PipelineDeps) -> AppResult<()> {
  registry.register(create_user_pipeline::build_create_user_pipeline(deps)?);
  registry.register(authenticate_pipeline::build_authenticate_pipeline(deps)?);
  registry.register(list_users_pipeline::build_list_users_pipeline(deps)?);
  registry.register(update_avatar_pipeline::build_update_avatar_pipeline(deps)?);

  tracing::info!(pipelines = registry.len(), "Application pipelines registered.");
  Ok(())
}

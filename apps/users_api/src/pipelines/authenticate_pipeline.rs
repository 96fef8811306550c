// users_api/src/pipelines/authenticate_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::models::{AuthResult, UserMapped};
use crate::pipelines::contexts::AuthenticateCtxData;
use crate::pipelines::PipelineDeps;
use stepline::{ContextData, Pipeline, PipelineControl};
use std::sync::Arc;
use tracing::{event, Level};

pub const STEPS: [&str; 5] = [
  "sanitize_credentials",
  "validate_credentials",
  "find_user",
  "verify_password",
  "issue_token",
];

// Hashed once per pipeline with the configured cost, so a miss costs as
// much as a wrong password.
const UNKNOWN_USER_PASSWORD: &str = "unknown-user-placeholder-0";

/// Unknown email and wrong password fail identically with
/// `AppError::InvalidCredentials`, and both run one hash comparison.
pub fn build_authenticate_pipeline(deps: &PipelineDeps) -> AppResult<Pipeline<AuthenticateCtxData, AppError>> {
  let mut pipeline = Pipeline::<AuthenticateCtxData, AppError>::new(&[
    (STEPS[0], false, None),
    (STEPS[1], false, None),
    (STEPS[2], false, None),
    (STEPS[3], false, None),
    (STEPS[4], false, None),
  ])?;

  let sanitizer = deps.auth_sanitizer.clone();
  pipeline.on("sanitize_credentials", move |ctx: ContextData<AuthenticateCtxData>| {
    let sanitizer = sanitizer.clone();
    async move {
      let mut guard = ctx.write();
      let input = sanitizer.sanitize(&guard.raw);
      guard.input = input;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let validator = deps.auth_validator.clone();
  pipeline.on("validate_credentials", move |ctx: ContextData<AuthenticateCtxData>| {
    let validator = validator.clone();
    async move {
      let input = { ctx.read().input.clone() };
      validator.validate(&input).await?;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let repository = deps.repository.clone();
  pipeline.on("find_user", move |ctx: ContextData<AuthenticateCtxData>| {
    let repository = repository.clone();
    async move {
      let email = { ctx.read().input.email.clone().unwrap_or_default() };
      let user = repository.find_by_email(&email).await?;
      if user.is_none() {
        event!(Level::INFO, %email, "Login attempt for unknown email.");
      }
      ctx.write().user = user;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let hasher = deps.hasher.clone();
  let unknown_user_hash: Arc<str> = hasher.hash(UNKNOWN_USER_PASSWORD)?.into();
  pipeline.on("verify_password", move |ctx: ContextData<AuthenticateCtxData>| {
    let hasher = hasher.clone();
    let unknown_user_hash = unknown_user_hash.clone();
    async move {
      let (password, stored_hash) = {
        let guard = ctx.read();
        (
          guard.input.password.clone().unwrap_or_default(),
          guard.user.as_ref().map(|u| u.password.clone()),
        )
      };
      let Some(stored_hash) = stored_hash else {
        // Result ignored; the comparison only evens out timing.
        let _ = hasher.compare(&password, &unknown_user_hash);
        return Err(AppError::InvalidCredentials);
      };
      if !hasher.compare(&password, &stored_hash)? {
        event!(Level::INFO, "Login attempt with wrong password.");
        return Err(AppError::InvalidCredentials);
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let tokens = deps.tokens.clone();
  pipeline.on("issue_token", move |ctx: ContextData<AuthenticateCtxData>| {
    let tokens = tokens.clone();
    async move {
      let mut guard = ctx.write();
      let user = guard
        .user
        .take()
        .ok_or_else(|| AppError::server("No user loaded before issuing a token."))?;
      let access_token = tokens.sign(user.id, user.role)?;
      guard.result = Some(AuthResult {
        user: UserMapped::from(user),
        access_token,
      });
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  Ok(pipeline)
}

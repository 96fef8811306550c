// users_api/src/pipelines/create_user_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::models::NewUser;
use crate::pipelines::contexts::CreateUserCtxData;
use crate::pipelines::PipelineDeps;
use crate::sanitizers::CreateUserInput;
use crate::validators::BirthdateValidator;
use stepline::{ContextData, Pipeline, PipelineControl};
use tracing::{event, Level};

pub const STEPS: [&str; 4] = ["sanitize_input", "validate_input", "hash_password", "persist_user"];

pub fn build_create_user_pipeline(deps: &PipelineDeps) -> AppResult<Pipeline<CreateUserCtxData, AppError>> {
  let mut pipeline = Pipeline::<CreateUserCtxData, AppError>::new(&[
    (STEPS[0], false, None),
    (STEPS[1], false, None),
    (STEPS[2], false, None),
    (STEPS[3], false, None),
  ])?;

  let sanitizer = deps.create_user_sanitizer.clone();
  pipeline.on("sanitize_input", move |ctx: ContextData<CreateUserCtxData>| {
    let sanitizer = sanitizer.clone();
    async move {
      let mut guard = ctx.write();
      let input = sanitizer.sanitize(&guard.raw);
      guard.input = input;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let validator = deps.create_user_validator.clone();
  pipeline.on("validate_input", move |ctx: ContextData<CreateUserCtxData>| {
    let validator = validator.clone();
    async move {
      let input = { ctx.read().input.clone() };
      validator.validate(&input).await?;
      event!(Level::DEBUG, "Registration input is valid.");
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let hasher = deps.hasher.clone();
  pipeline.on("hash_password", move |ctx: ContextData<CreateUserCtxData>| {
    let hasher = hasher.clone();
    async move {
      let password = { ctx.read().input.password.clone().unwrap_or_default() };
      let hash = hasher.hash(&password)?;
      ctx.write().password_hash = Some(hash);
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let repository = deps.repository.clone();
  pipeline.on("persist_user", move |ctx: ContextData<CreateUserCtxData>| {
    let repository = repository.clone();
    async move {
      let new_user = {
        let guard = ctx.read();
        new_user_from(&guard.input, guard.password_hash.as_deref())
      }?;
      repository.create(new_user).await?;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  Ok(pipeline)
}

fn new_user_from(input: &CreateUserInput, password_hash: Option<&str>) -> AppResult<NewUser> {
  let password = password_hash.ok_or_else(|| AppError::server("Password hash missing before persisting user."))?;
  let birthdate = BirthdateValidator::parse(input.birthdate.as_deref().unwrap_or_default())?;
  Ok(NewUser {
    name: input.name.clone().unwrap_or_default(),
    email: input.email.clone().unwrap_or_default(),
    phone: input.phone.clone().unwrap_or_default(),
    birthdate,
    password: password.to_string(),
  })
}

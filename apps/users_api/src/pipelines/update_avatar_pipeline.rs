// users_api/src/pipelines/update_avatar_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::models::UserAvatarData;
use crate::pipelines::contexts::UpdateAvatarCtxData;
use crate::pipelines::PipelineDeps;
use crate::validators::IdValidator;
use stepline::{ContextData, Pipeline, PipelineControl};

pub const STEPS: [&str; 3] = ["sanitize_avatar", "validate_avatar", "persist_avatar"];

pub fn build_update_avatar_pipeline(deps: &PipelineDeps) -> AppResult<Pipeline<UpdateAvatarCtxData, AppError>> {
  let mut pipeline = Pipeline::<UpdateAvatarCtxData, AppError>::new(&[
    (STEPS[0], false, None),
    (STEPS[1], false, None),
    (STEPS[2], false, None),
  ])?;

  let sanitizer = deps.avatar_sanitizer.clone();
  pipeline.on("sanitize_avatar", move |ctx: ContextData<UpdateAvatarCtxData>| {
    let sanitizer = sanitizer.clone();
    async move {
      let mut guard = ctx.write();
      let input = sanitizer.sanitize(&guard.raw);
      guard.input = input;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let validator = deps.avatar_validator.clone();
  pipeline.on("validate_avatar", move |ctx: ContextData<UpdateAvatarCtxData>| {
    let validator = validator.clone();
    async move {
      let input = { ctx.read().input.clone() };
      validator.validate(&input).await?;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  let repository = deps.repository.clone();
  pipeline.on("persist_avatar", move |ctx: ContextData<UpdateAvatarCtxData>| {
    let repository = repository.clone();
    async move {
      let input = { ctx.read().input.clone() };
      let avatar = UserAvatarData {
        id: IdValidator::parse(input.id.as_deref().unwrap_or_default())?,
        avatar_url: input.avatar_url.unwrap_or_default(),
      };
      repository.update_avatar(avatar).await?;
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  Ok(pipeline)
}

// users_api/src/pipelines/list_users_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::contexts::ListUsersCtxData;
use crate::pipelines::PipelineDeps;
use stepline::{ContextData, Pipeline, PipelineControl};

pub const STEPS: [&str; 1] = ["fetch_users"];

pub fn build_list_users_pipeline(deps: &PipelineDeps) -> AppResult<Pipeline<ListUsersCtxData, AppError>> {
  let mut pipeline = Pipeline::<ListUsersCtxData, AppError>::new(&[(STEPS[0], false, None)])?;

  let repository = deps.repository.clone();
  pipeline.on("fetch_users", move |ctx: ContextData<ListUsersCtxData>| {
    let repository = repository.clone();
    async move {
      let users = repository.list().await?;
      ctx.write().users = Some(users);
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  Ok(pipeline)
}

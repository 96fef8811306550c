// users_api/src/services/update_avatar_service.rs

use super::{ensure_completed, LogContext};
use crate::domain::UpdateUserAvatar;
use crate::errors::{AppError, Result};
use crate::pipelines::contexts::UpdateAvatarCtxData;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use stepline::{ContextData, PipelineRegistry};
use tracing::instrument;

const LOG: LogContext = LogContext::new("UpdateAvatarService", "update_avatar");

pub struct UpdateAvatarService {
  registry: Arc<PipelineRegistry<AppError>>,
}

impl UpdateAvatarService {
  pub fn new(registry: Arc<PipelineRegistry<AppError>>) -> Self {
    Self { registry }
  }

  async fn run(&self, raw: Value) -> Result<Option<String>> {
    let ctx = ContextData::new(UpdateAvatarCtxData::new(raw));
    let result = self.registry.run(ctx.clone()).await?;
    ensure_completed(result, LOG.service)?;
    let id = ctx.read().input.id.clone();
    Ok(id)
  }
}

#[async_trait]
impl UpdateUserAvatar for UpdateAvatarService {
  #[instrument(name = "UpdateAvatarService::update_avatar", skip_all)]
  async fn update_avatar(&self, raw: Value) -> Result<()> {
    LOG.start(&"update avatar");
    match self.run(raw).await {
      Ok(id) => {
        LOG.success(&id);
        Ok(())
      }
      Err(err) => {
        LOG.failure(&err);
        Err(err)
      }
    }
  }
}

// users_api/src/services/create_user_service.rs

use super::{ensure_completed, LogContext};
use crate::domain::CreateUser;
use crate::errors::{AppError, Result};
use crate::pipelines::contexts::CreateUserCtxData;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use stepline::{ContextData, PipelineRegistry};
use tracing::instrument;

const LOG: LogContext = LogContext::new("CreateUserService", "create");

pub struct CreateUserService {
  registry: Arc<PipelineRegistry<AppError>>,
}

impl CreateUserService {
  pub fn new(registry: Arc<PipelineRegistry<AppError>>) -> Self {
    Self { registry }
  }

  async fn run(&self, raw: Value) -> Result<String> {
    let ctx = ContextData::new(CreateUserCtxData::new(raw));
    let result = self.registry.run(ctx.clone()).await?;
    ensure_completed(result, LOG.service)?;
    let email = ctx.read().input.email.clone().unwrap_or_default();
    Ok(email)
  }
}

#[async_trait]
impl CreateUser for CreateUserService {
  #[instrument(name = "CreateUserService::create", skip_all)]
  async fn create(&self, raw: Value) -> Result<()> {
    LOG.start(&"register user");
    match self.run(raw).await {
      Ok(email) => {
        LOG.success(&email);
        Ok(())
      }
      Err(err) => {
        LOG.failure(&err);
        Err(err)
      }
    }
  }
}

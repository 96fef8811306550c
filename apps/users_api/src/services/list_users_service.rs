// users_api/src/services/list_users_service.rs

use super::{ensure_completed, LogContext};
use crate::domain::ListUsers;
use crate::errors::{AppError, Result};
use crate::models::UserMapped;
use crate::pipelines::contexts::ListUsersCtxData;
use async_trait::async_trait;
use std::sync::Arc;
use stepline::{ContextData, PipelineRegistry};
use tracing::instrument;

const LOG: LogContext = LogContext::new("ListUsersService", "list");

pub struct ListUsersService {
  registry: Arc<PipelineRegistry<AppError>>,
}

impl ListUsersService {
  pub fn new(registry: Arc<PipelineRegistry<AppError>>) -> Self {
    Self { registry }
  }

  async fn run(&self) -> Result<Vec<UserMapped>> {
    let ctx = ContextData::new(ListUsersCtxData::default());
    let result = self.registry.run(ctx.clone()).await?;
    ensure_completed(result, LOG.service)?;
    let users = ctx.write().users.take();
    users.ok_or_else(|| AppError::server("User listing finished without results."))
  }
}

#[async_trait]
impl ListUsers for ListUsersService {
  #[instrument(name = "ListUsersService::list", skip_all)]
  async fn list(&self) -> Result<Vec<UserMapped>> {
    LOG.start(&"list users");
    match self.run().await {
      Ok(users) => {
        LOG.success(&users.len());
        Ok(users)
      }
      Err(err) => {
        LOG.failure(&err);
        Err(err)
      }
    }
  }
}

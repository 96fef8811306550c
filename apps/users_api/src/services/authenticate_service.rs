// users_api/src/services/authenticate_service.rs

use super::{ensure_completed, LogContext};
use crate::domain::Authenticate;
use crate::errors::{AppError, Result};
use crate::models::AuthResult;
use crate::pipelines::contexts::AuthenticateCtxData;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use stepline::{ContextData, PipelineRegistry};
use tracing::instrument;

const LOG: LogContext = LogContext::new("AuthenticateService", "authenticate");

pub struct AuthenticateService {
  registry: Arc<PipelineRegistry<AppError>>,
}

impl AuthenticateService {
  pub fn new(registry: Arc<PipelineRegistry<AppError>>) -> Self {
    Self { registry }
  }

  async fn run(&self, raw: Value) -> Result<AuthResult> {
    let ctx = ContextData::new(AuthenticateCtxData::new(raw));
    let result = self.registry.run(ctx.clone()).await?;
    ensure_completed(result, LOG.service)?;
    let auth = ctx.write().result.take();
    auth.ok_or_else(|| AppError::server("Authentication finished without a token."))
  }
}

#[async_trait]
impl Authenticate for AuthenticateService {
  #[instrument(name = "AuthenticateService::authenticate", skip_all)]
  async fn authenticate(&self, raw: Value) -> Result<AuthResult> {
    LOG.start(&"authenticate user");
    match self.run(raw).await {
      Ok(auth) => {
        LOG.success(&auth.user.id);
        Ok(auth)
      }
      Err(err) => {
        LOG.failure(&err);
        Err(err)
      }
    }
  }
}

// users_api/src/services/log_context.rs

use crate::errors::AppError;
use std::fmt::Debug;
use tracing::{debug, error, info};

/// Service/method pair attached to every event a service emits.
#[derive(Debug, Clone, Copy)]
pub struct LogContext {
  pub service: &'static str,
  pub method: &'static str,
}

impl LogContext {
  pub const fn new(service: &'static str, method: &'static str) -> Self {
    Self { service, method }
  }

  pub fn start(&self, metadata: &impl Debug) {
    debug!(service = self.service, method = self.method, metadata = ?metadata, "start");
  }

  pub fn success(&self, metadata: &impl Debug) {
    info!(service = self.service, method = self.method, metadata = ?metadata, "success");
  }

  pub fn failure(&self, err: &AppError) {
    error!(
      service = self.service,
      method = self.method,
      error.name = err.name(),
      error.message = %err,
      error.detail = ?err,
      "failure"
    );
  }
}

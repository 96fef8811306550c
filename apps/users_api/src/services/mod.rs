// users_api/src/services/mod.rs

//! Use-case implementations. Each service runs its registered pipeline and
//! logs the outcome; errors come back unchanged.

pub mod authenticate_service;
pub mod create_user_service;
pub mod list_users_service;
pub mod log_context;
pub mod update_avatar_service;

pub use authenticate_service::AuthenticateService;
pub use create_user_service::CreateUserService;
pub use list_users_service::ListUsersService;
pub use log_context::LogContext;
pub use update_avatar_service::UpdateAvatarService;

use crate::errors::{AppError, Result};
use stepline::PipelineResult;

/// A pipeline that stopped early never produced what the caller asked for.
pub(crate) fn ensure_completed(result: PipelineResult, service: &str) -> Result<()> {
  if result.is_completed() {
    Ok(())
  } else {
    Err(AppError::server(format!("{service} pipeline stopped before completing.")))
  }
}

// users_api/src/web/controllers/mod.rs

//! Controllers never fail: every outcome, error included, is a response.

pub mod create_user;
pub mod list_users;
pub mod login;
pub mod update_avatar;

pub use create_user::CreateUserController;
pub use list_users::ListUsersController;
pub use login::LoginController;
pub use update_avatar::UpdateAvatarController;

use super::http::{HttpRequest, HttpResponse};
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;

pub const BODY_LABEL: &str = "corpo da requisição";

#[async_trait]
pub trait Controller: Send + Sync {
  type Output: Send;

  async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Output>;
}

pub(crate) fn require_body(request: HttpRequest) -> Result<Value> {
  request.body.ok_or_else(|| AppError::missing(BODY_LABEL))
}

// users_api/src/web/controllers/list_users.rs

use super::Controller;
use crate::domain::ListUsers;
use crate::models::UserMapped;
use crate::web::error_mapper::error_response;
use crate::web::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// No body needed; the gate has already run.
pub struct ListUsersController {
  service: Arc<dyn ListUsers>,
}

impl ListUsersController {
  pub fn new(service: Arc<dyn ListUsers>) -> Self {
    Self { service }
  }
}

#[async_trait]
impl Controller for ListUsersController {
  type Output = Vec<UserMapped>;

  #[instrument(name = "controller::list_users", skip_all, fields(user_id = ?request.identity.as_ref().map(|i| i.user_id)))]
  async fn handle(&self, request: HttpRequest) -> HttpResponse<Vec<UserMapped>> {
    match self.service.list().await {
      Ok(users) => HttpResponse::ok(users),
      Err(err) => error_response(&err),
    }
  }
}

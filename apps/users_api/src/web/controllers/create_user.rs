// users_api/src/web/controllers/create_user.rs

use super::{require_body, Controller};
use crate::domain::CreateUser;
use crate::web::error_mapper::error_response;
use crate::web::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct CreateUserController {
  service: Arc<dyn CreateUser>,
}

impl CreateUserController {
  pub fn new(service: Arc<dyn CreateUser>) -> Self {
    Self { service }
  }
}

#[async_trait]
impl Controller for CreateUserController {
  type Output = ();

  #[instrument(name = "controller::create_user", skip_all)]
  async fn handle(&self, request: HttpRequest) -> HttpResponse<()> {
    let body = match require_body(request) {
      Ok(body) => body,
      Err(err) => return error_response(&err),
    };
    match self.service.create(body).await {
      Ok(()) => HttpResponse::created(),
      Err(err) => error_response(&err),
    }
  }
}

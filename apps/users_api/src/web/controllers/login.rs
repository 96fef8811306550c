// users_api/src/web/controllers/login.rs

use super::{require_body, Controller};
use crate::domain::Authenticate;
use crate::models::AuthResult;
use crate::web::error_mapper::error_response;
use crate::web::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct LoginController {
  service: Arc<dyn Authenticate>,
}

impl LoginController {
  pub fn new(service: Arc<dyn Authenticate>) -> Self {
    Self { service }
  }
}

#[async_trait]
impl Controller for LoginController {
  type Output = AuthResult;

  #[instrument(name = "controller::login", skip_all)]
  async fn handle(&self, request: HttpRequest) -> HttpResponse<AuthResult> {
    let body = match require_body(request) {
      Ok(body) => body,
      Err(err) => return error_response(&err),
    };
    match self.service.authenticate(body).await {
      Ok(auth) => HttpResponse::ok(auth),
      Err(err) => error_response(&err),
    }
  }
}

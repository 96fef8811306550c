// users_api/src/web/controllers/update_avatar.rs

use super::{require_body, Controller};
use crate::domain::UpdateUserAvatar;
use crate::web::error_mapper::error_response;
use crate::web::http::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct UpdateAvatarController {
  service: Arc<dyn UpdateUserAvatar>,
}

impl UpdateAvatarController {
  pub fn new(service: Arc<dyn UpdateUserAvatar>) -> Self {
    Self { service }
  }
}

#[async_trait]
impl Controller for UpdateAvatarController {
  type Output = ();

  #[instrument(name = "controller::update_avatar", skip_all)]
  async fn handle(&self, request: HttpRequest) -> HttpResponse<()> {
    let body = match require_body(request) {
      Ok(body) => body,
      Err(err) => return error_response(&err),
    };
    match self.service.update_avatar(body).await {
      Ok(()) => HttpResponse::created(),
      Err(err) => error_response(&err),
    }
  }
}

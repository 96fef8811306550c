// users_api/src/web/error_mapper.rs

use super::http::HttpResponse;
use crate::errors::AppError;
use tracing::{event, Level};

pub const GENERIC_SERVER_MESSAGE: &str = "Erro interno do servidor.";

/// The only place an `AppError` becomes a response.
pub fn error_response<T>(err: &AppError) -> HttpResponse<T> {
  let status = err.status_code();
  if err.is_client_visible() {
    HttpResponse::failure(status, err.to_string())
  } else {
    event!(Level::ERROR, error.name = err.name(), error.detail = ?err, "Unclassified error hidden from client.");
    HttpResponse::failure(status, GENERIC_SERVER_MESSAGE)
  }
}

impl actix_web::ResponseError for AppError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    AppError::status_code(self)
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    super::adapters::to_actix(error_response::<()>(self))
  }
}

// users_api/src/web/middleware.rs

use super::error_mapper::error_response;
use super::http::{HttpRequest, HttpResponse};
use crate::domain::TokenProvider;
use crate::errors::AppError;
use crate::infra::jwt_token_provider::TOKEN_LABEL;
use crate::models::Identity;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const AUTH_HEADER: &str = "authorization";
pub const TOKEN_MISSING_LABEL: &str = "token de autenticação";
const BEARER_PREFIX: &str = "Bearer ";

pub trait Middleware: Send + Sync {
  type Output;

  fn handle(&self, request: &HttpRequest) -> HttpResponse<Self::Output>;
}

/// Where a request ended up in the gate. Rejections carry the error the
/// client gets back.
#[derive(Debug)]
pub enum AuthState {
  NoHeader(AppError),
  MalformedHeader(AppError),
  TokenInvalid(AppError),
  Authenticated(Identity),
}

/// Bearer-token gate. A single verification attempt per request.
pub struct AuthMiddleware {
  tokens: Arc<dyn TokenProvider>,
}

impl AuthMiddleware {
  pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
    Self { tokens }
  }

  pub fn classify(&self, request: &HttpRequest) -> AuthState {
    let Some(header) = request.header(AUTH_HEADER) else {
      return AuthState::NoHeader(AppError::missing(TOKEN_MISSING_LABEL));
    };
    let token = match header.strip_prefix(BEARER_PREFIX) {
      Some(token) if !token.trim().is_empty() => token.trim(),
      _ => return AuthState::MalformedHeader(AppError::invalid(TOKEN_LABEL)),
    };
    match self.tokens.verify(token) {
      Ok(identity) => AuthState::Authenticated(identity),
      Err(err) => AuthState::TokenInvalid(err),
    }
  }
}

impl Middleware for AuthMiddleware {
  type Output = Identity;

  #[instrument(name = "middleware::auth", skip_all)]
  fn handle(&self, request: &HttpRequest) -> HttpResponse<Identity> {
    let err = match self.classify(request) {
      AuthState::Authenticated(identity) => return HttpResponse::ok(identity),
      AuthState::NoHeader(err) | AuthState::MalformedHeader(err) | AuthState::TokenInvalid(err) => err,
    };
    debug!(error.name = err.name(), "Request rejected by auth gate.");
    error_response(&err)
  }
}

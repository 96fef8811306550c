// users_api/src/web/adapters.rs

//! Conversions between actix-web and the controller-facing `http` types.

use super::http::{HttpRequest, HttpResponse};
use super::middleware::Middleware;
use crate::errors::{AppError, Result};
use crate::models::Identity;
use crate::state::AppState;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{web, FromRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub const BODY_PARSE_LABEL: &str = "Corpo da requisição";

/// Empty (or whitespace-only) bodies and JSON `null` are "no body".
pub fn parse_body(bytes: &[u8]) -> Result<Option<Value>> {
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }
  let value: Value = serde_json::from_slice(bytes).map_err(|e| {
    debug!(error = %e, "Request body is not valid JSON.");
    AppError::invalid(BODY_PARSE_LABEL)
  })?;
  Ok((!value.is_null()).then_some(value))
}

pub fn collect_headers(req: &actix_web::HttpRequest) -> HashMap<String, String> {
  req
    .headers()
    .iter()
    .filter_map(|(name, value)| {
      value
        .to_str()
        .ok()
        .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
    })
    .collect()
}

pub fn to_request(req: &actix_web::HttpRequest, body: &[u8], identity: Option<Identity>) -> Result<HttpRequest> {
  Ok(HttpRequest {
    body: parse_body(body)?,
    headers: collect_headers(req),
    identity,
  })
}

pub fn to_actix<T: Serialize>(response: HttpResponse<T>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::build(response.status).json(response.body)
}

/// Runs the auth gate. Rejections carry the gate's own response.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Identity);

impl FromRequest for AuthenticatedUser {
  type Error = actix_web::Error;
  type Future = Ready<std::result::Result<Self, Self::Error>>;

  fn from_request(req: &actix_web::HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(authenticate(req))
  }
}

fn authenticate(req: &actix_web::HttpRequest) -> std::result::Result<AuthenticatedUser, actix_web::Error> {
  let Some(state) = req.app_data::<web::Data<AppState>>() else {
    return Err(AppError::server("Application state is not configured.").into());
  };
  let request = HttpRequest {
    headers: collect_headers(req),
    ..Default::default()
  };
  let response = state.auth.handle(&request);
  if let (true, Some(identity)) = (response.is_success(), response.body.data) {
    return Ok(AuthenticatedUser(identity));
  }
  let message = response.body.error_message.clone().unwrap_or_default();
  Err(InternalError::from_response(message, to_actix(response)).into())
}

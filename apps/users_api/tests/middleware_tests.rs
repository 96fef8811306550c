// tests/middleware_tests.rs

mod common;

use actix_web::http::StatusCode;
use common::{setup_tracing, token_provider, TEST_SECRET};
use std::sync::Arc;
use users_api::domain::TokenProvider;
use users_api::infra::JwtTokenProvider;
use users_api::models::Role;
use users_api::web::http::HttpRequest;
use users_api::web::middleware::{AuthMiddleware, AuthState, Middleware};
use uuid::Uuid;

fn gate() -> AuthMiddleware {
  setup_tracing();
  AuthMiddleware::new(token_provider())
}

#[test]
fn missing_header_is_reported_as_missing_token() {
  let response = gate().handle(&HttpRequest::default());

  assert_eq!(response.status, StatusCode::BAD_REQUEST);
  let message = response.body.error_message.unwrap();
  assert!(message.contains("token de autenticação"));
}

#[test]
fn header_without_bearer_prefix_or_token_is_malformed() {
  let gate = gate();
  for header in ["Token abc", "Bearer ", "bearer abc", "Bearer    "] {
    let request = HttpRequest::default().with_header("Authorization", header);
    let state = gate.classify(&request);
    assert!(matches!(state, AuthState::MalformedHeader(_)), "header {:?}", header);

    let response = gate.handle(&request);
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.error_message.as_deref(), Some("Token. Formato inválido."));
  }
}

#[test]
fn missing_header_classifies_as_no_header() {
  let state = gate().classify(&HttpRequest::default());
  assert!(matches!(state, AuthState::NoHeader(users_api::errors::AppError::MissingParam(_))));
}

#[test]
fn corrupt_token_is_rejected() {
  let request = HttpRequest::default().with_header("authorization", "Bearer not.a.jwt");
  let response = gate().handle(&request);

  assert_eq!(response.status, StatusCode::BAD_REQUEST);
  assert_eq!(response.body.error_message.as_deref(), Some("Token. Expirado ou inválido."));
}

#[test]
fn token_signed_with_another_secret_is_rejected() {
  let foreign = JwtTokenProvider::new("some-other-secret", 3600);
  let token = foreign.sign(Uuid::new_v4(), Role::Client).unwrap();
  let request = HttpRequest::default().with_header("authorization", format!("Bearer {}", token));

  match gate().classify(&request) {
    AuthState::TokenInvalid(err) => assert_eq!(err.to_string(), "Token. Expirado ou inválido."),
    other => panic!("expected TokenInvalid, got {:?}", other),
  }
}

#[test]
fn expired_token_is_rejected() {
  let expired = JwtTokenProvider::new(TEST_SECRET, -60);
  let token = expired.sign(Uuid::new_v4(), Role::Admin).unwrap();
  let request = HttpRequest::default().with_header("authorization", format!("Bearer {}", token));

  let response = gate().handle(&request);
  assert_eq!(response.status, StatusCode::BAD_REQUEST);
  assert_eq!(response.body.error_message.as_deref(), Some("Token. Expirado ou inválido."));
}

#[test]
fn valid_token_yields_identity() {
  let tokens: Arc<dyn TokenProvider> = token_provider();
  let user_id = Uuid::new_v4();
  let token = tokens.sign(user_id, Role::Collaborator).unwrap();
  let request = HttpRequest::default().with_header("Authorization", format!("Bearer {}", token));

  let response = AuthMiddleware::new(tokens).handle(&request);

  assert_eq!(response.status, StatusCode::OK);
  let body = serde_json::to_value(&response.body).unwrap();
  assert_eq!(body["data"]["userId"], user_id.to_string());
  assert_eq!(body["data"]["userRole"], "collaborator");
}

#[test]
fn overflowing_token_lifetime_fails_instead_of_panicking() {
  let tokens = JwtTokenProvider::new(TEST_SECRET, i64::MAX);
  let err = tokens.sign(Uuid::new_v4(), Role::Client).unwrap_err();

  assert!(matches!(err, users_api::errors::AppError::Server(_)));
}

// users_api/src/web/routes.rs

use super::adapters::{to_actix, to_request, AuthenticatedUser};
use crate::errors::AppError;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use tracing::instrument;

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
  }))
}

#[instrument(name = "route::create_user", skip_all)]
async fn create_user_handler(
  state: web::Data<AppState>,
  req: HttpRequest,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let request = to_request(&req, &body, None)?;
  Ok(to_actix(state.create_user.handle(request).await))
}

#[instrument(name = "route::login", skip_all)]
async fn login_handler(state: web::Data<AppState>, req: HttpRequest, body: web::Bytes) -> Result<HttpResponse, AppError> {
  let request = to_request(&req, &body, None)?;
  Ok(to_actix(state.login.handle(request).await))
}

#[instrument(name = "route::list_users", skip_all, fields(user_id = %user.0.user_id))]
async fn list_users_handler(
  state: web::Data<AppState>,
  req: HttpRequest,
  user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let request = to_request(&req, &[], Some(user.0))?;
  Ok(to_actix(state.list_users.handle(request).await))
}

#[instrument(name = "route::update_avatar", skip_all, fields(user_id = %user.0.user_id))]
async fn update_avatar_handler(
  state: web::Data<AppState>,
  req: HttpRequest,
  user: AuthenticatedUser,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let request = to_request(&req, &body, Some(user.0))?;
  Ok(to_actix(state.update_avatar.handle(request).await))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/health", web::get().to(health_check_handler)).service(
    web::scope("/api")
      .service(
        web::resource("/users")
          .route(web::post().to(create_user_handler))
          .route(web::get().to(list_users_handler)),
      )
      .route("/users/avatar", web::patch().to(update_avatar_handler))
      .route("/auth/login", web::post().to(login_handler)),
  );
}

// users_api/src/state.rs

use crate::config::AppConfig;
use crate::models::{AuthResult, Identity, UserMapped};
use crate::web::controllers::Controller;
use crate::web::middleware::Middleware;
use std::sync::Arc;

/// Shared with every actix worker through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub create_user: Arc<dyn Controller<Output = ()>>,
  pub login: Arc<dyn Controller<Output = AuthResult>>,
  pub list_users: Arc<dyn Controller<Output = Vec<UserMapped>>>,
  pub update_avatar: Arc<dyn Controller<Output = ()>>,
  pub auth: Arc<dyn Middleware<Output = Identity>>,
  pub config: Arc<AppConfig>,
}

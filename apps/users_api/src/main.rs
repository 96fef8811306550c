// users_api/src/main.rs

use anyhow::Context;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use users_api::config::AppConfig;
use users_api::{factories, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  telemetry::init_tracing(app_config.log_format);

  tracing::info!(config = ?app_config, "Starting users API server...");

  let repository = factories::make_user_repository(&app_config)
    .await
    .context("Failed to initialize the user repository")?;
  let app_state = factories::build_app_state(app_config.clone(), repository).context("Failed to wire application state")?;

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(users_api::web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")
}

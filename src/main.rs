// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing::Level;

use trolley::config::AppConfig;
use trolley::state::AppState;
use trolley::{db, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  tracing::info!("Starting cart service...");

  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);

  let db_pool = db::connect(&app_config.database_url)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!("Successfully connected to the database.");

  db::migrate(&db_pool).await.context("Failed to run migrations")?;

  if app_config.seed_db {
    db::seed_demo_products(&db_pool)
      .await
      .context("Failed to seed demo catalog")?;
  }

  let app_state = AppState::new(db_pool, app_config.clone());

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}

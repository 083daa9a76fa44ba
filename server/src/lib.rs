// server/src/lib.rs

//! HTTP front end for the productDB catalog: actix-web routes over the
//! `product-db` resource contract.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use product_db::{Catalog, DocumentStore, MemoryStore, MongoStore};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter}; // For span events in tracing

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::state::AppState;

/// Installs the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
  // Default to info; RUST_LOG overrides.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match std::env::var("LOG_FORMAT").as_deref() {
    Ok("json") => builder.json().init(),
    _ => builder.init(),
  }
}

/// Acquires the store handle the config asks for.
pub async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
  if config.in_memory_store {
    tracing::warn!("IN_MEMORY_STORE is set; data will not survive a restart.");
    return Ok(Arc::new(MemoryStore::new()));
  }

  let uri = config
    .mongo_url
    .as_deref()
    .ok_or_else(|| AppError::Config("Missing environment variable 'MONGO_URL'".to_string()))?;
  let store = MongoStore::connect(uri, &config.database_name).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to connect to the database.");
    e
  })?;
  Ok(Arc::new(store))
}

/// Starts the server and blocks until it shuts down (SIGINT/SIGTERM), then releases the store.
pub async fn run() -> anyhow::Result<()> {
  dotenvy::dotenv().ok(); // LOG_FORMAT may come from .env
  init_tracing();
  tracing::info!("Starting productDB API server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    e
  })?;

  let store = open_store(&app_config).await?;
  let catalog = Catalog::new(store, &app_config.collections, app_config.store_timeout);
  catalog.prepare().await?;

  let app_state = AppState::new(catalog.clone());

  let server_address = (app_config.server_host.clone(), app_config.server_port);
  tracing::info!("Attempting to bind server to {}:{}...", server_address.0, server_address.1);

  let served = HttpServer::new(move || {
    App::new()
      .wrap(Cors::permissive())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app(app_state.clone()))
  })
  .bind(server_address)?
  .run()
  .await;

  tracing::info!("Server stopped; closing store connection.");
  catalog.close().await;
  served?;
  Ok(())
}

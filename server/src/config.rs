// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use product_db::{CollectionNames, DEFAULT_DATABASE, DEFAULT_STORE_TIMEOUT};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Required unless the in-memory store is selected
  pub mongo_url: Option<String>,
  pub database_name: String,
  pub collections: CollectionNames,
  pub store_timeout: Duration,

  // Serve from process memory instead of MongoDB (local runs, demos)
  pub in_memory_store: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("PORT", "5000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let in_memory_store = get_or("IN_MEMORY_STORE", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid IN_MEMORY_STORE value: {}", e)))?;

    let mongo_url = lookup("MONGO_URL");
    if mongo_url.is_none() && !in_memory_store {
      return Err(AppError::Config(
        "Missing environment variable 'MONGO_URL'".to_string(),
      ));
    }

    let database_name = get_or("DATABASE_NAME", DEFAULT_DATABASE);

    let defaults = CollectionNames::default();
    let collections = CollectionNames {
      products: get_or("PRODUCTS_COLLECTION", &defaults.products),
      brands: get_or("BRANDS_COLLECTION", &defaults.brands),
      carts: get_or("CARTS_COLLECTION", &defaults.carts),
    };

    let store_timeout = match lookup("STORE_TIMEOUT_MS") {
      Some(raw) => raw
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| AppError::Config(format!("Invalid STORE_TIMEOUT_MS: {}", e)))?,
      None => DEFAULT_STORE_TIMEOUT,
    };

    tracing::info!("Application configuration loaded successfully.");
    // The connection string may carry credentials; keep it out of the logs.

    Ok(Self {
      server_host,
      server_port,
      mongo_url,
      database_name,
      collections,
      store_timeout,
      in_memory_store,
    })
  }
}

// server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

pub use routes::{configure_app, configure_app_routes, json_config};

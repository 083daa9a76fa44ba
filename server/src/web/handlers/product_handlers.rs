// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use product_db::{Document, Envelope};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.products.list().await?;
  Ok(HttpResponse::Ok().json(Envelope::success(products)))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.products.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(product)))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.products.create(body.into_inner()).await?;
  info!("Product {} created.", ack.inserted_id);
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

/// Also mounted at `POST /api/brandsProduct`.
#[instrument(name = "handler::create_many_products", skip(app_state, body))]
pub async fn create_many_products_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Vec<Document>>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.products.create_many(body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state
    .catalog
    .products
    .update(&path.into_inner(), body.into_inner())
    .await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

/// Also mounted at `DELETE /api/brandsProduct`.
#[instrument(name = "handler::delete_all_products", skip(app_state))]
pub async fn delete_all_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.products.delete_all().await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

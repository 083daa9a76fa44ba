// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use product_db::{Document, Envelope};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_cart", skip(app_state, path), fields(user_id = %path.as_str()))]
pub async fn list_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let items = app_state.catalog.carts.list_for_user(&path.into_inner()).await?;
  info!("Fetched {} cart items.", items.len());
  Ok(HttpResponse::Ok().json(Envelope::success(items)))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, body))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.carts.create(body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path), fields(cart_item_id = %path.as_str()))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.carts.delete(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::remove_user_product", skip(app_state, path))]
pub async fn remove_user_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (user_id, product_id) = path.into_inner();
  let ack = app_state.catalog.carts.delete_for_user(&user_id, &product_id).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

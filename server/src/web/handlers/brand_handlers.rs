// server/src/web/handlers/brand_handlers.rs

use actix_web::{web, HttpResponse};
use product_db::{Document, Envelope};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_brands", skip(app_state))]
pub async fn list_brands_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let brands = app_state.catalog.brands.list().await?;
  Ok(HttpResponse::Ok().json(Envelope::success(brands)))
}

#[instrument(name = "handler::get_brand", skip(app_state, path), fields(brand_id = %path.as_str()))]
pub async fn get_brand_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let brand = app_state.catalog.brands.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(brand)))
}

#[instrument(name = "handler::create_brand", skip(app_state, body))]
pub async fn create_brand_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.brands.create(body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::create_many_brands", skip(app_state, body))]
pub async fn create_many_brands_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Vec<Document>>,
) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.brands.create_many(body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::delete_all_brands", skip(app_state))]
pub async fn delete_all_brands_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let ack = app_state.catalog.brands.delete_all().await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

#[instrument(name = "handler::list_brand_products", skip(app_state, path), fields(brand_name = %path.as_str()))]
pub async fn list_brand_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.brands.list_products(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(products)))
}

#[instrument(name = "handler::get_brand_product", skip(app_state, path))]
pub async fn get_brand_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (brand_name, product_id) = path.into_inner();
  let product = app_state.catalog.brands.get_product(&brand_name, &product_id).await?;
  Ok(HttpResponse::Ok().json(Envelope::success(product)))
}

#[instrument(name = "handler::update_brand_product", skip(app_state, path, body))]
pub async fn update_brand_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
  body: web::Json<Document>,
) -> Result<HttpResponse, AppError> {
  let (brand_name, product_id) = path.into_inner();
  let ack = app_state
    .catalog
    .brands
    .update_product(&brand_name, &product_id, body.into_inner())
    .await?;
  Ok(HttpResponse::Ok().json(Envelope::success(ack)))
}

// server/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::{brand_handlers, cart_handlers, product_handlers};

async fn liveness_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("api is running")
}

/// Malformed or wrongly shaped JSON bodies get the error envelope, not actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::Payload(err.to_string()).into())
}

/// Everything an `App` needs: shared state, body parsing and the route table.
pub fn configure_app(state: AppState) -> impl Fn(&mut web::ServiceConfig) + Clone {
  move |cfg: &mut web::ServiceConfig| {
    cfg
      .app_data(web::Data::new(state.clone()))
      .app_data(json_config());
    configure_app_routes(cfg);
  }
}

// Literal segments ("many", "all") are registered before "{id}" so they win.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/", web::get().to(liveness_handler)).service(
    web::scope("/api")
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/many", web::post().to(product_handlers::create_many_products_handler))
          .route("/all", web::delete().to(product_handlers::delete_all_products_handler))
          .route("/{id}", web::get().to(product_handlers::get_product_handler))
          .route("/{id}", web::patch().to(product_handlers::update_product_handler)),
      )
      // Historic alias over the product collection; registered ahead of "/brands".
      .service(
        web::scope("/brandsProduct")
          .route("", web::post().to(product_handlers::create_many_products_handler))
          .route("", web::delete().to(product_handlers::delete_all_products_handler)),
      )
      .service(
        web::scope("/brands")
          .route("", web::get().to(brand_handlers::list_brands_handler))
          .route("", web::post().to(brand_handlers::create_brand_handler))
          .route("/many", web::post().to(brand_handlers::create_many_brands_handler))
          .route("/all", web::delete().to(brand_handlers::delete_all_brands_handler))
          .route(
            "/{brand_name}/products",
            web::get().to(brand_handlers::list_brand_products_handler),
          )
          .route(
            "/{brand_name}/products/{id}",
            web::get().to(brand_handlers::get_brand_product_handler),
          )
          .route(
            "/{brand_name}/products/{id}",
            web::patch().to(brand_handlers::update_brand_product_handler),
          )
          .route("/{id}", web::get().to(brand_handlers::get_brand_handler)),
      )
      .service(
        web::scope("/carts")
          .route("", web::post().to(cart_handlers::add_to_cart_handler))
          .route(
            "/{user_id}/products/{product_id}",
            web::delete().to(cart_handlers::remove_user_product_handler),
          )
          .route("/{user_id}", web::get().to(cart_handlers::list_cart_handler))
          .route("/{id}", web::delete().to(cart_handlers::remove_cart_item_handler)),
      ),
  );
}

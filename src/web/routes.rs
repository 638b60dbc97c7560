// src/web/routes.rs

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::cart_handlers;

// Simple health check; a real deployment might probe the pool here.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Anything the cart resources don't claim. An unrecognized action on a
/// supported verb is a 400, distinct from a recognized action with a bad
/// payload; an unsupported verb is a 405.
async fn fallback_handler(req: HttpRequest) -> HttpResponse {
  if req.method() == Method::GET || req.method() == Method::POST {
    AppError::InvalidRequest(format!("Unknown action: {}", req.path())).error_response()
  } else {
    AppError::MethodNotAllowed.error_response()
  }
}

// Missing or malformed body fields surface as the invalid-input 400, not as
// actix's default error shape.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

// This function is called in `main.rs` (and the HTTP tests) to configure
// services for the Actix App. Each cart resource carries the fallback as a
// guardless final route so a wrong verb on a known action still gets the
// JSON error shape instead of actix's bare 405.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .app_data(json_config())
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Cart Routes
      .service(
        web::scope("/cart")
          .service(
            web::resource("/items")
              .route(web::get().to(cart_handlers::get_cart_handler))
              .route(web::route().to(fallback_handler)),
          )
          .service(
            web::resource("/add")
              .route(web::post().to(cart_handlers::add_to_cart_handler))
              .route(web::route().to(fallback_handler)),
          )
          .service(
            web::resource("/update")
              .route(web::post().to(cart_handlers::update_cart_item_handler))
              .route(web::route().to(fallback_handler)),
          )
          .service(
            web::resource("/remove")
              .route(web::post().to(cart_handlers::remove_cart_item_handler))
              .route(web::route().to(fallback_handler)),
          )
          .service(
            web::resource("/clear")
              .route(web::post().to(cart_handlers::clear_cart_handler))
              .route(web::route().to(fallback_handler)),
          )
          .default_service(web::route().to(fallback_handler)),
      )
      .default_service(web::route().to(fallback_handler)),
  );
}

// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct AddItemPayload {
  pub product_id: Uuid,
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct UpdateItemPayload {
  pub cart_item_id: i64,
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct RemoveItemPayload {
  pub cart_item_id: i64,
}

// --- Handler Implementations ---
//
// Each handler is the thinnest possible mapping onto the store: the
// extractor has already produced the acting user, the Json extractor has
// already validated payload shape, and the store has already collapsed any
// storage failure to a bool. Mutations therefore always answer 200 with
// `{"success": ..}`.
//
// Arguments are extracted in declaration order, so `auth_user` must come
// before the Json payload: an unauthenticated request with a bad body is a
// 401, never a 400.

#[instrument(name = "handler::get_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, auth_user: AuthenticatedUser) -> HttpResponse {
  let items = app_state.store.list_items(auth_user.user_id).await;
  let total = app_state.store.total(auth_user.user_id).await;

  HttpResponse::Ok().json(json!({
      "items": items,
      "total": total
  }))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, payload, auth_user),
    fields(user_id = %auth_user.user_id, product_id = %payload.product_id, quantity = %payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  payload: web::Json<AddItemPayload>,
) -> HttpResponse {
  info!("Add to cart attempt");
  let success = app_state
    .store
    .add_item(auth_user.user_id, payload.product_id, payload.quantity)
    .await;

  HttpResponse::Ok().json(json!({ "success": success }))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, payload, auth_user),
    fields(user_id = %auth_user.user_id, cart_item_id = %payload.cart_item_id, quantity = %payload.quantity)
)]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  payload: web::Json<UpdateItemPayload>,
) -> HttpResponse {
  let success = app_state
    .store
    .set_quantity(auth_user.user_id, payload.cart_item_id, payload.quantity)
    .await;

  HttpResponse::Ok().json(json!({ "success": success }))
}

#[instrument(
    name = "handler::remove_cart_item",
    skip(app_state, payload, auth_user),
    fields(user_id = %auth_user.user_id, cart_item_id = %payload.cart_item_id)
)]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  payload: web::Json<RemoveItemPayload>,
) -> HttpResponse {
  let success = app_state.store.remove_item(auth_user.user_id, payload.cart_item_id).await;

  HttpResponse::Ok().json(json!({ "success": success }))
}

#[instrument(name = "handler::clear_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>, auth_user: AuthenticatedUser) -> HttpResponse {
  let success = app_state.store.clear(auth_user.user_id).await;

  HttpResponse::Ok().json(json!({ "success": success }))
}

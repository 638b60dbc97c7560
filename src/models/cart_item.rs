// src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One product line within a cart. `(cart_id, product_id)` is unique; a
/// repeated add merges into the existing row by summing quantity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
  pub cart_item_id: i64,
  pub cart_id: i64,
  pub product_id: Uuid,
  pub quantity: i64,
  pub added_at: DateTime<Utc>,
}

/// A cart line joined with its catalog row, as returned to the client.
/// `price_cents` serializes as `price` per the response contract.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartEntry {
  pub cart_item_id: i64,
  pub quantity: i64,
  pub name: String,
  #[serde(rename = "price")]
  pub price_cents: i64,
  pub image_url: Option<String>,
  pub description: Option<String>,
}

// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog row. The cart reads it only through the `product_id` foreign
/// key at list/total time; it is never written here outside of seeding.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub product_id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i64,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

// src/models/cart.rs

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// The single per-user container of line items. Created lazily on the first
/// mutation for a user and never deleted by this service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cart {
  pub cart_id: i64,
  pub user_id: Uuid,
}

// src/store/cart_store.rs

//! Sole reader/writer of persisted cart state.
//!
//! Every mutation is a single atomic statement. The two historical races of
//! cart code (select-then-insert on first cart creation, check-then-write on
//! merge-on-add) are closed by the `UNIQUE (user_id)` and
//! `UNIQUE (cart_id, product_id)` constraints plus `ON CONFLICT` upserts, so
//! concurrent callers converge on one row.
//!
//! Failures are collapsed at this boundary: the structured [`StoreError`] is
//! logged with operation context, and callers see only a bool (mutations) or
//! an empty list / zero total (reads). No schema or query detail escapes.

use crate::models::{Cart, CartEntry, CartItem};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
  #[error("quantity must be at least 1, got {0}")]
  QuantityFloor(i64),

  #[error(transparent)]
  Db(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct CartStore {
  pool: SqlitePool,
}

impl CartStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Adds `quantity` of a product to the user's cart, creating the cart on
  /// first use and merging into an existing line for the same product.
  ///
  /// Returns `false` for a non-positive quantity, an unknown product (the
  /// foreign key rejects it), or any storage failure.
  #[instrument(name = "store::add_item", skip(self), fields(%user_id, %product_id, quantity))]
  pub async fn add_item(&self, user_id: Uuid, product_id: Uuid, quantity: i64) -> bool {
    match self.try_add_item(user_id, product_id, quantity).await {
      Ok(item) => {
        debug!(cart_item_id = item.cart_item_id, new_quantity = item.quantity, "Cart line upserted");
        true
      }
      Err(StoreError::QuantityFloor(q)) => {
        warn!(rejected_quantity = q, "add_item rejected: quantity below floor");
        false
      }
      Err(StoreError::Db(e)) => {
        error!(error = %e, operation = "add_item", "Cart storage failure");
        false
      }
    }
  }

  async fn try_add_item(&self, user_id: Uuid, product_id: Uuid, quantity: i64) -> Result<CartItem, StoreError> {
    if quantity < 1 {
      return Err(StoreError::QuantityFloor(quantity));
    }

    let cart = self.get_or_create_cart(user_id).await?;

    // added_at is only set on insert; a merge keeps the original add time.
    let item = sqlx::query_as::<_, CartItem>(
      "INSERT INTO cart_items (cart_id, product_id, quantity, added_at) \
       VALUES (?1, ?2, ?3, ?4) \
       ON CONFLICT (cart_id, product_id) \
         DO UPDATE SET quantity = quantity + excluded.quantity \
       RETURNING cart_item_id, cart_id, product_id, quantity, added_at",
    )
    .bind(cart.cart_id)
    .bind(product_id)
    .bind(quantity)
    .bind(chrono::Utc::now())
    .fetch_one(&self.pool)
    .await?;

    Ok(item)
  }

  /// Looks up the user's cart, creating it if absent. The upsert on the
  /// `user_id` uniqueness constraint makes concurrent first calls converge
  /// on the same row.
  async fn get_or_create_cart(&self, user_id: Uuid) -> Result<Cart, StoreError> {
    // DO UPDATE (rather than DO NOTHING) so RETURNING yields the existing
    // row on conflict.
    let cart = sqlx::query_as::<_, Cart>(
      "INSERT INTO carts (user_id) VALUES (?1) \
       ON CONFLICT (user_id) DO UPDATE SET user_id = excluded.user_id \
       RETURNING cart_id, user_id",
    )
    .bind(user_id)
    .fetch_one(&self.pool)
    .await?;

    Ok(cart)
  }

  /// Replaces a line's quantity, but only when the line belongs to a cart
  /// owned by `user_id`. A missing line and someone else's line are both
  /// just `false`; callers can never tell which.
  ///
  /// Non-positive quantities are rejected here, not routed to deletion;
  /// removal goes through [`CartStore::remove_item`].
  #[instrument(name = "store::set_quantity", skip(self), fields(%user_id, cart_item_id, quantity))]
  pub async fn set_quantity(&self, user_id: Uuid, cart_item_id: i64, quantity: i64) -> bool {
    match self.try_set_quantity(user_id, cart_item_id, quantity).await {
      Ok(updated) => updated,
      Err(StoreError::QuantityFloor(q)) => {
        warn!(rejected_quantity = q, "set_quantity rejected: quantity below floor");
        false
      }
      Err(StoreError::Db(e)) => {
        error!(error = %e, operation = "set_quantity", cart_item_id, "Cart storage failure");
        false
      }
    }
  }

  async fn try_set_quantity(&self, user_id: Uuid, cart_item_id: i64, quantity: i64) -> Result<bool, StoreError> {
    if quantity < 1 {
      return Err(StoreError::QuantityFloor(quantity));
    }

    let result = sqlx::query(
      "UPDATE cart_items SET quantity = ?3 \
       WHERE cart_item_id = ?2 \
         AND cart_id IN (SELECT cart_id FROM carts WHERE user_id = ?1)",
    )
    .bind(user_id)
    .bind(cart_item_id)
    .bind(quantity)
    .execute(&self.pool)
    .await?;

    Ok(result.rows_affected() == 1)
  }

  /// Deletes a line, guarded by ownership exactly like
  /// [`CartStore::set_quantity`].
  #[instrument(name = "store::remove_item", skip(self), fields(%user_id, cart_item_id))]
  pub async fn remove_item(&self, user_id: Uuid, cart_item_id: i64) -> bool {
    let result = sqlx::query(
      "DELETE FROM cart_items \
       WHERE cart_item_id = ?2 \
         AND cart_id IN (SELECT cart_id FROM carts WHERE user_id = ?1)",
    )
    .bind(user_id)
    .bind(cart_item_id)
    .execute(&self.pool)
    .await;

    match result {
      Ok(done) => done.rows_affected() == 1,
      Err(e) => {
        error!(error = %e, operation = "remove_item", cart_item_id, "Cart storage failure");
        false
      }
    }
  }

  /// Empties the user's cart. Succeeds on an empty or absent cart.
  #[instrument(name = "store::clear", skip(self), fields(%user_id))]
  pub async fn clear(&self, user_id: Uuid) -> bool {
    let result = sqlx::query(
      "DELETE FROM cart_items \
       WHERE cart_id IN (SELECT cart_id FROM carts WHERE user_id = ?1)",
    )
    .bind(user_id)
    .execute(&self.pool)
    .await;

    match result {
      Ok(done) => {
        debug!(removed = done.rows_affected(), "Cart cleared");
        true
      }
      Err(e) => {
        error!(error = %e, operation = "clear", "Cart storage failure");
        false
      }
    }
  }

  /// The user's lines joined with the catalog, most recently added first.
  /// Empty for a user with no cart or no items, and on storage failure.
  #[instrument(name = "store::list_items", skip(self), fields(%user_id))]
  pub async fn list_items(&self, user_id: Uuid) -> Vec<CartEntry> {
    let result = sqlx::query_as::<_, CartEntry>(
      "SELECT ci.cart_item_id, ci.quantity, p.name, p.price_cents, p.image_url, p.description \
       FROM cart_items ci \
       JOIN carts c ON ci.cart_id = c.cart_id \
       JOIN products p ON ci.product_id = p.product_id \
       WHERE c.user_id = ?1 \
       ORDER BY ci.added_at DESC, ci.cart_item_id DESC",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await;

    match result {
      Ok(entries) => entries,
      Err(e) => {
        error!(error = %e, operation = "list_items", "Cart storage failure");
        Vec::new()
      }
    }
  }

  /// `Σ(quantity × price_cents)` over the user's lines, recomputed from the
  /// current rows on every call. Zero for an empty or absent cart.
  #[instrument(name = "store::total", skip(self), fields(%user_id))]
  pub async fn total(&self, user_id: Uuid) -> i64 {
    let result = sqlx::query_scalar::<_, i64>(
      "SELECT COALESCE(SUM(ci.quantity * p.price_cents), 0) \
       FROM cart_items ci \
       JOIN carts c ON ci.cart_id = c.cart_id \
       JOIN products p ON ci.product_id = p.product_id \
       WHERE c.user_id = ?1",
    )
    .bind(user_id)
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(total) => total,
      Err(e) => {
        error!(error = %e, operation = "total", "Cart storage failure");
        0
      }
    }
  }
}

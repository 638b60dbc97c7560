// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use trolley::db;
use trolley::store::CartStore;

// --- Fixed catalog fixtures ---

pub const WIDGET_PRICE: i64 = 100;
pub const GADGET_PRICE: i64 = 250;

pub fn widget_id() -> Uuid {
  Uuid::parse_str("11111111-1111-4111-8111-111111111111").unwrap()
}

pub fn gadget_id() -> Uuid {
  Uuid::parse_str("22222222-2222-4222-8222-222222222222").unwrap()
}

pub fn setup_tracing() {
  use std::sync::Once;
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .try_init();
  });
}

/// A migrated, catalog-seeded pool backed by a throwaway on-disk database.
/// On disk rather than in memory so every pooled connection sees the same
/// rows, which the concurrency tests rely on. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn test_pool() -> (SqlitePool, TempDir) {
  setup_tracing();

  let dir = TempDir::new().expect("create temp dir");
  let url = format!("sqlite://{}/cart-test.db", dir.path().display());

  let pool = db::connect(&url).await.expect("connect test database");
  db::migrate(&pool).await.expect("run migrations");
  seed_catalog(&pool).await;

  (pool, dir)
}

pub async fn test_store() -> (CartStore, SqlitePool, TempDir) {
  let (pool, dir) = test_pool().await;
  (CartStore::new(pool.clone()), pool, dir)
}

async fn seed_catalog(pool: &SqlitePool) {
  for (id, name, description, price_cents, image_url) in [
    (widget_id(), "Widget", Some("A fine widget"), WIDGET_PRICE, Some("/img/widget.jpg")),
    (gadget_id(), "Gadget", None, GADGET_PRICE, None),
  ] {
    sqlx::query(
      "INSERT INTO products (product_id, name, description, price_cents, image_url, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price_cents)
    .bind(image_url)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .expect("seed catalog row");
  }
}

// --- Raw row inspection, bypassing the store ---

pub async fn cart_count(pool: &SqlitePool, user_id: Uuid) -> i64 {
  sqlx::query_scalar("SELECT COUNT(*) FROM carts WHERE user_id = ?1")
    .bind(user_id)
    .fetch_one(pool)
    .await
    .expect("count carts")
}

pub async fn item_row_count(pool: &SqlitePool, user_id: Uuid) -> i64 {
  sqlx::query_scalar(
    "SELECT COUNT(*) FROM cart_items ci \
     JOIN carts c ON ci.cart_id = c.cart_id \
     WHERE c.user_id = ?1",
  )
  .bind(user_id)
  .fetch_one(pool)
  .await
  .expect("count cart items")
}

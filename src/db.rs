// src/db.rs

//! Pool construction, embedded migrations, and the optional demo seed.

use crate::models::Product;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/// Connects a pool for the given `sqlite:` URL.
///
/// WAL plus a busy timeout lets concurrent writers queue on SQLite's single
/// writer instead of failing; foreign keys are on so `cart_items.product_id`
/// actually enforces catalog membership.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .journal_mode(SqliteJournalMode::Wal)
    .busy_timeout(Duration::from_secs(5))
    .foreign_keys(true);

  SqlitePoolOptions::new().max_connections(5).connect_with(options).await
}

/// Applies the embedded migrations (schema and uniqueness guards).
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
  sqlx::migrate!("./migrations").run(pool).await
}

/// Inserts a handful of catalog rows so a fresh database has something to
/// add to a cart. Idempotent; existing rows win.
pub async fn seed_demo_products(pool: &SqlitePool) -> Result<(), sqlx::Error> {
  let demo = [
    ("Espresso Maker", Some("Stovetop, 6 cup"), 4_500_i64, Some("/img/espresso.jpg")),
    ("Pour-over Kettle", Some("Gooseneck, 1L"), 3_200, Some("/img/kettle.jpg")),
    ("Burr Grinder", None, 8_900, Some("/img/grinder.jpg")),
  ];

  for (name, description, price_cents, image_url) in demo {
    let product = Product {
      product_id: Uuid::new_v4(),
      name: name.to_string(),
      description: description.map(str::to_string),
      price_cents,
      image_url: image_url.map(str::to_string),
      created_at: chrono::Utc::now(),
    };

    // Keyed on name for idempotence; demo data only.
    sqlx::query(
      "INSERT INTO products (product_id, name, description, price_cents, image_url, created_at) \
       SELECT ?1, ?2, ?3, ?4, ?5, ?6 \
       WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = ?2)",
    )
    .bind(product.product_id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price_cents)
    .bind(&product.image_url)
    .bind(product.created_at)
    .execute(pool)
    .await?;
  }

  tracing::info!("Demo catalog seeded.");
  Ok(())
}

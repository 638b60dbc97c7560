// src/state.rs

use crate::config::AppConfig;
use crate::store::CartStore;
use sqlx::SqlitePool;
use std::sync::Arc;

// The pool itself stays inside the store; handlers get no direct
// database access.
#[derive(Clone)]
pub struct AppState {
  pub store: CartStore,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(db_pool: SqlitePool, config: Arc<AppConfig>) -> Self {
    let store = CartStore::new(db_pool);
    Self { store, config }
  }
}

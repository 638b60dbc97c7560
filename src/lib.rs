// src/lib.rs

//! Per-user shopping cart service.
//!
//! The crate is split the same way the HTTP surface is: [`store`] owns every
//! read and write of persisted cart state (merge-on-add, ownership guards,
//! totals), [`web`] is the thin request/response mapping over it, and
//! [`pricing`] holds the shipping derivation any renderer of a subtotal is
//! expected to apply.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod pricing;
pub mod state;
pub mod store;
pub mod web;

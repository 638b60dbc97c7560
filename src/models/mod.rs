// src/models/mod.rs

//! Contains data structures representing database entities.

pub mod cart;
pub mod cart_item;
pub mod product;

// Re-export the model structs for convenient access
pub use cart::Cart;
pub use cart_item::{CartEntry, CartItem};
pub use product::Product;

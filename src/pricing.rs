// src/pricing.rs

//! Shipping and grand-total derivation.
//!
//! The `items` response carries only the raw subtotal; this derivation is a
//! pure function of it, so every renderer of a total applies it identically.

/// Flat shipping charge, in cents, applied to any non-empty cart.
pub const FLAT_SHIPPING_CENTS: i64 = 50;

/// Shipping is the flat rate when there is anything to ship, otherwise zero.
pub fn shipping_cents(subtotal_cents: i64) -> i64 {
  if subtotal_cents > 0 {
    FLAT_SHIPPING_CENTS
  } else {
    0
  }
}

/// Subtotal plus shipping.
pub fn grand_total_cents(subtotal_cents: i64) -> i64 {
  subtotal_cents + shipping_cents(subtotal_cents)
}

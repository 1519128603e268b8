// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog row. Money is integer cents everywhere inside the server; only
/// API views expose decimal dollars.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price_cents: i64,
  pub image_url: String,
  pub created_at: DateTime<Utc>,
}

/// What `/api/products` hands to the shop page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub image_url: String,
}

impl From<&Product> for ProductView {
  fn from(p: &Product) -> Self {
    Self {
      id: p.id,
      name: p.name.clone(),
      price: cents_to_dollars(p.price_cents),
      image_url: p.image_url.clone(),
    }
  }
}

pub fn cents_to_dollars(cents: i64) -> f64 {
  cents as f64 / 100.0
}

/// Inverse of [`cents_to_dollars`] for display prices coming back from the
/// client cart. Rounds to the nearest cent.
pub fn dollars_to_cents(dollars: f64) -> i64 {
  (dollars * 100.0).round() as i64
}

// src/models/order_item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One persisted order line. Lines are owned directly by the submitting
/// user; there is intentionally no parent order aggregate (see DESIGN.md).
/// `unit_price_cents` is the catalog price at submission time, never a
/// client-supplied value.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub user_id: i64,
  pub product_id: i64,
  pub quantity: i32,
  pub unit_price_cents: i64,
  pub created_at: DateTime<Utc>,
}

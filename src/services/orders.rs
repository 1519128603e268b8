// src/services/orders.rs

//! Order submission: shape validation, server-side re-pricing, persistence.
//!
//! Every line is checked and priced before the first insert, so a rejected
//! order touches nothing. The inserts themselves are independent rows with
//! no wrapping transaction; a mid-batch database failure can leave earlier
//! lines persisted (known gap, unchanged from the original design).

use crate::errors::{AppError, Result};
use crate::models::OrderItem;
use crate::services::catalog;
use serde::Deserialize;
use serde_json::Number;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

/// One `{id, quantity}` entry as it arrives in the request body. The fields
/// stay as raw JSON numbers so `1.5` can be rejected with the right message
/// instead of dying in deserialization. Any client-supplied price field is
/// dropped on the floor here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderLine {
  pub id: Number,
  pub quantity: Number,
}

/// A line that passed shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
  pub product_id: i64,
  pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct PlacedOrder {
  /// Client receipt reference. Generated fresh per acknowledgement; nothing
  /// is keyed by it server-side since there is no order aggregate.
  pub order_id: Uuid,
  pub total_cents: i64,
  /// The rows as persisted, in submission order.
  pub items: Vec<OrderItem>,
}

/// Shape-checks every submitted line, each rule a distinct failure:
/// the product id must be a positive integer ("Invalid product"), the
/// quantity a positive integer ("Invalid quantity"). Existence against the
/// catalog is checked later, during pricing.
pub fn validate_lines(raw: &[RawOrderLine]) -> Result<Vec<OrderLine>> {
  if raw.is_empty() {
    return Err(AppError::Validation("Cart is empty".to_string()));
  }
  raw
    .iter()
    .map(|line| {
      let product_id = line
        .id
        .as_i64()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation("Invalid product".to_string()))?;
      let quantity = line
        .quantity
        .as_i64()
        .filter(|q| *q > 0 && *q <= i32::MAX as i64)
        .ok_or_else(|| AppError::Validation("Invalid quantity".to_string()))?;
      Ok(OrderLine {
        product_id,
        quantity: quantity as i32,
      })
    })
    .collect()
}

/// Total over lines already priced from the catalog.
pub fn order_total_cents<I>(priced: I) -> i64
where
  I: IntoIterator<Item = (i64, i32)>,
{
  priced.into_iter().map(|(unit_price_cents, quantity)| unit_price_cents * quantity as i64).sum()
}

/// Prices every line fresh from the catalog, then persists one `order_items`
/// row per line owned by `user_id`. All catalog reads happen before the
/// first write; an unknown product rejects the whole submission.
#[instrument(name = "orders::place_order", skip(pool, lines), fields(line_count = lines.len()), err(Display))]
pub async fn place_order(pool: &PgPool, user_id: i64, lines: &[OrderLine]) -> Result<PlacedOrder> {
  let mut priced = Vec::with_capacity(lines.len());
  for line in lines {
    let unit_price_cents = catalog::find_unit_price(pool, line.product_id)
      .await?
      .ok_or_else(|| AppError::NotFound("Invalid product".to_string()))?;
    priced.push((*line, unit_price_cents));
  }

  let total_cents = order_total_cents(priced.iter().map(|(line, price)| (*price, line.quantity)));

  let mut items = Vec::with_capacity(priced.len());
  for (line, unit_price_cents) in &priced {
    let item = sqlx::query_as::<_, OrderItem>(
      "INSERT INTO order_items (user_id, product_id, quantity, unit_price_cents) VALUES ($1, $2, $3, $4) \
       RETURNING id, user_id, product_id, quantity, unit_price_cents, created_at",
    )
    .bind(user_id)
    .bind(line.product_id)
    .bind(line.quantity)
    .bind(unit_price_cents)
    .fetch_one(pool)
    .await
    .map_err(AppError::Sqlx)?;
    items.push(item);
  }

  let placed = PlacedOrder {
    order_id: Uuid::new_v4(),
    total_cents,
    items,
  };
  info!(order_id = %placed.order_id, total_cents, lines = placed.items.len(), "Order lines persisted.");
  Ok(placed)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(id: impl Into<Number>, quantity: impl Into<Number>) -> RawOrderLine {
    RawOrderLine {
      id: id.into(),
      quantity: quantity.into(),
    }
  }

  #[test]
  fn test_valid_lines_pass_shape_validation() {
    let lines = validate_lines(&[raw(1, 2), raw(7, 1)]).unwrap();
    assert_eq!(
      lines,
      vec![
        OrderLine { product_id: 1, quantity: 2 },
        OrderLine { product_id: 7, quantity: 1 },
      ]
    );
  }

  #[test]
  fn test_zero_or_negative_quantity_is_invalid_quantity() {
    for bad in [0i64, -3] {
      let err = validate_lines(&[raw(1, bad)]).unwrap_err();
      assert!(matches!(&err, AppError::Validation(m) if m == "Invalid quantity"), "{err}");
    }
  }

  #[test]
  fn test_non_integer_quantity_is_invalid_quantity() {
    let quantity = Number::from_f64(1.5).unwrap();
    let err = validate_lines(&[RawOrderLine {
      id: Number::from(1),
      quantity,
    }])
    .unwrap_err();
    assert!(matches!(&err, AppError::Validation(m) if m == "Invalid quantity"), "{err}");
  }

  #[test]
  fn test_non_positive_or_fractional_id_is_invalid_product() {
    let fractional = RawOrderLine {
      id: Number::from_f64(2.5).unwrap(),
      quantity: Number::from(1),
    };
    for bad in [validate_lines(&[raw(0, 1)]), validate_lines(&[raw(-1, 1)]), validate_lines(&[fractional])] {
      let err = bad.unwrap_err();
      assert!(matches!(&err, AppError::Validation(m) if m == "Invalid product"), "{err}");
    }
  }

  #[test]
  fn test_empty_submission_is_rejected() {
    assert!(matches!(validate_lines(&[]), Err(AppError::Validation(_))));
  }

  #[test]
  fn test_one_bad_line_rejects_the_whole_batch() {
    assert!(validate_lines(&[raw(1, 1), raw(2, 0)]).is_err());
  }

  #[test]
  fn test_total_is_sum_of_price_times_quantity() {
    // 2 × $9.99 + 1 × $19.00
    assert_eq!(order_total_cents([(999, 2), (1900, 1)]), 3898);
    assert_eq!(order_total_cents([(999, 2)]), 1998);
    assert_eq!(order_total_cents(std::iter::empty()), 0);
  }

  #[test]
  fn test_client_price_fields_are_dropped_in_deserialization() {
    // The shop page only ever sends {id, quantity}; a tampering client that
    // smuggles a price in sees it ignored.
    let line: RawOrderLine = serde_json::from_str(r#"{"id": 1, "quantity": 2, "price": 0.01}"#).unwrap();
    let validated = validate_lines(&[line]).unwrap();
    assert_eq!(validated[0], OrderLine { product_id: 1, quantity: 2 });
  }
}

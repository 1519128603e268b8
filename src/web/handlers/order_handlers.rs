// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::errors::AppError;
use crate::models::product::cents_to_dollars;
use crate::services::orders::{self, OrderLine, RawOrderLine};
use crate::state::AppState;
use crate::web::session::CurrentUser;

// --- Request DTOs ---

/// Batch submission from the shop page: the cart lines plus the shipping
/// address. Unknown fields (a smuggled price, say) are dropped by serde.
#[derive(Deserialize, Debug)]
pub struct OrderBatchPayload {
  pub items: Vec<RawOrderLine>,
  pub firstname: String,
  pub lastname: String,
  pub address: String,
  #[serde(default)]
  pub address2: String,
  pub city: String,
  pub state: String,
  pub zip: String,
}

/// Single-item form variant. Form values arrive as strings; parsing applies
/// the same positive-integer rules as the batch path.
#[derive(Deserialize, Debug)]
pub struct SingleOrderForm {
  pub product_id: String,
  pub quantity: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::submit_orders", skip(state, user, payload), fields(user_id = user.0.id))]
pub async fn submit_orders_handler(
  state: web::Data<AppState>,
  user: CurrentUser,
  payload: web::Json<OrderBatchPayload>,
) -> Result<HttpResponse, AppError> {
  let lines = orders::validate_lines(&payload.items)?;

  // With no order aggregate there is no row to hang the address on; it is
  // received, logged, and dropped (see DESIGN.md).
  debug!(
    firstname = %payload.firstname,
    lastname = %payload.lastname,
    city = %payload.city,
    zip = %payload.zip,
    "Shipping address received; not persisted."
  );

  let placed = orders::place_order(&state.db_pool, user.0.id, &lines).await?;
  info!(order_id = %placed.order_id, "Order acknowledged.");

  Ok(HttpResponse::Ok().json(json!({
    "orderId": placed.order_id,
    "total": cents_to_dollars(placed.total_cents),
  })))
}

#[instrument(name = "handler::submit_order", skip(state, user, form), fields(user_id = user.0.id))]
pub async fn submit_order_handler(
  state: web::Data<AppState>,
  user: CurrentUser,
  form: web::Form<SingleOrderForm>,
) -> Result<HttpResponse, AppError> {
  let product_id = form
    .product_id
    .trim()
    .parse::<i64>()
    .ok()
    .filter(|id| *id > 0)
    .ok_or_else(|| AppError::Validation("Invalid product".to_string()))?;
  let quantity = form
    .quantity
    .trim()
    .parse::<i64>()
    .ok()
    .filter(|q| *q > 0 && *q <= i32::MAX as i64)
    .ok_or_else(|| AppError::Validation("Invalid quantity".to_string()))?;

  let lines = [OrderLine {
    product_id,
    quantity: quantity as i32,
  }];
  let placed = orders::place_order(&state.db_pool, user.0.id, &lines).await?;

  Ok(HttpResponse::Ok().json(json!({
    "message": "Order item added",
    "total": cents_to_dollars(placed.total_cents),
  })))
}

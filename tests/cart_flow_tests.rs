// tests/cart_flow_tests.rs
//
// The cart-to-order round trip at the model level: the cart builds the
// submission the way the shop page does ({id, quantity} only), the server
// side validates and re-prices from the catalog, and the cart is cleared
// only on acknowledgement.

use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

use storefront::cart::{CartStore, MemoryStorage};
use storefront::errors::AppError;
use storefront::models::ProductView;
use storefront::services::orders::{order_total_cents, validate_lines, RawOrderLine};

fn mug() -> ProductView {
  ProductView {
    id: 1,
    name: "Coffee Mug".to_string(),
    price: 9.99,
    image_url: "/images/mug.png".to_string(),
  }
}

/// What the shop page posts: cart lines reduced to {id, quantity}. The
/// stored display price deliberately never leaves the client.
fn submission_items(cart: &CartStore<MemoryStorage>) -> Vec<RawOrderLine> {
  let items: Vec<serde_json::Value> = cart
    .lines()
    .iter()
    .map(|line| json!({ "id": line.product_id, "quantity": line.quantity }))
    .collect();
  serde_json::from_value(json!(items)).expect("wire round trip")
}

#[test]
fn test_successful_order_clears_cart_and_badge() {
  let badge: Rc<RefCell<u32>> = Rc::new(RefCell::new(u32::MAX));
  let badge_for_cart = Rc::clone(&badge);

  let mut cart = CartStore::new(MemoryStorage::new());
  cart.set_badge(move |count| *badge_for_cart.borrow_mut() = count);
  cart.add(&mug());
  cart.add(&mug());
  assert_eq!(*badge.borrow(), 2);

  // Client submits; server validates and re-prices from the catalog.
  let lines = validate_lines(&submission_items(&cart)).expect("valid submission");
  assert_eq!(lines.len(), 1);
  assert_eq!(lines[0].quantity, 2);
  let catalog_price_cents = 999;
  let total_cents = order_total_cents(lines.iter().map(|l| (catalog_price_cents, l.quantity)));
  assert_eq!(total_cents, 1998);

  // Acknowledgement received: only now does the client clear.
  cart.clear();
  assert_eq!(cart.count(), 0);
  assert_eq!(*badge.borrow(), 0);
}

#[test]
fn test_failed_order_leaves_cart_untouched() {
  let mut cart = CartStore::new(MemoryStorage::new());
  cart.add(&mug());
  cart.add(&mug());
  let before = cart.lines();

  // Corrupt submission (quantity zeroed client-side).
  let bad: Vec<RawOrderLine> = serde_json::from_value(json!([{ "id": 1, "quantity": 0 }])).unwrap();
  let err = validate_lines(&bad).unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  // No acknowledgement, no clear: nothing is lost.
  assert_eq!(cart.lines(), before);
  assert_eq!(cart.count(), 2);
}

#[test]
fn test_server_total_ignores_client_cart_price() {
  let mut cart = CartStore::new(MemoryStorage::new());
  // Client believes the mug costs a cent.
  cart.add(&ProductView { price: 0.01, ..mug() });

  let lines = validate_lines(&submission_items(&cart)).unwrap();
  // Catalog says otherwise; the total comes from the catalog alone.
  let total_cents = order_total_cents(lines.iter().map(|l| (999, l.quantity)));
  assert_eq!(total_cents, 999);
}

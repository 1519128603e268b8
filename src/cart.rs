// src/cart.rs

//! Client-side cart model.
//!
//! The browser keeps the cart in local storage under a single key holding a
//! JSON array of lines. This module is that state machine: lines are unique
//! by product id (re-adding increments the quantity), every mutation
//! persists immediately and re-renders the count badge, and a malformed
//! persisted blob reads back as an empty cart so the page always renders.
//!
//! The cart is cleared only after the server acknowledges a successful
//! order; any failed submission leaves it untouched so nothing is lost.

use crate::models::ProductView;
use serde::{Deserialize, Serialize};

/// Where the serialized cart lives. Local storage in the real client; an
/// in-memory slot in tests.
pub trait CartStorage {
  fn load(&self) -> Option<String>;
  fn store(&mut self, payload: &str);
  fn remove(&mut self);
}

/// Single-slot storage, the test stand-in for browser local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  slot: Option<String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-load the slot, e.g. with a corrupt payload.
  pub fn with_payload(payload: &str) -> Self {
    Self {
      slot: Some(payload.to_string()),
    }
  }

  pub fn raw(&self) -> Option<&str> {
    self.slot.as_deref()
  }
}

impl CartStorage for MemoryStorage {
  fn load(&self) -> Option<String> {
    self.slot.clone()
  }

  fn store(&mut self, payload: &str) {
    self.slot = Some(payload.to_string());
  }

  fn remove(&mut self) {
    self.slot = None;
  }
}

/// One product+quantity entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  pub product_id: i64,
  pub name: String,
  pub unit_price_cents: i64,
  pub quantity: u32,
}

pub struct CartStore<S: CartStorage> {
  storage: S,
  badge: Option<Box<dyn FnMut(u32)>>,
}

impl<S: CartStorage> CartStore<S> {
  pub fn new(storage: S) -> Self {
    Self { storage, badge: None }
  }

  /// Hook the visible count badge. Fires synchronously with the new count
  /// after every mutation.
  pub fn set_badge<F>(&mut self, badge: F)
  where
    F: FnMut(u32) + 'static,
  {
    self.badge = Some(Box::new(badge));
  }

  /// Add one unit of `product`. An existing line for the same product id
  /// gets its quantity bumped; otherwise a new line is appended. Persists
  /// immediately.
  pub fn add(&mut self, product: &ProductView) {
    let mut lines = self.lines();
    match lines.iter_mut().find(|l| l.product_id == product.id) {
      Some(existing) => existing.quantity += 1,
      None => lines.push(CartLine {
        product_id: product.id,
        name: product.name.clone(),
        unit_price_cents: crate::models::product::dollars_to_cents(product.price),
        quantity: 1,
      }),
    }
    self.persist(&lines);
  }

  /// Current lines, in insertion order. A missing or malformed persisted
  /// payload yields an empty cart; this never fails.
  pub fn lines(&self) -> Vec<CartLine> {
    self
      .storage
      .load()
      .and_then(|raw| serde_json::from_str(&raw).ok())
      .unwrap_or_default()
  }

  /// Drop every line. Call only once the server has acknowledged the order.
  pub fn clear(&mut self) {
    self.storage.remove();
    self.render_badge(0);
  }

  /// Sum of quantities across all lines; what the badge shows.
  pub fn count(&self) -> u32 {
    self.lines().iter().map(|l| l.quantity).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.lines().is_empty()
  }

  fn persist(&mut self, lines: &[CartLine]) {
    // CartLine serialization cannot fail; keep the unwrap-free contract anyway.
    if let Ok(raw) = serde_json::to_string(lines) {
      self.storage.store(&raw);
    }
    let count = lines.iter().map(|l| l.quantity).sum();
    self.render_badge(count);
  }

  fn render_badge(&mut self, count: u32) {
    if let Some(badge) = self.badge.as_mut() {
      badge(count);
    }
  }
}

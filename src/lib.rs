// src/lib.rs

//! Storefront: a small session-authenticated shop backend.
//!
//! The pieces, leaves first:
//!  - [`cart`]: the client-side cart model — storage-backed line items with
//!    fail-soft loading and a badge hook.
//!  - [`models`]: database row types (`User`, `Product`, `OrderItem`).
//!  - [`services`]: password hashing, catalog access, and the order
//!    submission path (validate, re-price from the catalog, persist).
//!  - [`web`]: actix routes, the `CurrentUser` session extractor, and the
//!    HTTP handlers.
//!
//! Pricing contract: unit prices are always re-read from the catalog at
//! submission time; prices carried by a client payload are ignored.

pub mod cart;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;

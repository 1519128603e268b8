// src/models/mod.rs

//! Data structures representing database entities.

pub mod order_item;
pub mod product;
pub mod user;

pub use order_item::OrderItem;
pub use product::{Product, ProductView};
pub use user::User;

// src/services/mod.rs

//! Business logic shared by the HTTP handlers.

pub mod auth;
pub mod catalog;
pub mod orders;

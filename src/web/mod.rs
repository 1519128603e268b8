// src/web/mod.rs

pub mod handlers;
pub mod routes;
pub mod session;

use actix_web::{http::header, HttpResponse};

/// Page-route redirect (303 so a POST never gets replayed at the target).
pub fn redirect_to(location: &str) -> HttpResponse {
  HttpResponse::SeeOther().insert_header((header::LOCATION, location)).finish()
}

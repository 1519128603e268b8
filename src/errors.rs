// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Required: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError for convenience in
// handlers that call anyhow-returning helpers with `?`.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // The full error goes to the log; the client gets the `message` body.
    // Database and internal failures are reported generically.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "message": m })),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({ "message": m })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({ "message": "Server error" })),
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({ "message": "Server error" })),
      AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({ "message": "Server error" })),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

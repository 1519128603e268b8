// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

/// Cookie signing keys must be at least this long to derive a `Key` from.
const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  /// Secret the session cookie signing key is derived from. When absent a
  /// random key is generated at startup (sessions then die with the process).
  pub session_secret: Option<String>,

  /// Insert the demo catalog on startup.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let session_secret = get_env("SESSION_SECRET").ok();
    if let Some(secret) = &session_secret {
      if secret.len() < MIN_SESSION_SECRET_LEN {
        return Err(AppError::Config(format!(
          "SESSION_SECRET must be at least {} bytes, got {}",
          MIN_SESSION_SECRET_LEN,
          secret.len()
        )));
      }
    }

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      session_secret,
      seed_db,
    })
  }
}

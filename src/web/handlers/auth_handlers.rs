// src/web/handlers/auth_handlers.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::User;
use crate::services::auth;
use crate::state::AppState;
use crate::web::redirect_to;
use crate::web::session::{CurrentUser, SessionUser, SESSION_USER_KEY};

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct LoginForm {
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct RegisterForm {
  pub name: String,
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::login", skip(state, session, form), fields(req_email = %form.email))]
pub async fn login_handler(
  state: web::Data<AppState>,
  session: Session,
  form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
  let user = sqlx::query_as::<_, User>("SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1")
    .bind(&form.email)
    .fetch_optional(&state.db_pool)
    .await
    .map_err(AppError::Sqlx)?;

  // Unknown email and wrong password collapse into one generic outcome, so
  // the response never confirms whether an account exists.
  let Some(user) = user else {
    warn!("Login failed for unknown email.");
    return Err(AppError::Validation("Invalid email or password".to_string()));
  };
  if !auth::verify_password(&user.password_hash, &form.password)? {
    warn!(user_id = user.id, "Login failed: password mismatch.");
    return Err(AppError::Validation("Invalid email or password".to_string()));
  }

  session.renew();
  session
    .insert(
      SESSION_USER_KEY,
      SessionUser {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
      },
    )
    .map_err(|e| AppError::Internal(format!("Failed to write session: {}", e)))?;

  info!(user_id = user.id, "Login successful.");
  Ok(redirect_to("/shop"))
}

#[instrument(name = "handler::register", skip(state, form), fields(req_email = %form.email))]
pub async fn register_handler(state: web::Data<AppState>, form: web::Form<RegisterForm>) -> Result<HttpResponse, AppError> {
  let name = form.name.trim();
  let email = form.email.trim();
  if name.is_empty() || email.is_empty() || form.password.is_empty() {
    return Err(AppError::Validation("Name, email and password are required".to_string()));
  }

  let password_hash = auth::hash_password(&form.password)?;
  sqlx::query("INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)")
    .bind(name)
    .bind(email)
    .bind(&password_hash)
    .execute(&state.db_pool)
    .await
    .map_err(AppError::Sqlx)?;

  info!("User registered.");
  Ok(redirect_to("/login"))
}

#[instrument(name = "handler::logout", skip(session))]
pub async fn logout_handler(session: Session) -> HttpResponse {
  session.purge();
  redirect_to("/login")
}

/// Session probe the shop page polls to label the nav badge.
#[instrument(name = "handler::me", skip(user), fields(user_id = user.0.id))]
pub async fn me_handler(user: CurrentUser) -> HttpResponse {
  HttpResponse::Ok().json(user.0)
}

// src/web/session.rs

//! Session identity and the `CurrentUser` extractor.
//!
//! Handlers never read ambient session state; the authenticated identity is
//! an explicit per-request value, either extracted here (API routes, 401 on
//! absence) or looked up via [`session_user`] (page routes, which redirect).

use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

pub const SESSION_USER_KEY: &str = "user";

/// What a login stores in the session: enough identity to own order lines
/// and label the nav badge, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
  pub id: i64,
  pub name: String,
  pub email: String,
}

/// The authenticated identity for one request. Extraction fails with a 401
/// `AppError::Auth` when the session carries no user, so gated API handlers
/// never run their business logic anonymously.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequest for CurrentUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let session = req.get_session();
    // A session that fails to deserialize counts as anonymous.
    let user = session.get::<SessionUser>(SESSION_USER_KEY).ok().flatten();
    ready(match user {
      Some(user) => Ok(CurrentUser(user)),
      None => {
        warn!(path = %req.path(), "Rejected anonymous request to gated route.");
        Err(AppError::Auth("Login required".to_string()))
      }
    })
  }
}

/// Page-route variant: the caller decides how to redirect.
pub fn session_user(session: &Session) -> Option<SessionUser> {
  session.get::<SessionUser>(SESSION_USER_KEY).ok().flatten()
}

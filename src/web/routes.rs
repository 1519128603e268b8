// src/web/routes.rs

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::web::handlers::{auth_handlers, order_handlers, product_handlers};
use crate::web::redirect_to;
use crate::web::session::session_user;

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Root: logged-in visitors go to the shop, everyone else to the login page.
async fn index_handler(session: Session) -> HttpResponse {
  if session_user(&session).is_some() {
    redirect_to("/shop")
  } else {
    redirect_to("/login")
  }
}

/// The shop page gate. Page bytes come from the static layer in front of
/// this server; the route exists to redirect anonymous visitors.
async fn shop_page_handler(session: Session) -> HttpResponse {
  if session_user(&session).is_some() {
    HttpResponse::Ok().finish()
  } else {
    redirect_to("/login")
  }
}

// Called from `main.rs` to configure services for the Actix App. Paths are
// the authoritative contract; API routes gate via the `CurrentUser`
// extractor (401), page routes redirect.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .route("/", web::get().to(index_handler))
    .route("/shop", web::get().to(shop_page_handler))
    // Authentication
    .route("/login", web::post().to(auth_handlers::login_handler))
    .route("/register", web::post().to(auth_handlers::register_handler))
    .route("/logout", web::post().to(auth_handlers::logout_handler))
    .route("/auth/me", web::get().to(auth_handlers::me_handler))
    // Catalog
    .route("/api/products", web::get().to(product_handlers::list_products_handler))
    // Orders: batch (shop page) and single-item (form) variants
    .route("/orders", web::post().to(order_handlers::submit_orders_handler))
    .route("/order", web::post().to(order_handlers::submit_order_handler));
}

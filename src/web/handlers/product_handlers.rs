// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::models::ProductView;
use crate::services::catalog;
use crate::state::AppState;
use crate::web::session::CurrentUser;

/// Product grid data for the shop page. Gated: the extractor rejects
/// anonymous callers with a 401 before the catalog is touched.
#[instrument(name = "handler::list_products", skip(state, _user))]
pub async fn list_products_handler(state: web::Data<AppState>, _user: CurrentUser) -> Result<HttpResponse, AppError> {
  let products = catalog::list_products(&state.db_pool).await?;
  let views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
  Ok(HttpResponse::Ok().json(views))
}

// src/services/catalog.rs

//! Catalog access. The products table is the single source of truth for
//! prices; order submission always reads from here, never from the client.

use crate::errors::{AppError, Result};
use crate::models::Product;
use sqlx::PgPool;
use tracing::{info, instrument};

#[instrument(name = "catalog::list_products", skip(pool), err(Display))]
pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>> {
  let products =
    sqlx::query_as::<_, Product>("SELECT id, name, price_cents, image_url, created_at FROM products ORDER BY id")
      .fetch_all(pool)
      .await
      .map_err(AppError::Sqlx)?;
  Ok(products)
}

/// Current price of one product, or `None` for an unknown id.
#[instrument(name = "catalog::find_unit_price", skip(pool), err(Display))]
pub async fn find_unit_price(pool: &PgPool, product_id: i64) -> Result<Option<i64>> {
  let price = sqlx::query_scalar::<_, i64>("SELECT price_cents FROM products WHERE id = $1")
    .bind(product_id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Sqlx)?;
  Ok(price)
}

/// Inserts the demo catalog on first boot. A non-empty table is left alone.
#[instrument(name = "catalog::seed_products", skip(pool), err(Display))]
pub async fn seed_products(pool: &PgPool) -> Result<()> {
  let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await
    .map_err(AppError::Sqlx)?;
  if existing > 0 {
    info!(existing, "Products table already populated; skipping seed.");
    return Ok(());
  }

  let demo: [(&str, i64, &str); 4] = [
    ("Coffee Mug", 999, "/images/mug.png"),
    ("T-Shirt", 1900, "/images/tshirt.png"),
    ("Sticker Pack", 450, "/images/stickers.png"),
    ("Hoodie", 3950, "/images/hoodie.png"),
  ];
  for (name, price_cents, image_url) in demo {
    sqlx::query("INSERT INTO products (name, price_cents, image_url) VALUES ($1, $2, $3)")
      .bind(name)
      .bind(price_cents)
      .bind(image_url)
      .execute(pool)
      .await
      .map_err(AppError::Sqlx)?;
  }
  info!("Seeded demo catalog.");
  Ok(())
}

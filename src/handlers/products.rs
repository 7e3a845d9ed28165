use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, CurrentStore};
use crate::models::{
    Category, Color, Product, ProductDetail, ProductImage, ProductPayload, Size,
};
use crate::models::product::ImagePayload;

const PRODUCT_COLUMNS: &str = "id, store_id, category_id, size_id, color_id, name, price, \
                               is_featured, is_archived, created_at, updated_at";
const IMAGE_COLUMNS: &str = "id, product_id, url, created_at, updated_at";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub is_featured: Option<String>,
}

/// Tri-state featured filter: "true"/"false" filter, anything else is
/// no filter
fn featured_filter(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// GET /api/:store_id/products - public filtered listing. Archived
/// products are always excluded.
pub async fn list(
    Path(store_id): Path<Uuid>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<Vec<ProductDetail>> {
    let pool = DatabaseManager::pool().await?;

    let mut qb = sqlx::QueryBuilder::<sqlx::Postgres>::new(format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE store_id = "
    ));
    qb.push_bind(store_id);
    qb.push(" AND is_archived = FALSE");

    if let Some(category_id) = query.category_id {
        qb.push(" AND category_id = ").push_bind(category_id);
    }
    if let Some(size_id) = query.size_id {
        qb.push(" AND size_id = ").push_bind(size_id);
    }
    if let Some(color_id) = query.color_id {
        qb.push(" AND color_id = ").push_bind(color_id);
    }
    if let Some(featured) = featured_filter(query.is_featured.as_deref()) {
        qb.push(" AND is_featured = ").push_bind(featured);
    }
    qb.push(" ORDER BY created_at DESC");

    let products: Vec<Product> = qb.build_query_as().fetch_all(&pool).await?;
    let details = load_details(&pool, products).await?;

    Ok(ApiResponse::success(details))
}

/// GET /api/:store_id/products/:product_id - public read by id with
/// images, category, size, and color
pub async fn get(Path((_store_id, product_id)): Path<(Uuid, Uuid)>) -> ApiResult<ProductDetail> {
    let pool = DatabaseManager::pool().await?;

    let product: Option<Product> = sqlx::query_as(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(product_id)
    .fetch_optional(&pool)
    .await?;

    let product = product.ok_or_else(|| ApiError::not_found("Product not found"))?;
    let mut details = load_details(&pool, vec![product]).await?;
    let detail = details
        .pop()
        .ok_or_else(|| ApiError::internal_server_error("Failed to load product details"))?;

    Ok(ApiResponse::success(detail))
}

/// POST /api/:store_id/products - product and its image set are inserted
/// in one transaction
pub async fn create(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Product> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let mut tx = pool.begin().await?;

    let product: Product = sqlx::query_as(&format!(
        "INSERT INTO products (id, store_id, category_id, size_id, color_id, name, price, \
         is_featured, is_archived) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(store.id)
    .bind(body.category_id)
    .bind(body.size_id)
    .bind(body.color_id)
    .bind(&body.name)
    .bind(body.price)
    .bind(body.is_featured)
    .bind(body.is_archived)
    .fetch_one(&mut *tx)
    .await?;

    insert_images(&mut tx, product.id, &body.images).await?;

    tx.commit().await?;

    Ok(ApiResponse::success(product))
}

/// PATCH /api/:store_id/products/:product_id - scalar update plus wholesale
/// image replacement, atomically: a concurrent reader never observes the
/// product with zero images
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, product_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Product> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let mut tx = pool.begin().await?;

    let product: Option<Product> = sqlx::query_as(&format!(
        "UPDATE products SET name = $1, price = $2, category_id = $3, size_id = $4, \
         color_id = $5, is_featured = $6, is_archived = $7, updated_at = now() \
         WHERE id = $8 AND store_id = $9 RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&body.name)
    .bind(body.price)
    .bind(body.category_id)
    .bind(body.size_id)
    .bind(body.color_id)
    .bind(body.is_featured)
    .bind(body.is_archived)
    .bind(product_id)
    .bind(store.id)
    .fetch_optional(&mut *tx)
    .await?;

    let product = product.ok_or_else(|| ApiError::not_found("Product not found"))?;

    sqlx::query("DELETE FROM product_images WHERE product_id = $1")
        .bind(product.id)
        .execute(&mut *tx)
        .await?;

    insert_images(&mut tx, product.id, &body.images).await?;

    tx.commit().await?;

    Ok(ApiResponse::success(product))
}

/// DELETE /api/:store_id/products/:product_id - image rows cascade with
/// the product
pub async fn delete(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, product_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Product> {
    let pool = DatabaseManager::pool().await?;

    let product: Option<Product> = sqlx::query_as(&format!(
        "DELETE FROM products WHERE id = $1 AND store_id = $2 RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(product_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let product = product.ok_or_else(|| ApiError::not_found("Product not found"))?;
    Ok(ApiResponse::success(product))
}

async fn insert_images(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    product_id: Uuid,
    images: &[ImagePayload],
) -> Result<(), ApiError> {
    for image in images {
        sqlx::query("INSERT INTO product_images (id, product_id, url) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(product_id)
            .bind(&image.url)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Attach images and referenced category/size/color to product rows
async fn load_details(
    pool: &PgPool,
    products: Vec<Product>,
) -> Result<Vec<ProductDetail>, ApiError> {
    if products.is_empty() {
        return Ok(vec![]);
    }

    let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
    let images: Vec<ProductImage> = sqlx::query_as(&format!(
        "SELECT {IMAGE_COLUMNS} FROM product_images WHERE product_id = ANY($1) \
         ORDER BY created_at"
    ))
    .bind(&product_ids)
    .fetch_all(pool)
    .await?;

    let mut images_by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
    for image in images {
        images_by_product.entry(image.product_id).or_default().push(image);
    }

    let categories = fetch_by_ids::<Category>(
        pool,
        "id, store_id, billboard_id, name, created_at, updated_at",
        "categories",
        products.iter().map(|p| p.category_id).collect(),
    )
    .await?;
    let sizes = fetch_by_ids::<Size>(
        pool,
        "id, store_id, name, value, created_at, updated_at",
        "sizes",
        products.iter().map(|p| p.size_id).collect(),
    )
    .await?;
    let colors = fetch_by_ids::<Color>(
        pool,
        "id, store_id, name, value, created_at, updated_at",
        "colors",
        products.iter().map(|p| p.color_id).collect(),
    )
    .await?;

    products
        .into_iter()
        .map(|product| {
            let category = categories
                .get(&product.category_id)
                .cloned()
                .ok_or_else(|| ApiError::internal_server_error("Product references a missing category"))?;
            let size = sizes
                .get(&product.size_id)
                .cloned()
                .ok_or_else(|| ApiError::internal_server_error("Product references a missing size"))?;
            let color = colors
                .get(&product.color_id)
                .cloned()
                .ok_or_else(|| ApiError::internal_server_error("Product references a missing color"))?;

            Ok(ProductDetail {
                images: images_by_product.remove(&product.id).unwrap_or_default(),
                category,
                size,
                color,
                product,
            })
        })
        .collect()
}

trait HasId {
    fn row_id(&self) -> Uuid;
}

impl HasId for Category {
    fn row_id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Size {
    fn row_id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Color {
    fn row_id(&self) -> Uuid {
        self.id
    }
}

async fn fetch_by_ids<T>(
    pool: &PgPool,
    columns: &str,
    table: &str,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, T>, ApiError>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + HasId + Send + Unpin,
{
    let rows: Vec<T> = sqlx::query_as(&format!(
        "SELECT {columns} FROM {table} WHERE id = ANY($1)"
    ))
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| (row.row_id(), row)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_filter_is_tri_state() {
        assert_eq!(featured_filter(Some("true")), Some(true));
        assert_eq!(featured_filter(Some("false")), Some(false));
        assert_eq!(featured_filter(Some("yes")), None);
        assert_eq!(featured_filter(None), None);
    }
}

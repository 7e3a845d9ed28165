use axum::{
    extract::{Extension, Path},
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, CurrentStore};
use crate::models::{Billboard, Category, CategoryDetail, CategoryPayload};

const CATEGORY_COLUMNS: &str = "id, store_id, billboard_id, name, created_at, updated_at";
const BILLBOARD_COLUMNS: &str = "id, store_id, label, image_url, created_at, updated_at";

/// The referenced billboard must exist and belong to the same store
async fn ensure_billboard_in_store(
    pool: &PgPool,
    billboard_id: Uuid,
    store_id: Uuid,
) -> Result<(), ApiError> {
    let exists: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM billboards WHERE id = $1 AND store_id = $2")
            .bind(billboard_id)
            .bind(store_id)
            .fetch_optional(pool)
            .await?;

    match exists {
        Some(_) => Ok(()),
        None => Err(ApiError::bad_request(
            "billboardId does not reference a billboard in this store",
        )),
    }
}

/// GET /api/:store_id/categories - public store-scoped listing
pub async fn list(Path(store_id): Path<Uuid>) -> ApiResult<Vec<Category>> {
    let pool = DatabaseManager::pool().await?;

    let categories: Vec<Category> = sqlx::query_as(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE store_id = $1 ORDER BY created_at DESC"
    ))
    .bind(store_id)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(categories))
}

/// GET /api/:store_id/categories/:category_id - public read by id,
/// including the referenced billboard
pub async fn get(Path((_store_id, category_id)): Path<(Uuid, Uuid)>) -> ApiResult<CategoryDetail> {
    let pool = DatabaseManager::pool().await?;

    let category: Option<Category> = sqlx::query_as(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
    ))
    .bind(category_id)
    .fetch_optional(&pool)
    .await?;

    let category = category.ok_or_else(|| ApiError::not_found("Category not found"))?;

    let billboard: Option<Billboard> = sqlx::query_as(&format!(
        "SELECT {BILLBOARD_COLUMNS} FROM billboards WHERE id = $1"
    ))
    .bind(category.billboard_id)
    .fetch_optional(&pool)
    .await?;

    Ok(ApiResponse::success(CategoryDetail { category, billboard }))
}

/// POST /api/:store_id/categories
pub async fn create(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Category> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    ensure_billboard_in_store(&pool, body.billboard_id, store.id).await?;

    let category: Category = sqlx::query_as(&format!(
        "INSERT INTO categories (id, store_id, billboard_id, name) VALUES ($1, $2, $3, $4) \
         RETURNING {CATEGORY_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(store.id)
    .bind(body.billboard_id)
    .bind(&body.name)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(category))
}

/// PATCH /api/:store_id/categories/:category_id
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, category_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Category> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    ensure_billboard_in_store(&pool, body.billboard_id, store.id).await?;

    let category: Option<Category> = sqlx::query_as(&format!(
        "UPDATE categories SET name = $1, billboard_id = $2, updated_at = now() \
         WHERE id = $3 AND store_id = $4 RETURNING {CATEGORY_COLUMNS}"
    ))
    .bind(&body.name)
    .bind(body.billboard_id)
    .bind(category_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let category = category.ok_or_else(|| ApiError::not_found("Category not found"))?;
    Ok(ApiResponse::success(category))
}

/// DELETE /api/:store_id/categories/:category_id - a category still
/// referenced by a product is rejected by the database
pub async fn delete(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, category_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Category> {
    let pool = DatabaseManager::pool().await?;

    let category: Option<Category> = sqlx::query_as(&format!(
        "DELETE FROM categories WHERE id = $1 AND store_id = $2 RETURNING {CATEGORY_COLUMNS}"
    ))
    .bind(category_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let category = category.ok_or_else(|| ApiError::not_found("Category not found"))?;
    Ok(ApiResponse::success(category))
}

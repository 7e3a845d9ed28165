use axum::{
    extract::{Extension, Path},
    Json,
};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, CurrentStore};
use crate::models::{Billboard, BillboardPayload};

const BILLBOARD_COLUMNS: &str = "id, store_id, label, image_url, created_at, updated_at";

/// GET /api/:store_id/billboards - public store-scoped listing
pub async fn list(Path(store_id): Path<Uuid>) -> ApiResult<Vec<Billboard>> {
    let pool = DatabaseManager::pool().await?;

    let billboards: Vec<Billboard> = sqlx::query_as(&format!(
        "SELECT {BILLBOARD_COLUMNS} FROM billboards WHERE store_id = $1 ORDER BY created_at DESC"
    ))
    .bind(store_id)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(billboards))
}

/// GET /api/:store_id/billboards/:billboard_id - public read by id
/// (no store-scope filter; reads are not identity-gated)
pub async fn get(Path((_store_id, billboard_id)): Path<(Uuid, Uuid)>) -> ApiResult<Billboard> {
    let pool = DatabaseManager::pool().await?;

    let billboard: Option<Billboard> = sqlx::query_as(&format!(
        "SELECT {BILLBOARD_COLUMNS} FROM billboards WHERE id = $1"
    ))
    .bind(billboard_id)
    .fetch_optional(&pool)
    .await?;

    let billboard = billboard.ok_or_else(|| ApiError::not_found("Billboard not found"))?;
    Ok(ApiResponse::success(billboard))
}

/// POST /api/:store_id/billboards
pub async fn create(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<BillboardPayload>,
) -> ApiResult<Billboard> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let billboard: Billboard = sqlx::query_as(&format!(
        "INSERT INTO billboards (id, store_id, label, image_url) VALUES ($1, $2, $3, $4) \
         RETURNING {BILLBOARD_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(store.id)
    .bind(&body.label)
    .bind(&body.image_url)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(billboard))
}

/// PATCH /api/:store_id/billboards/:billboard_id
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, billboard_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<BillboardPayload>,
) -> ApiResult<Billboard> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let billboard: Option<Billboard> = sqlx::query_as(&format!(
        "UPDATE billboards SET label = $1, image_url = $2, updated_at = now() \
         WHERE id = $3 AND store_id = $4 RETURNING {BILLBOARD_COLUMNS}"
    ))
    .bind(&body.label)
    .bind(&body.image_url)
    .bind(billboard_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let billboard = billboard.ok_or_else(|| ApiError::not_found("Billboard not found"))?;
    Ok(ApiResponse::success(billboard))
}

/// DELETE /api/:store_id/billboards/:billboard_id - a billboard still
/// referenced by a category is rejected by the database and surfaces as a
/// generic failure
pub async fn delete(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, billboard_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Billboard> {
    let pool = DatabaseManager::pool().await?;

    let billboard: Option<Billboard> = sqlx::query_as(&format!(
        "DELETE FROM billboards WHERE id = $1 AND store_id = $2 RETURNING {BILLBOARD_COLUMNS}"
    ))
    .bind(billboard_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let billboard = billboard.ok_or_else(|| ApiError::not_found("Billboard not found"))?;
    Ok(ApiResponse::success(billboard))
}

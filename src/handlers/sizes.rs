use axum::{
    extract::{Extension, Path},
    Json,
};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, CurrentStore};
use crate::models::{Size, SizePayload};

const SIZE_COLUMNS: &str = "id, store_id, name, value, created_at, updated_at";

/// GET /api/:store_id/sizes - public store-scoped listing
pub async fn list(Path(store_id): Path<Uuid>) -> ApiResult<Vec<Size>> {
    let pool = DatabaseManager::pool().await?;

    let sizes: Vec<Size> = sqlx::query_as(&format!(
        "SELECT {SIZE_COLUMNS} FROM sizes WHERE store_id = $1 ORDER BY created_at DESC"
    ))
    .bind(store_id)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(sizes))
}

/// GET /api/:store_id/sizes/:size_id - public read by id
pub async fn get(Path((_store_id, size_id)): Path<(Uuid, Uuid)>) -> ApiResult<Size> {
    let pool = DatabaseManager::pool().await?;

    let size: Option<Size> =
        sqlx::query_as(&format!("SELECT {SIZE_COLUMNS} FROM sizes WHERE id = $1"))
            .bind(size_id)
            .fetch_optional(&pool)
            .await?;

    let size = size.ok_or_else(|| ApiError::not_found("Size not found"))?;
    Ok(ApiResponse::success(size))
}

/// POST /api/:store_id/sizes
pub async fn create(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<SizePayload>,
) -> ApiResult<Size> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let size: Size = sqlx::query_as(&format!(
        "INSERT INTO sizes (id, store_id, name, value) VALUES ($1, $2, $3, $4) \
         RETURNING {SIZE_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(store.id)
    .bind(&body.name)
    .bind(&body.value)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(size))
}

/// PATCH /api/:store_id/sizes/:size_id
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, size_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SizePayload>,
) -> ApiResult<Size> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let size: Option<Size> = sqlx::query_as(&format!(
        "UPDATE sizes SET name = $1, value = $2, updated_at = now() \
         WHERE id = $3 AND store_id = $4 RETURNING {SIZE_COLUMNS}"
    ))
    .bind(&body.name)
    .bind(&body.value)
    .bind(size_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let size = size.ok_or_else(|| ApiError::not_found("Size not found"))?;
    Ok(ApiResponse::success(size))
}

/// DELETE /api/:store_id/sizes/:size_id
pub async fn delete(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, size_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Size> {
    let pool = DatabaseManager::pool().await?;

    let size: Option<Size> = sqlx::query_as(&format!(
        "DELETE FROM sizes WHERE id = $1 AND store_id = $2 RETURNING {SIZE_COLUMNS}"
    ))
    .bind(size_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let size = size.ok_or_else(|| ApiError::not_found("Size not found"))?;
    Ok(ApiResponse::success(size))
}

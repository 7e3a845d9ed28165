use axum::{
    extract::{Extension, Path},
    Json,
};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, CurrentStore};
use crate::models::{Color, ColorPayload};

const COLOR_COLUMNS: &str = "id, store_id, name, value, created_at, updated_at";

/// GET /api/:store_id/colors - public store-scoped listing
pub async fn list(Path(store_id): Path<Uuid>) -> ApiResult<Vec<Color>> {
    let pool = DatabaseManager::pool().await?;

    let colors: Vec<Color> = sqlx::query_as(&format!(
        "SELECT {COLOR_COLUMNS} FROM colors WHERE store_id = $1 ORDER BY created_at DESC"
    ))
    .bind(store_id)
    .fetch_all(&pool)
    .await?;

    Ok(ApiResponse::success(colors))
}

/// GET /api/:store_id/colors/:color_id - public read by id
pub async fn get(Path((_store_id, color_id)): Path<(Uuid, Uuid)>) -> ApiResult<Color> {
    let pool = DatabaseManager::pool().await?;

    let color: Option<Color> =
        sqlx::query_as(&format!("SELECT {COLOR_COLUMNS} FROM colors WHERE id = $1"))
            .bind(color_id)
            .fetch_optional(&pool)
            .await?;

    let color = color.ok_or_else(|| ApiError::not_found("Color not found"))?;
    Ok(ApiResponse::success(color))
}

/// POST /api/:store_id/colors
pub async fn create(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<ColorPayload>,
) -> ApiResult<Color> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let color: Color = sqlx::query_as(&format!(
        "INSERT INTO colors (id, store_id, name, value) VALUES ($1, $2, $3, $4) \
         RETURNING {COLOR_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(store.id)
    .bind(&body.name)
    .bind(&body.value)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(color))
}

/// PATCH /api/:store_id/colors/:color_id
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, color_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ColorPayload>,
) -> ApiResult<Color> {
    let body = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let color: Option<Color> = sqlx::query_as(&format!(
        "UPDATE colors SET name = $1, value = $2, updated_at = now() \
         WHERE id = $3 AND store_id = $4 RETURNING {COLOR_COLUMNS}"
    ))
    .bind(&body.name)
    .bind(&body.value)
    .bind(color_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let color = color.ok_or_else(|| ApiError::not_found("Color not found"))?;
    Ok(ApiResponse::success(color))
}

/// DELETE /api/:store_id/colors/:color_id
pub async fn delete(
    Extension(store): Extension<CurrentStore>,
    Path((_store_id, color_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Color> {
    let pool = DatabaseManager::pool().await?;

    let color: Option<Color> = sqlx::query_as(&format!(
        "DELETE FROM colors WHERE id = $1 AND store_id = $2 RETURNING {COLOR_COLUMNS}"
    ))
    .bind(color_id)
    .bind(store.id)
    .fetch_optional(&pool)
    .await?;

    let color = color.ok_or_else(|| ApiError::not_found("Color not found"))?;
    Ok(ApiResponse::success(color))
}

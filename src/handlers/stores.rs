use axum::{extract::Extension, Json};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, CurrentStore};
use crate::models::{Store, StorePayload};
use crate::session::SetupDialogs;

const STORE_COLUMNS: &str = "id, name, user_id, created_at, updated_at";

/// POST /api/stores - create a store owned by the acting identity
pub async fn create(
    Extension(auth_user): Extension<AuthUser>,
    Extension(setup): Extension<SetupDialogs>,
    Json(payload): Json<StorePayload>,
) -> ApiResult<Store> {
    let name = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let store: Store = sqlx::query_as(&format!(
        "INSERT INTO stores (id, name, user_id) VALUES ($1, $2, $3) RETURNING {STORE_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&auth_user.user_id)
    .fetch_one(&pool)
    .await?;

    // The caller now has at least one store; their first-run dialog can go away
    setup.close(&auth_user.user_id);

    Ok(ApiResponse::success(store))
}

/// GET /api/stores - list stores owned by the acting identity
pub async fn list(
    Extension(auth_user): Extension<AuthUser>,
    Extension(setup): Extension<SetupDialogs>,
) -> ApiResult<Vec<Store>> {
    let pool = DatabaseManager::pool().await?;

    let stores: Vec<Store> = sqlx::query_as(&format!(
        "SELECT {STORE_COLUMNS} FROM stores WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(&auth_user.user_id)
    .fetch_all(&pool)
    .await?;

    if stores.is_empty() {
        setup.open(&auth_user.user_id);
    }

    Ok(ApiResponse::success(stores))
}

/// PATCH /api/stores/:store_id - rename (ownership validated by middleware)
pub async fn update(
    Extension(store): Extension<CurrentStore>,
    Json(payload): Json<StorePayload>,
) -> ApiResult<Store> {
    let name = payload.validate()?;
    let pool = DatabaseManager::pool().await?;

    let store: Store = sqlx::query_as(&format!(
        "UPDATE stores SET name = $1, updated_at = now() WHERE id = $2 RETURNING {STORE_COLUMNS}"
    ))
    .bind(&name)
    .bind(store.id)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(store))
}

/// DELETE /api/stores/:store_id - physical delete; rejected by the database
/// while scoped entities still reference the store
pub async fn delete(Extension(store): Extension<CurrentStore>) -> ApiResult<Store> {
    let pool = DatabaseManager::pool().await?;

    let store: Store = sqlx::query_as(&format!(
        "DELETE FROM stores WHERE id = $1 RETURNING {STORE_COLUMNS}"
    ))
    .bind(store.id)
    .fetch_one(&pool)
    .await?;

    Ok(ApiResponse::success(store))
}

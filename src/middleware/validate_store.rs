use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;

use super::auth::AuthUser;

/// Store validated as owned by the acting identity, injected by middleware
#[derive(Clone, Debug)]
pub struct CurrentStore {
    pub id: Uuid,
    pub name: String,
}

/// Ownership guard applied uniformly to every store-scoped mutation route.
/// Authorizes iff a store row exists whose id matches the path and whose
/// owner matches the acting identity. A missing identity is 401; an
/// identity that does not own the store is 403, and the handler never runs.
pub async fn validate_store_middleware(
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before store validation"))?;

    let store_id = params
        .get("store_id")
        .ok_or_else(|| ApiError::bad_request("Store id is required"))?;
    let store_id = Uuid::parse_str(store_id)
        .map_err(|_| ApiError::bad_request("Store id must be a valid UUID"))?;

    let pool = DatabaseManager::pool().await?;

    let row: Option<(Uuid, String)> =
        sqlx::query_as("SELECT id, name FROM stores WHERE id = $1 AND user_id = $2")
            .bind(store_id)
            .bind(&auth_user.user_id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Database error validating store ownership: {}", e);
                ApiError::internal_server_error("Failed to validate store ownership")
            })?;

    let (id, name) = row.ok_or_else(|| {
        tracing::warn!(
            "Store ownership check failed: store '{}' not owned by '{}'",
            store_id,
            auth_user.user_id
        );
        ApiError::forbidden("Store not found for this user")
    })?;

    request.extensions_mut().insert(CurrentStore { id, name });

    Ok(next.run(request).await)
}

use axum::{
    middleware,
    routing::{get, patch, post},
    Extension, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{billboards, categories, colors, products, sizes, stores};
use crate::middleware::{jwt_auth_middleware, validate_store_middleware};
use crate::session::SetupDialogs;

pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Store management (identity-gated)
        .merge(store_routes())
        // Public catalog reads
        .merge(catalog_read_routes())
        // Store-scoped mutations (identity + ownership gated)
        .merge(catalog_write_routes())
        // Per-identity first-run dialog state
        .layer(Extension(SetupDialogs::new()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn store_routes() -> Router {
    let personal = Router::new()
        .route("/api/stores", post(stores::create).get(stores::list))
        .route_layer(middleware::from_fn(jwt_auth_middleware));

    let owned = Router::new()
        .route(
            "/api/stores/:store_id",
            patch(stores::update).delete(stores::delete),
        )
        .route_layer(middleware::from_fn(validate_store_middleware))
        .route_layer(middleware::from_fn(jwt_auth_middleware));

    personal.merge(owned)
}

fn catalog_read_routes() -> Router {
    Router::new()
        .route("/api/:store_id/billboards", get(billboards::list))
        .route("/api/:store_id/billboards/:billboard_id", get(billboards::get))
        .route("/api/:store_id/categories", get(categories::list))
        .route("/api/:store_id/categories/:category_id", get(categories::get))
        .route("/api/:store_id/sizes", get(sizes::list))
        .route("/api/:store_id/sizes/:size_id", get(sizes::get))
        .route("/api/:store_id/colors", get(colors::list))
        .route("/api/:store_id/colors/:color_id", get(colors::get))
        .route("/api/:store_id/products", get(products::list))
        .route("/api/:store_id/products/:product_id", get(products::get))
}

fn catalog_write_routes() -> Router {
    Router::new()
        .route("/api/:store_id/billboards", post(billboards::create))
        .route(
            "/api/:store_id/billboards/:billboard_id",
            patch(billboards::update).delete(billboards::delete),
        )
        .route("/api/:store_id/categories", post(categories::create))
        .route(
            "/api/:store_id/categories/:category_id",
            patch(categories::update).delete(categories::delete),
        )
        .route("/api/:store_id/sizes", post(sizes::create))
        .route(
            "/api/:store_id/sizes/:size_id",
            patch(sizes::update).delete(sizes::delete),
        )
        .route("/api/:store_id/colors", post(colors::create))
        .route(
            "/api/:store_id/colors/:color_id",
            patch(colors::update).delete(colors::delete),
        )
        .route("/api/:store_id/products", post(products::create))
        .route(
            "/api/:store_id/products/:product_id",
            patch(products::update).delete(products::delete),
        )
        // Ownership guard runs after JWT auth, before any handler
        .route_layer(middleware::from_fn(validate_store_middleware))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Store Admin API",
            "version": version,
            "description": "Multi-store e-commerce administration API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "stores": "/api/stores (protected - store management)",
                "billboards": "/api/:store_id/billboards[/:id] (reads public, writes protected)",
                "categories": "/api/:store_id/categories[/:id] (reads public, writes protected)",
                "sizes": "/api/:store_id/sizes[/:id] (reads public, writes protected)",
                "colors": "/api/:store_id/colors[/:id] (reads public, writes protected)",
                "products": "/api/:store_id/products[/:id] (reads public, writes protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}

use store_admin_api::{config, database::manager::DatabaseManager, routes};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Store Admin API in {:?} mode", config.environment);

    if let Err(e) = DatabaseManager::migrate().await {
        tracing::error!("Database migration failed: {}", e);
        std::process::exit(1);
    }

    let app = routes::app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("STORE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Store Admin API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

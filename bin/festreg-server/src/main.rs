//! FestReg Registration Server
//!
//! Production server for the festival registration intake API:
//! - `POST /register` — submit a registration
//! - `GET /health` — liveness check
//! - `/swagger-ui` — OpenAPI documentation
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FESTREG_API_PORT` | `8080` | HTTP API port |
//! | `FESTREG_DATABASE_URL` | `mysql://root@localhost:3306/fest_registration` | MySQL connection URL |
//! | `FESTREG_DB_MAX_CONNECTIONS` | `5` | Connection pool size |
//! | `FESTREG_CORS_ORIGINS` | `*` | `*` or comma-separated origin allow-list |
//! | `RUST_LOG` | `info` | Log level |

use anyhow::Result;
use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use festreg::api::{registrations_router, RegistrationApiDoc, RegistrationsState};
use festreg::repository::MySqlRegistrationRepository;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting FestReg Registration Server");

    // Configuration from environment
    let api_port: u16 = env_or_parse("FESTREG_API_PORT", 8080);
    let database_url = env_or(
        "FESTREG_DATABASE_URL",
        "mysql://root@localhost:3306/fest_registration",
    );
    let max_connections: u32 = env_or_parse("FESTREG_DB_MAX_CONNECTIONS", 5);
    let cors_origins = env_or("FESTREG_CORS_ORIGINS", "*");

    // Connect to MySQL
    info!("Connecting to MySQL");
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    let registration_repo = Arc::new(MySqlRegistrationRepository::new(pool));
    registration_repo.init_schema().await?;
    info!("Database schema ready");

    let registrations_state = RegistrationsState { registration_repo };

    let cors = if cors_origins.trim() == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|o| o.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .nest("/register", registrations_router(registrations_state))
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", RegistrationApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let api_addr = format!("0.0.0.0:{}", api_port);
    info!("API server listening on http://{}", api_addr);

    let listener = TcpListener::bind(&api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FestReg Registration Server shutdown complete");
    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

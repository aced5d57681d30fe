use std::{net::SocketAddr, process, sync::Arc};

use axum::http::{HeaderValue, Method};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use canteen_survey::db;
use canteen_survey::routes::{api_router, START_TIME};
use canteen_survey::state::AppState;
use canteen_survey::storage::{memory::MemoryVoteStore, mongo::MongoVoteStore};
use canteen_survey::utils::clock::{Clock, SystemClock};
use canteen_survey::utils::token::{JwtTokenVerifier, TokenVerifier};

#[tokio::main]
async fn main() {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    Lazy::force(&START_TIME);

    let verifier: Arc<dyn TokenVerifier> = match JwtTokenVerifier::from_env() {
        Ok(v) => Arc::new(v),
        Err(e) => {
            error!("Failed to initialize token verifier: {}", e);
            process::exit(1);
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let app = match std::env::var("STORAGE").as_deref() {
        Ok("memory") => {
            info!("Using in-memory vote store");
            api_router(AppState::new(MemoryVoteStore::new(), verifier, clock))
        }
        _ => {
            let database = match db::connection::init_db().await {
                Ok(db) => db,
                Err(e) => {
                    error!("Failed to initialize database: {}", e);
                    process::exit(1);
                }
            };
            let store = match MongoVoteStore::new(&database).await {
                Ok(store) => store,
                Err(e) => {
                    error!("Failed to prepare votes collection: {}", e);
                    process::exit(1);
                }
            };
            api_router(AppState::new(store, verifier, clock))
        }
    };

    let app = app.layer(cors_layer());

    let server_addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| {
        info!("SERVER_ADDR not set, using default 0.0.0.0:8000");
        "0.0.0.0:8000".to_string()
    });

    let addr: SocketAddr = match server_addr.parse() {
        Ok(addr) => addr,
        Err(_) => {
            error!("Failed to parse SERVER_ADDR: {}", server_addr);
            process::exit(1);
        }
    };

    info!("Server running at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        process::exit(1);
    }
}

fn cors_layer() -> CorsLayer {
    let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| {
        error!("CORS_ORIGIN environment variable not set");
        process::exit(1);
    });

    let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        error!("Failed to parse CORS origin: {}", cors_origin);
        process::exit(1);
    });

    info!("CORS origin: {}", cors_origin);

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

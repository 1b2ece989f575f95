use std::net::SocketAddr;

use paramd::{api, database, route, SCHEMA_PATH};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = database::initialize_database().await {
        error!("Failed to initialize database: {}", e);
        std::process::exit(1);
    }

    // Startup always reloads the schema file, discarding prior edits
    let schema_path = SCHEMA_PATH.as_path();
    if schema_path.exists() {
        if let Err(e) = database::queries::configuration::load_schema_to_db(schema_path).await {
            error!("Failed to load schema: {:#}", e);
            std::process::exit(1);
        }
    } else {
        warn!("Schema file not found: {}", schema_path.display());
    }

    let port = api::app::get_http_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let router = route::create_rest_router();

    info!("Starting API server on {}", addr);
    match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                error!("API server error: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to bind to port {}: {}", port, e);
        }
    }

    database::cleanup_database().await;
    info!("Application shutdown complete");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

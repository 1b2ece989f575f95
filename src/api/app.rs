use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Parameter Management System API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn get_http_port() -> u16 {
    // Get the port from the environment variable or default to 1430
    std::env::var("PORT")
        .unwrap_or_else(|_| "1430".to_string())
        .parse()
        .unwrap_or(1430)
}

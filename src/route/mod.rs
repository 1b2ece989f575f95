mod parameters;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api;

pub fn create_rest_router() -> Router {
    Router::new()
        .route("/", get(api::app::service_info))
        .merge(parameters::parameter_routes())
        .layer(CorsLayer::permissive())
}

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::api;

pub fn parameter_routes() -> Router {
    Router::new()
        .route("/api/parameters/", get(api::parameters::get_parameters))
        .route("/api/parameters/update", put(api::parameters::update_param))
        .route(
            "/api/parameters/sync-schema",
            post(api::parameters::sync_schema),
        )
        .route("/api/parameters/{group_id}", post(api::parameters::add_param))
        .route(
            "/api/parameters/{group_id}/{parameter_key}",
            delete(api::parameters::delete_param),
        )
}

use axum::{debug_handler, extract::Path, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::{ApiResult, AppError};
use crate::database::models::{Configuration, Parameter};
use crate::database::queries::configuration::{
    add_parameter, delete_parameter, get_configuration, load_schema_to_db, update_parameter,
    GLOBAL_CONFIG_KEY,
};
use crate::SCHEMA_PATH;

#[derive(Debug, Deserialize)]
pub struct UpdateParameterRequest {
    pub group_id: String,
    pub parameter_key: String,
    pub new_value: Value,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Get the full configuration document
#[debug_handler]
pub async fn get_parameters() -> ApiResult<Json<Configuration>> {
    match get_configuration(GLOBAL_CONFIG_KEY).await {
        Ok(Some(config)) => Ok((StatusCode::OK, Json(config))),
        Ok(None) => Err((StatusCode::NOT_FOUND, AppError::not_found("Configuration"))),
        Err(e) => {
            tracing::error!("Error getting configuration: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::internal_error("Failed to get configuration"),
            ))
        }
    }
}

// Update a parameter value
#[debug_handler]
pub async fn update_param(
    Json(request): Json<UpdateParameterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    match update_parameter(
        &request.group_id,
        &request.parameter_key,
        request.new_value,
    )
    .await
    {
        Ok(true) => Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Parameter updated successfully".to_string(),
            }),
        )),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            AppError::not_found(&format!(
                "Parameter {} in group {}",
                request.parameter_key, request.group_id
            )),
        )),
        Err(e) => {
            tracing::error!("Error updating parameter: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::internal_error("Failed to update parameter"),
            ))
        }
    }
}

// Delete a parameter
#[debug_handler]
pub async fn delete_param(
    Path((group_id, parameter_key)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    match delete_parameter(&group_id, &parameter_key).await {
        Ok(true) => Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Parameter deleted successfully".to_string(),
            }),
        )),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            AppError::not_found(&format!(
                "Parameter {} in group {}",
                parameter_key, group_id
            )),
        )),
        Err(e) => {
            tracing::error!("Error deleting parameter: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::internal_error("Failed to delete parameter"),
            ))
        }
    }
}

// Add a new parameter to a group
#[debug_handler]
pub async fn add_param(
    Path(group_id): Path<String>,
    Json(parameter): Json<Parameter>,
) -> ApiResult<Json<MessageResponse>> {
    match add_parameter(&group_id, parameter).await {
        Ok(true) => Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Parameter added successfully".to_string(),
            }),
        )),
        Ok(false) => Err((
            StatusCode::BAD_REQUEST,
            AppError::invalid_input(format!(
                "Failed to add parameter. Group {} not found or parameter already exists.",
                group_id
            )),
        )),
        Err(e) => {
            tracing::error!("Error adding parameter: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::internal_error("Failed to add parameter"),
            ))
        }
    }
}

// Re-synchronize the on-disk schema file into the store
#[debug_handler]
pub async fn sync_schema() -> ApiResult<Json<MessageResponse>> {
    match load_schema_to_db(SCHEMA_PATH.as_path()).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(MessageResponse {
                message: "Schema synchronized successfully".to_string(),
            }),
        )),
        Err(e) => {
            tracing::error!("Error synchronizing schema: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                AppError::internal_error(format!("{:#}", e)),
            ))
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    #[schema(example = "education[0].degree")]
    pub field: String,
    #[schema(example = "Degree is required")]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Internal Server Error")]
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorResponse>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, Some("Validation failed".to_string())),
            AppError::ProfileAlreadyExists => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, Some(self.to_string())),
            _ => {
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = match message {
            Some(msg) => msg,
            None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };

        let fields = self
            .violations()
            .iter()
            .map(|v| FieldErrorResponse {
                field: v.field.clone(),
                message: v.message.clone(),
            })
            .collect();

        let body = Json(ErrorResponse { error: message, fields });

        (status, body).into_response()
    }
}

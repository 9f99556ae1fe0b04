//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::{member_service, pipeline_service, step_service};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    DatabaseError(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<pipeline_service::PipelineError> for ApiError {
    fn from(err: pipeline_service::PipelineError) -> Self {
        use pipeline_service::PipelineError;
        match err {
            PipelineError::NotFound(id) => {
                ApiError::NotFound(format!("Pipeline {} not found", id))
            }
            PipelineError::ValidationError(msg) => ApiError::BadRequest(msg),
            PipelineError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

impl From<step_service::StepError> for ApiError {
    fn from(err: step_service::StepError) -> Self {
        use step_service::StepError;
        match err {
            StepError::NotFound(id) => ApiError::NotFound(format!("Step {} not found", id)),
            StepError::PipelineNotFound(id) => {
                ApiError::NotFound(format!("Pipeline {} not found", id))
            }
            StepError::ValidationError(msg) => ApiError::BadRequest(msg),
            StepError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

impl From<member_service::MemberError> for ApiError {
    fn from(err: member_service::MemberError) -> Self {
        use member_service::MemberError;
        match err {
            MemberError::ValidationError(msg) => ApiError::BadRequest(msg),
            MemberError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

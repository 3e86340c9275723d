use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::messages;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::response::reply;

/// Errors surfaced by handlers. Routine store outcomes never come through
/// here; they are mapped to responses by the handlers themselves.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Metrics label for the way a request failed.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) | ApiError::Service(ServiceError::Validation(_)) => "invalid",
            ApiError::Service(ServiceError::Internal(_)) => "internal_error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) | ApiError::Service(ServiceError::Validation(detail)) => {
                warn!(%detail, "rejected request");
                reply(
                    StatusCode::BAD_REQUEST,
                    messages::DATA_FORMAT,
                    Some(serde_json::json!({ "error": detail })),
                )
            }
            ApiError::Service(ServiceError::Internal(msg)) => {
                error!(error = %msg, "internal store fault");
                reply::<()>(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR, None)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: Response) -> anyhow::Result<Value> {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn internal_fault_is_500_without_result() -> anyhow::Result<()> {
        let err = ApiError::Service(ServiceError::internal("location identifier space exhausted"));
        assert_eq!(err.outcome(), "internal_error");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await?,
            json!({"statusCode": 500, "message": "Internal server error", "result": null})
        );
        Ok(())
    }

    #[tokio::test]
    async fn validation_is_400_with_detail() -> anyhow::Result<()> {
        let err = ApiError::Service(ServiceError::Validation("firstName required".into()));
        assert_eq!(err.outcome(), "invalid");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await?;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], messages::DATA_FORMAT);
        assert_eq!(body["result"]["error"], "firstName required");

        let resp = ApiError::BadRequest("missing field".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await?["result"]["error"], "missing field");
        Ok(())
    }
}

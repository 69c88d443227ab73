//! Error payloads returned by the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use super::metrics::record_error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ProjectNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label under which the error is counted in `hub_errors_total`.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ProjectNotFound => "project_not_found",
            ApiError::RouteNotFound => "route_not_found",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        record_error(self.kind());
        let message = match &self {
            ApiError::Internal(err) => {
                error!("Unhandled error while serving request: {:?}", err);
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status() {
        assert_eq!(ApiError::ProjectNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn every_error_is_counted_under_its_kind() {
        use crate::server::metrics::ERRORS_TOTAL;

        let errors = [
            ApiError::ProjectNotFound,
            ApiError::RouteNotFound,
            ApiError::Internal(anyhow::anyhow!("boom")),
        ];
        for error in errors {
            let counter = ERRORS_TOTAL.with_label_values(&[error.kind()]);
            let before = counter.get();
            let _ = error.into_response();
            assert!(counter.get() > before);
        }
    }

    #[tokio::test]
    async fn internal_error_does_not_leak_details() {
        let response = ApiError::Internal(anyhow::anyhow!("db password is hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
    }
}

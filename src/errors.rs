use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Contract address and filter address are required")]
    MissingParameters,

    #[error("Failed to fetch {resource}")]
    Generation {
        resource: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn generation(resource: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AppError::Generation {
            resource,
            source: source.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::Generation { resource, source } => {
                tracing::error!(resource, error = ?source, "Mock data generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    body::Bytes,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::WeatherResource;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for the proxy endpoints
///
/// Every variant maps to exactly one HTTP response. Local failures use the
/// `{"error": ...}` shape; upstream errors are relayed unchanged.
#[derive(Debug)]
pub enum ApiError {
    /// Request method other than GET
    MethodNotAllowed(Method),
    /// `city` query parameter missing or empty
    MissingCity,
    /// No OpenWeatherMap API key in the configuration
    ApiKeyNotConfigured,
    /// Upstream answered with a non-success status
    Upstream { status: StatusCode, body: Bytes },
    /// Upstream unreachable or returned something that is not JSON
    Transport {
        resource: WeatherResource,
        source: anyhow::Error,
    },
}

impl ApiError {
    fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::MissingCity => "City parameter is required",
            ApiError::ApiKeyNotConfigured => "API key not configured",
            ApiError::Upstream { .. } => "Upstream error",
            ApiError::Transport { resource, .. } => resource.failure_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MethodNotAllowed(method) => {
                tracing::debug!("Rejected {} request", method);
                StatusCode::METHOD_NOT_ALLOWED
            }
            ApiError::MissingCity => StatusCode::BAD_REQUEST,
            ApiError::ApiKeyNotConfigured => {
                tracing::error!("OPENWEATHER_API_KEY is not configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Transport { resource, source } => {
                // The cause stays in the logs; the caller only sees the generic message
                tracing::error!("Error fetching {} data: {:#}", resource.path(), source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream { status, body } => {
                return (
                    *status,
                    [(header::CONTENT_TYPE, "application/json")],
                    body.clone(),
                )
                    .into_response();
            }
        };

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

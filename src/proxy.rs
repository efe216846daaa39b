use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::upstream::WeatherResource;

/// Forward one validated request upstream and relay the outcome
///
/// Runs after the request guard: checks the credential, performs the single
/// upstream call, then relays a success body with 200, relays an upstream
/// error unchanged, or converts a transport failure into a generic 500.
pub async fn relay(
    state: &AppState,
    resource: WeatherResource,
    city: &str,
) -> Result<Response, ApiError> {
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ApiError::ApiKeyNotConfigured)?;

    let result = state
        .upstream
        .fetch(resource, city, api_key)
        .await
        .map_err(|source| ApiError::Transport { resource, source })?;

    if !result.status.is_success() {
        tracing::warn!(
            "Upstream '{}' returned {} for city: {}",
            resource.path(),
            result.status,
            city
        );
        return Err(ApiError::Upstream {
            status: result.status,
            body: result.body,
        });
    }

    tracing::info!("Successfully fetched {} data for city: {}", resource.path(), city);
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        result.body,
    )
        .into_response())
}

use crate::error::{ApiError, ErrorResponse};
use crate::guard::ValidatedCity;
use crate::models::CityQuery;
use crate::proxy;
use crate::routes;
use crate::state::AppState;
use crate::upstream::WeatherResource;
use axum::{extract::State, response::Response};

/// GET /api/forecast handler - 5-day forecast in 3-hour intervals
#[utoipa::path(
    get,
    path = routes::FORECAST,
    params(CityQuery),
    responses(
        (status = 200, description = "Forecast as returned by OpenWeatherMap", body = serde_json::Value),
        (status = 400, description = "City parameter missing", body = ErrorResponse),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
        (status = 500, description = "API key not configured or upstream unreachable", body = ErrorResponse),
        (status = "default", description = "Upstream error relayed unchanged", body = serde_json::Value)
    ),
    tag = "weather"
)]
pub async fn forecast_handler(
    State(state): State<AppState>,
    ValidatedCity(city): ValidatedCity,
) -> Result<Response, ApiError> {
    proxy::relay(&state, WeatherResource::Forecast, &city).await
}

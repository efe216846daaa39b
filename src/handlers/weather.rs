use crate::error::{ApiError, ErrorResponse};
use crate::guard::ValidatedCity;
use crate::models::CityQuery;
use crate::proxy;
use crate::routes;
use crate::state::AppState;
use crate::upstream::WeatherResource;
use axum::{extract::State, response::Response};

/// GET /api/weather handler - Current conditions for a city
///
/// Forwards the query to OpenWeatherMap with the server-side API key and
/// metric units, then relays the upstream JSON.
#[utoipa::path(
    get,
    path = routes::WEATHER,
    params(CityQuery),
    responses(
        (status = 200, description = "Current weather as returned by OpenWeatherMap", body = serde_json::Value),
        (status = 400, description = "City parameter missing", body = ErrorResponse),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
        (status = 500, description = "API key not configured or upstream unreachable", body = ErrorResponse),
        (status = "default", description = "Upstream error relayed unchanged", body = serde_json::Value)
    ),
    tag = "weather"
)]
pub async fn current_weather_handler(
    State(state): State<AppState>,
    ValidatedCity(city): ValidatedCity,
) -> Result<Response, ApiError> {
    proxy::relay(&state, WeatherResource::CurrentWeather, &city).await
}

use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "weather-proxy API",
        version = "1.0.0",
        description = "Proxies OpenWeatherMap current weather and forecast queries, keeping the API key server-side"
    ),
    paths(
        handlers::health::health_handler,
        handlers::weather::current_weather_handler,
        handlers::forecast::forecast_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "weather", description = "OpenWeatherMap proxy operations")
    )
)]
pub struct ApiDoc;

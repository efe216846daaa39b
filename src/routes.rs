// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const WEATHER: &str = "/api/weather";
pub const FORECAST: &str = "/api/forecast";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";

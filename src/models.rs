use serde::Deserialize;

/// Query parameters accepted by the proxy endpoints
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// City name, e.g. `London` or `São Paulo`
    pub city: Option<String>,
}

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Method},
};

use crate::error::ApiError;

/// Inbound validation shared by the proxy endpoints
///
/// Rejects anything but GET with 405, then requires a non-empty `city`
/// query parameter (400). No network activity happens before both pass.
///
/// A repeated `city` is joined with `,` (`?city=London&city=GB` becomes
/// `London,GB`); empty values are dropped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCity(pub String);

impl<S> FromRequestParts<S> for ValidatedCity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if parts.method != Method::GET {
            return Err(ApiError::MethodNotAllowed(parts.method.clone()));
        }

        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| ApiError::MissingCity)?;

        let cities: Vec<String> = pairs
            .into_iter()
            .filter(|(key, value)| key == "city" && !value.is_empty())
            .map(|(_, value)| value)
            .collect();

        if cities.is_empty() {
            return Err(ApiError::MissingCity);
        }

        Ok(ValidatedCity(cities.join(",")))
    }
}

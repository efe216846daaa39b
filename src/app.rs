use axum::{
    body::Body,
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue, Request,
    },
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::Span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{current_weather_handler, forecast_handler, health_handler};
use crate::routes;
use crate::state::AppState;

/// Build the full application router
///
/// The proxy routes accept every method so that non-GET requests reach the
/// request guard and get the JSON 405 body. CORS headers are set on every
/// proxy response, including errors relayed from upstream.
pub fn build_router(state: AppState) -> Router {
    let proxy_routes = Router::new()
        .route(routes::WEATHER, any(current_weather_handler))
        .route(routes::FORECAST, any(forecast_handler))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ));

    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .merge(proxy_routes)
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Request span carrying the request id so log lines can be tied to responses
fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_proxy_responses_carry_cors_and_request_id() {
        let mock_server = MockServer::start().await;
        let app = setup_test_app(&mock_server.uri(), None);

        let response = send(app, "GET", "/api/weather").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["access-control-allow-methods"], "GET");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_upstream_error_relay_carries_cors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_raw(
                r#"{"cod":401,"message":"Invalid API key"}"#,
                "application/json",
            ))
            .mount(&mock_server)
            .await;

        let app = setup_test_app(&mock_server.uri(), Some("bad-key"));
        let response = send(app, "GET", "/api/forecast?city=London").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["access-control-allow-methods"], "GET");
    }

    #[tokio::test]
    async fn test_caller_request_id_is_echoed() {
        let mock_server = MockServer::start().await;
        let app = setup_test_app(&mock_server.uri(), None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/weather?city=London")
                    .header("x-request-id", "caller-supplied-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["x-request-id"], "caller-supplied-id");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_proxy_routes() {
        let mock_server = MockServer::start().await;
        let app = setup_test_app(&mock_server.uri(), None);

        let response = send(app, "GET", crate::routes::OPENAPI_JSON).await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(doc["paths"].get(crate::routes::WEATHER).is_some());
        assert!(doc["paths"].get(crate::routes::FORECAST).is_some());
        assert!(doc["paths"].get(crate::routes::HEALTH).is_some());
    }

    #[tokio::test]
    async fn test_health_has_no_cors_headers() {
        let mock_server = MockServer::start().await;
        let app = setup_test_app(&mock_server.uri(), None);

        let response = send(app, "GET", crate::routes::HEALTH).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key("access-control-allow-origin"));
    }
}

//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: country service over the in-memory store
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and response helpers
//! - `errors.rs`: problem responses
//! - `openapi.rs`: OpenAPI document (development only)

use std::sync::Arc;
use std::time::Duration;

use axum::{http::Response, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::Span;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a freshly seeded catalog (used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_services(config, Arc::new(services::CountryService::in_memory()))
}

/// Build the router around an existing service (tests share state this way).
pub fn build_app_with_services(config: &ApiConfig, services: Arc<services::CountryService>) -> Router {
    let mut app = routes::router();

    if config.environment.is_development() {
        tracing::info!(path = openapi::OPENAPI_PATH, "serving OpenAPI document");
        app = app.route(openapi::OPENAPI_PATH, get(openapi::openapi_json));
    }

    with_layers(app, services)
}

/// Request logging, panic-to-problem conversion and service injection.
fn with_layers(router: Router, services: Arc<services::CountryService>) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(middleware::make_span)
                    .on_request(())
                    .on_response(|res: &Response<_>, latency: Duration, span: &Span| {
                        middleware::record_response(res.status(), latency, span)
                    })
                    .on_failure(()),
            )
            .layer(CatchPanicLayer::custom(errors::panic_to_problem))
            .layer(Extension(services)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, headers, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn lookup_example_from_catalog() {
        let app = build_app(&ApiConfig::default());
        let (status, _, body) = send(app, get("/countries/fr")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"alpha2Code": "FR", "name": "France", "region": "Europe"})
        );
    }

    #[tokio::test]
    async fn bad_code_is_a_problem_response() {
        let app = build_app(&ApiConfig::default());
        let (status, headers, body) = send(app, get("/api/countries/fra")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            headers[header::CONTENT_TYPE].to_str().unwrap(),
            errors::PROBLEM_CONTENT_TYPE
        );
        assert_eq!(body["title"], "Bad request");
        assert_eq!(body["detail"], "Country code must be 2 letters.");
    }

    #[tokio::test]
    async fn unknown_route_is_a_problem_response() {
        let app = build_app(&ApiConfig::default());
        let (status, _, body) = send(app, get("/planets")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn undecodable_path_is_a_problem_response() {
        let app = build_app(&ApiConfig::default());
        let (status, headers, body) = send(app, get("/countries/%FF%FE")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            headers[header::CONTENT_TYPE].to_str().unwrap(),
            errors::PROBLEM_CONTENT_TYPE
        );
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn wrong_method_is_a_problem_response() {
        let app = build_app(&ApiConfig::default());
        let req = Request::builder()
            .method("DELETE")
            .uri("/countries/fr")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(app, req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            headers[header::CONTENT_TYPE].to_str().unwrap(),
            errors::PROBLEM_CONTENT_TYPE
        );
        assert_eq!(body["title"], "Method not allowed");
        assert_eq!(body["status"], 405);
    }

    #[tokio::test]
    async fn panicking_handler_is_an_internal_problem() {
        async fn explode() -> &'static str {
            panic!("catalog exploded")
        }

        let router = Router::new().route("/explode", axum::routing::get(explode));
        let app = with_layers(router, Arc::new(services::CountryService::in_memory()));
        let (status, headers, body) = send(app, get("/explode")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            headers[header::CONTENT_TYPE].to_str().unwrap(),
            errors::PROBLEM_CONTENT_TYPE
        );
        assert_eq!(body["title"], "Internal Error Server: We are on it!");
        assert_eq!(body["detail"], "catalog exploded");
    }

    #[tokio::test]
    async fn openapi_document_only_in_development() {
        let prod = build_app(&ApiConfig::default());
        let (status, _, _) = send(prod, get(openapi::OPENAPI_PATH)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let dev = build_app(&ApiConfig::development());
        let (status, _, body) = send(dev, get(openapi::OPENAPI_PATH)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Countries API");
        assert!(body["paths"]["/countries/{code}"].is_object());
    }
}

use axum::{http::StatusCode, response::IntoResponse};

/// Liveness check.
#[utoipa::path(
    get,
    path = "/healthCheck",
    tag = "system",
    responses((status = 200, description = "Service is live", body = String))
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Healthy")
}

use axum::{
    extract::OriginalUri,
    http::{Method, Uri},
    routing::get,
    Router,
};

use crate::app::errors::ApiError;

pub mod countries;
pub mod system;

/// Prefixes the country routes are served under.
pub const COUNTRY_PREFIXES: [&str; 2] = ["/countries", "/api/countries"];

/// Router for all public endpoints.
pub fn router() -> Router {
    let mut router = Router::new().route(
        "/healthCheck",
        get(system::health).fallback(method_not_allowed),
    );
    for prefix in COUNTRY_PREFIXES {
        router = router.nest(prefix, countries::router());
    }
    router.fallback(fallback)
}

/// Unmatched routes answer with a problem body instead of an empty 404.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No resource found at '{}'.", uri.path()))
}

/// Method fallback for matched paths: a problem body instead of an empty 405.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "Method '{}' is not supported at '{}'.",
        method,
        uri.path()
    ))
}

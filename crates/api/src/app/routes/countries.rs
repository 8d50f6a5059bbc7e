use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, OriginalUri, Path,
    },
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use countries_core::Country;

use crate::app::dto::{self, CreateCountryRequest};
use crate::app::errors::ApiError;
use crate::app::routes::method_not_allowed;
use crate::app::services::CountryService;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_countries)
                .post(create_country)
                .fallback(method_not_allowed),
        )
        .route("/:code", get(get_country_by_code).fallback(method_not_allowed))
        .route(
            "/region/:region",
            get(get_countries_by_region).fallback(method_not_allowed),
        )
}

#[utoipa::path(
    get,
    path = "/countries",
    tag = "countries",
    responses((status = 200, description = "All countries", body = [Country]))
)]
pub async fn list_countries(
    Extension(services): Extension<Arc<CountryService>>,
) -> Json<Vec<Country>> {
    Json(services.list())
}

#[utoipa::path(
    get,
    path = "/countries/{code}",
    tag = "countries",
    params(("code" = String, Path, description = "Two-letter country code, any case")),
    responses(
        (status = 200, description = "Matching country", body = Country),
        (status = 400, description = "Code is blank or not 2 characters", body = crate::app::errors::ProblemDetails, content_type = "application/problem+json"),
        (status = 404, description = "No country with that code", body = crate::app::errors::ProblemDetails, content_type = "application/problem+json"),
    )
)]
pub async fn get_country_by_code(
    Extension(services): Extension<Arc<CountryService>>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<Country>, ApiError> {
    let Path(code) = code.map_err(path_rejection_to_error)?;
    Ok(Json(services.get_by_code(&code)?))
}

#[utoipa::path(
    get,
    path = "/countries/region/{region}",
    tag = "countries",
    params(("region" = String, Path, description = "Region name, any case")),
    responses(
        (status = 200, description = "Countries in the region", body = [Country]),
        (status = 404, description = "No country in that region", body = crate::app::errors::ProblemDetails, content_type = "application/problem+json"),
    )
)]
pub async fn get_countries_by_region(
    Extension(services): Extension<Arc<CountryService>>,
    region: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Country>>, ApiError> {
    let Path(region) = region.map_err(path_rejection_to_error)?;
    Ok(Json(services.list_by_region(&region)?))
}

#[utoipa::path(
    post,
    path = "/countries",
    tag = "countries",
    request_body = CreateCountryRequest,
    responses(
        (status = 201, description = "Country created", body = Country,
            headers(("Location" = String, description = "URI of the new country"))),
        (status = 400, description = "Invalid or missing payload", body = crate::app::errors::ProblemDetails, content_type = "application/problem+json"),
        (status = 409, description = "Code already in use", body = crate::app::errors::ProblemDetails, content_type = "application/problem+json"),
    )
)]
pub async fn create_country(
    Extension(services): Extension<Arc<CountryService>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<Option<CreateCountryRequest>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(rejection_to_error)?;
    let body = body.ok_or_else(|| ApiError::BadRequest("Country payload is required.".to_string()))?;

    let country = services.create(body.into())?;

    let location = format!(
        "{}/{}",
        uri.path().trim_end_matches('/'),
        dto::encode_path_segment(country.alpha2_code().as_str())
    );
    let location = HeaderValue::from_str(&location)
        .map_err(|e| ApiError::Internal(format!("invalid location header: {e}")))?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(country)).into_response())
}

fn path_rejection_to_error(rejection: PathRejection) -> ApiError {
    if rejection.status().is_server_error() {
        ApiError::Internal(rejection.body_text())
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    if rejection.status().is_server_error() {
        ApiError::Internal(rejection.body_text())
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

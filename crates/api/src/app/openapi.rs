//! OpenAPI document for the country endpoints.

use axum::Json;
use utoipa::OpenApi;

use countries_core::Country;

use crate::app::dto::CreateCountryRequest;
use crate::app::errors::ProblemDetails;
use crate::app::routes;

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Countries API",
        version = "v1",
        description = "A simple RESTful API to retrieve country data."
    ),
    paths(
        routes::countries::list_countries,
        routes::countries::get_country_by_code,
        routes::countries::get_countries_by_region,
        routes::countries::create_country,
        routes::system::health,
    ),
    components(schemas(Country, CreateCountryRequest, ProblemDetails)),
    tags(
        (name = "countries", description = "Country lookup and registration"),
        (name = "system", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use countries_core::NewCountry;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /countries`. Missing or `null` fields are treated as empty.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryRequest {
    #[serde(default)]
    #[schema(example = "DE")]
    pub alpha2_code: Option<String>,
    #[serde(default)]
    #[schema(example = "Germany")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Europe")]
    pub region: Option<String>,
}

impl From<CreateCountryRequest> for NewCountry {
    fn from(body: CreateCountryRequest) -> Self {
        NewCountry {
            alpha2_code: body.alpha2_code.unwrap_or_default(),
            name: body.name.unwrap_or_default(),
            region: body.region.unwrap_or_default(),
        }
    }
}

// -------------------------
// Response helpers
// -------------------------

/// Percent-encode a value for use as a single URI path segment.
pub fn encode_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

const CODE_LENGTH_MESSAGE: &str = "Country code must be 2 letters.";

/// Two-letter country identifier (ISO 3166-1 alpha-2 style).
///
/// Stored upper-cased, so equality between two codes is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and normalise a raw code.
    ///
    /// Rejects blank input and anything that is not exactly two characters.
    /// The length rule applies to the upper-cased form too, since upper-casing
    /// can expand a character (`ß` becomes `SS`).
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() || raw.chars().count() != 2 {
            return Err(DomainError::validation(CODE_LENGTH_MESSAGE));
        }
        let upper = raw.to_uppercase();
        if upper.chars().count() != 2 {
            return Err(DomainError::validation(CODE_LENGTH_MESSAGE));
        }
        Ok(Self(upper))
    }

    /// Build a code from a literal known to be valid (seed data).
    pub(crate) fn from_trusted(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against unvalidated input.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw.to_uppercase()
    }
}

impl core::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

/// A country as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "FR"))]
    alpha2_code: CountryCode,
    #[cfg_attr(feature = "openapi", schema(example = "France"))]
    name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Europe"))]
    region: String,
}

impl Country {
    pub fn new(alpha2_code: CountryCode, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            alpha2_code,
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn alpha2_code(&self) -> &CountryCode {
        &self.alpha2_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Case-insensitive region equality.
    pub fn in_region(&self, region: &str) -> bool {
        self.region.to_lowercase() == region.to_lowercase()
    }
}

impl Entity for Country {
    type Id = CountryCode;

    fn id(&self) -> &Self::Id {
        &self.alpha2_code
    }
}

/// Unvalidated input for creating a country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCountry {
    pub alpha2_code: String,
    pub name: String,
    pub region: String,
}

impl NewCountry {
    /// Apply create-time rules and produce a `Country`.
    ///
    /// Uniqueness is not checked here; the store owns the collection.
    pub fn validate(self) -> DomainResult<Country> {
        if self.alpha2_code.trim().is_empty() {
            return Err(DomainError::validation("Country code is required."));
        }
        let code = CountryCode::parse(&self.alpha2_code)?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Country name is required."));
        }

        let region = self.region.trim();
        if region.is_empty() {
            return Err(DomainError::validation("Country region is required."));
        }

        Ok(Country::new(code, name, region))
    }
}

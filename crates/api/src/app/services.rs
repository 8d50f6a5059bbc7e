use std::sync::Arc;

use countries_core::{Country, CountryCode, DomainError, DomainResult, NewCountry};
use countries_infra::{CountryStore, InMemoryCountryStore};

/// Application service behind the country routes.
#[derive(Clone)]
pub struct CountryService {
    store: Arc<dyn CountryStore>,
}

impl CountryService {
    pub fn new(store: Arc<dyn CountryStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh, seeded in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCountryStore::seeded()))
    }

    pub fn list(&self) -> Vec<Country> {
        tracing::info!("Getting all countries");
        self.store.list()
    }

    pub fn get_by_code(&self, code: &str) -> DomainResult<Country> {
        tracing::info!(country_code = code, "Looking up country with code: {}", code);

        if let Err(e) = CountryCode::parse(code) {
            tracing::warn!(country_code = code, "Invalid country code provided: {}", code);
            return Err(e);
        }

        match self.store.find_by_code(code) {
            Some(country) => {
                tracing::info!(country = ?country, "Found country");
                Ok(country)
            }
            None => {
                tracing::warn!(country_code = code, "Country not found for code: {}", code);
                Err(DomainError::not_found(format!(
                    "No country found with code '{code}'."
                )))
            }
        }
    }

    pub fn list_by_region(&self, region: &str) -> DomainResult<Vec<Country>> {
        tracing::info!(region, "Filtering countries by region: {}", region);

        let filtered = self.store.list_by_region(region);
        if filtered.is_empty() {
            tracing::warn!(region, "No countries found for region: {}", region);
            return Err(DomainError::not_found(format!(
                "No countries found in region '{region}'."
            )));
        }

        tracing::info!(
            count = filtered.len(),
            region,
            "Found {} countries in region {}",
            filtered.len(),
            region
        );
        Ok(filtered)
    }

    pub fn create(&self, input: NewCountry) -> DomainResult<Country> {
        let country = input.validate()?;
        let created = self.store.insert(country)?;
        tracing::info!(country = ?created, "Created country");
        Ok(created)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_country(code: &str, name: &str, region: &str) -> NewCountry {
        NewCountry {
            alpha2_code: code.to_string(),
            name: name.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn lookup_validates_before_searching() {
        let svc = CountryService::in_memory();
        for code in ["", " ", "F", "FRA"] {
            match svc.get_by_code(code) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected validation error for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn lookup_reports_unknown_codes_as_not_found() {
        let svc = CountryService::in_memory();
        assert_eq!(
            svc.get_by_code("xx").unwrap_err(),
            DomainError::not_found("No country found with code 'xx'.")
        );
    }

    #[test]
    fn region_filter_reports_empty_result_as_not_found() {
        let svc = CountryService::in_memory();
        assert_eq!(svc.list_by_region("asia").unwrap().len(), 1);
        assert_eq!(
            svc.list_by_region("Atlantis").unwrap_err(),
            DomainError::not_found("No countries found in region 'Atlantis'.")
        );
    }

    #[test]
    fn create_grows_collection_and_rejects_duplicates() {
        let svc = CountryService::in_memory();
        let before = svc.count();

        let created = svc.create(new_country("ca", "Canada", "North America")).unwrap();
        assert_eq!(created.alpha2_code().as_str(), "CA");
        assert_eq!(svc.count(), before + 1);
        assert_eq!(svc.get_by_code("CA").unwrap(), created);

        match svc.create(new_country("CA", "Canada again", "North America")) {
            Err(DomainError::Conflict(_)) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(svc.count(), before + 1);
    }
}

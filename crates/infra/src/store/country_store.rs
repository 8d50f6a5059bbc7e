use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use countries_core::{seed, Country, DomainError, DomainResult, Entity};

/// Storage abstraction for the country catalog.
pub trait CountryStore: Send + Sync {
    fn list(&self) -> Vec<Country>;
    /// Case-insensitive lookup by alpha-2 code.
    fn find_by_code(&self, code: &str) -> Option<Country>;
    /// Case-insensitive exact match on region name.
    fn list_by_region(&self, region: &str) -> Vec<Country>;
    /// Append a country, rejecting codes already present.
    fn insert(&self, country: Country) -> DomainResult<Country>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CountryStore for Arc<S>
where
    S: CountryStore + ?Sized,
{
    fn list(&self) -> Vec<Country> {
        (**self).list()
    }

    fn find_by_code(&self, code: &str) -> Option<Country> {
        (**self).find_by_code(code)
    }

    fn list_by_region(&self, region: &str) -> Vec<Country> {
        (**self).list_by_region(region)
    }

    fn insert(&self, country: Country) -> DomainResult<Country> {
        (**self).insert(country)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Process-lifetime store; contents reset to the seed list on restart.
#[derive(Debug, Default)]
pub struct InMemoryCountryStore {
    inner: RwLock<Vec<Country>>,
}

impl InMemoryCountryStore {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            inner: RwLock::new(countries),
        }
    }

    /// Store pre-populated with the seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed::countries())
    }

    // push is the only mutation, so a poisoned guard still holds a consistent Vec.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Country>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Country>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CountryStore for InMemoryCountryStore {
    fn list(&self) -> Vec<Country> {
        self.read().clone()
    }

    fn find_by_code(&self, code: &str) -> Option<Country> {
        self.read()
            .iter()
            .find(|c| c.alpha2_code().matches(code))
            .cloned()
    }

    fn list_by_region(&self, region: &str) -> Vec<Country> {
        self.read()
            .iter()
            .filter(|c| c.in_region(region))
            .cloned()
            .collect()
    }

    fn insert(&self, country: Country) -> DomainResult<Country> {
        // Duplicate check and append happen under the same write guard.
        let mut countries = self.write();
        if countries.iter().any(|c| c.same_identity_as(&country)) {
            return Err(DomainError::conflict(format!(
                "A country with code '{}' already exists.",
                country.id()
            )));
        }
        countries.push(country.clone());
        tracing::debug!(code = %country.id(), total = countries.len(), "country stored");
        Ok(country)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

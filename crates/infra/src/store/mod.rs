//! Country storage abstractions.

pub mod country_store;

pub use country_store::{CountryStore, InMemoryCountryStore};

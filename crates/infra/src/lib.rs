//! Infrastructure layer: storage adapters for the country catalog.

pub mod store;

pub use store::{CountryStore, InMemoryCountryStore};

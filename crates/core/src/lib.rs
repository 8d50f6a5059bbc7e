//! `countries-core` — country domain model.
//!
//! This crate contains **pure domain** rules (no IO, no HTTP, no storage):
//! code normalisation, create-time validation and the seed catalog.

pub mod country;
pub mod entity;
pub mod error;
pub mod seed;

pub use country::{Country, CountryCode, NewCountry};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};

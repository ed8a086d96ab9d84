//! `catalog-core` provides domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO): value
//! objects and identifiers, the entity contract, the validation engine and the
//! repository/search contracts.

extern crate self as catalog_core;

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use repository::{
    Repository, SearchConfig, SearchFilter, SearchInput, SearchParams, SearchResult,
    SearchableRepository, SortDirection,
};
pub use validation::{
    FieldErrors, RuleSet, RuleValidator, ValidationError, ValidatorFields, validate_all,
};
pub use value_object::ValueObject;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid;
}

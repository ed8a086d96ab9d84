//! Categories domain module.
//!
//! Business rules for catalog categories, implemented as deterministic domain
//! logic (no IO, no storage). Storage lives behind [`CategoryRepository`].

pub mod category;
pub mod repository;
pub mod validator;

pub use category::{Category, CategoryId, CategoryProps, CreateCategory};
pub use repository::{CategoryFilter, CategoryRepository, CategorySearchParams, CategorySearchResult};
pub use validator::{CategoryValidator, category_rules, category_validator};

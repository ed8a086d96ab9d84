//! Category repository contract.

use catalog_core::{SearchParams, SearchResult, SearchableRepository};

use crate::category::Category;

/// Case-insensitive substring matched against the category name.
pub type CategoryFilter = String;

pub type CategorySearchParams = SearchParams<CategoryFilter>;
pub type CategorySearchResult = SearchResult<Category>;

/// Any searchable category store, in-memory or persistent.
pub trait CategoryRepository: SearchableRepository<Category, Filter = CategoryFilter> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, Filter = CategoryFilter> {}

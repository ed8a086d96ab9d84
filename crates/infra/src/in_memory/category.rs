use catalog_categories::{Category, CategoryFilter};

use super::searchable::{InMemorySearchableRepository, SearchBehavior, SortKey, SortOrder};

/// Search rules for categories: case-insensitive name filter, sortable by
/// `name` and `created_at`, newest first by default.
#[derive(Debug, Default, Copy, Clone)]
pub struct CategorySearch;

const SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

impl SearchBehavior<Category> for CategorySearch {
    type Filter = CategoryFilter;

    fn sortable_fields(&self) -> &[&'static str] {
        SORTABLE_FIELDS
    }

    fn default_sort(&self) -> SortOrder {
        SortOrder::desc("created_at")
    }

    fn matches(&self, item: &Category, filter: &CategoryFilter) -> bool {
        item.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn sort_key(&self, item: &Category, field: &str) -> Option<SortKey> {
        match field {
            "name" => Some(SortKey::Text(item.name().to_string())),
            "created_at" => Some(SortKey::Timestamp(item.created_at())),
            _ => None,
        }
    }
}

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearch>;

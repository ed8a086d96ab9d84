//! In-memory repositories for tests/dev.

pub mod category;
pub mod repository;
pub mod searchable;

pub use category::{CategoryInMemoryRepository, CategorySearch};
pub use repository::InMemoryRepository;
pub use searchable::{
    InMemorySearchableRepository, SearchBehavior, SortKey, SortOrder, paginate, sort_by_key,
};

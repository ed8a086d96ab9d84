//! Infrastructure layer: repository implementations behind the core contracts.

pub mod in_memory;

pub use in_memory::{
    CategoryInMemoryRepository, CategorySearch, InMemoryRepository, InMemorySearchableRepository,
    SearchBehavior, SortKey, SortOrder,
};

//! Repository contracts (CRUD + search).
//!
//! These traits are storage-agnostic. `catalog-infra` provides in-memory
//! implementations; persistence adapters and API handlers only depend on the
//! contracts here.

pub mod config;
pub mod search_params;
pub mod search_result;

use std::sync::Arc;

use crate::entity::Entity;
use crate::error::DomainResult;

pub use config::SearchConfig;
pub use search_params::{SearchFilter, SearchInput, SearchParams, SortDirection};
pub use search_result::SearchResult;

/// CRUD over entities of one type.
///
/// Items are located by identifier equality. `insert` does not check for
/// duplicate identifiers: callers are responsible for fresh ids.
pub trait Repository<E: Entity>: Send + Sync {
    /// Append an entity.
    fn insert(&self, entity: E) -> DomainResult<()>;

    /// Append all entities, preserving their relative order.
    fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()>;

    /// Replace the stored entity with the same id.
    ///
    /// Fails with `NotFound` when no stored entity has that id.
    fn update(&self, entity: E) -> DomainResult<()>;

    /// Remove the entity with `id`; fails with `NotFound` if absent.
    fn delete(&self, id: &E::Id) -> DomainResult<()>;

    /// A miss is `Ok(None)`, not an error.
    fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// All entities in storage order.
    fn find_all(&self) -> DomainResult<Vec<E>>;

    fn entity_type(&self) -> &'static str {
        E::ENTITY_TYPE
    }
}

/// Repository with a filter → sort → paginate query.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Repository-defined filter input.
    type Filter;

    /// Fields `search` honours for `sort`.
    fn sortable_fields(&self) -> &[&'static str];

    /// Run the search pipeline. `total` counts filtered items before pagination.
    fn search(&self, params: &SearchParams<Self::Filter>) -> DomainResult<SearchResult<E>>;
}

impl<E, R> Repository<E> for Arc<R>
where
    E: Entity,
    R: Repository<E> + ?Sized,
{
    fn insert(&self, entity: E) -> DomainResult<()> {
        (**self).insert(entity)
    }

    fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        (**self).bulk_insert(entities)
    }

    fn update(&self, entity: E) -> DomainResult<()> {
        (**self).update(entity)
    }

    fn delete(&self, id: &E::Id) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> DomainResult<Vec<E>> {
        (**self).find_all()
    }

    fn entity_type(&self) -> &'static str {
        (**self).entity_type()
    }
}

impl<E, R> SearchableRepository<E> for Arc<R>
where
    E: Entity,
    R: SearchableRepository<E> + ?Sized,
{
    type Filter = R::Filter;

    fn sortable_fields(&self) -> &[&'static str] {
        (**self).sortable_fields()
    }

    fn search(&self, params: &SearchParams<Self::Filter>) -> DomainResult<SearchResult<E>> {
        (**self).search(params)
    }
}

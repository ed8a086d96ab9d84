//! In-memory search pipeline: filter → sort → paginate.
//!
//! The generic engine lives in [`InMemorySearchableRepository`]; everything
//! entity-specific (filter predicate, sortable fields, default order) is
//! supplied by a [`SearchBehavior`].

use chrono::{DateTime, Utc};
use tracing::debug;

use catalog_core::{
    DomainError, DomainResult, Entity, Repository, SearchConfig, SearchFilter, SearchParams,
    SearchResult, SearchableRepository, SortDirection,
};

use super::repository::InMemoryRepository;

/// Comparable value extracted from an entity field.
///
/// Keys for one field always use the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Bool(bool),
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// Field + direction pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Entity-specific part of the search pipeline.
pub trait SearchBehavior<E>: Send + Sync {
    type Filter: SearchFilter;

    /// Fields accepted as an explicit `sort`.
    fn sortable_fields(&self) -> &[&'static str];

    /// Ordering used when the caller gives no (usable) sort field.
    fn default_sort(&self) -> SortOrder;

    /// Per-item filter predicate.
    fn matches(&self, item: &E, filter: &Self::Filter) -> bool;

    /// Sort key for `field`; `None` sorts before every present key.
    fn sort_key(&self, item: &E, field: &str) -> Option<SortKey>;

    /// Reject unknown sort fields instead of falling back to the default order.
    fn strict_sort(&self) -> bool {
        false
    }

    /// Keep the items matching `filter`, in their original order.
    ///
    /// Without a (non-blank) filter the input vector is returned as is and
    /// `matches` is never called.
    fn apply_filter<'a>(&self, items: Vec<&'a E>, filter: Option<&Self::Filter>) -> Vec<&'a E> {
        match filter {
            Some(filter) if !filter.is_blank() => items
                .into_iter()
                .filter(|item| self.matches(item, filter))
                .collect(),
            _ => items,
        }
    }
}

/// Stable sort by a derived key.
///
/// Keys are computed once per item. Equal keys are ordered by their input
/// position regardless of direction, so ties never depend on the sort algorithm.
pub fn sort_by_key<'a, E, K, F>(items: Vec<&'a E>, direction: SortDirection, key: F) -> Vec<&'a E>
where
    K: Ord,
    F: Fn(&E) -> K,
{
    let mut keyed: Vec<(K, usize, &'a E)> = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| (key(item), idx, item))
        .collect();

    keyed.sort_unstable_by(|(a, a_idx, _), (b, b_idx, _)| {
        let ord = match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        };
        ord.then(a_idx.cmp(b_idx))
    });

    keyed.into_iter().map(|(_, _, item)| item).collect()
}

/// Slice `[(page - 1) * per_page, page * per_page)`; past the end is an empty page.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    let per_page = per_page.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

/// In-memory repository with search, composed from a plain
/// [`InMemoryRepository`] and a [`SearchBehavior`].
#[derive(Debug)]
pub struct InMemorySearchableRepository<E, B> {
    store: InMemoryRepository<E>,
    behavior: B,
    config: SearchConfig,
}

impl<E, B: Default> InMemorySearchableRepository<E, B> {
    pub fn new() -> Self {
        Self::with_behavior(B::default())
    }
}

impl<E, B: Default> Default for InMemorySearchableRepository<E, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, B> InMemorySearchableRepository<E, B> {
    pub fn with_behavior(behavior: B) -> Self {
        Self::with_config(behavior, SearchConfig::default())
    }

    /// `config.default_per_page` applies to searches that leave `per_page`
    /// unset, and `config.max_per_page` caps every search.
    pub fn with_config(behavior: B, config: SearchConfig) -> Self {
        Self {
            store: InMemoryRepository::new(),
            behavior,
            config,
        }
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &InMemoryRepository<E> {
        &self.store
    }
}

impl<E, B> InMemorySearchableRepository<E, B>
where
    E: Entity,
    B: SearchBehavior<E>,
{
    /// Resolve the effective ordering and sort.
    ///
    /// Unknown fields fall back to the default ordering, or fail with
    /// `UnsupportedSortField` when the behavior is strict. A missing direction
    /// sorts descending.
    pub fn apply_sort<'a>(
        &self,
        items: Vec<&'a E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> DomainResult<Vec<&'a E>> {
        let order = match sort {
            None => self.behavior.default_sort(),
            Some(requested) => {
                let known = self
                    .behavior
                    .sortable_fields()
                    .iter()
                    .copied()
                    .find(|field| *field == requested);
                match known {
                    Some(field) => SortOrder {
                        field,
                        direction: sort_dir.unwrap_or(SortDirection::Desc),
                    },
                    None if self.behavior.strict_sort() => {
                        return Err(DomainError::unsupported_sort(requested, E::ENTITY_TYPE));
                    }
                    None => {
                        debug!(
                            entity_type = E::ENTITY_TYPE,
                            field = requested,
                            "unknown sort field, using default order"
                        );
                        self.behavior.default_sort()
                    }
                }
            }
        };

        Ok(sort_by_key(items, order.direction, |item| {
            self.behavior.sort_key(item, order.field)
        }))
    }
}

impl<E, B> Repository<E> for InMemorySearchableRepository<E, B>
where
    E: Entity + Clone + Send + Sync,
    B: SearchBehavior<E>,
{
    fn insert(&self, entity: E) -> DomainResult<()> {
        self.store.insert(entity)
    }

    fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        self.store.bulk_insert(entities)
    }

    fn update(&self, entity: E) -> DomainResult<()> {
        self.store.update(entity)
    }

    fn delete(&self, id: &E::Id) -> DomainResult<()> {
        self.store.delete(id)
    }

    fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        self.store.find_by_id(id)
    }

    fn find_all(&self) -> DomainResult<Vec<E>> {
        self.store.find_all()
    }
}

impl<E, B> SearchableRepository<E> for InMemorySearchableRepository<E, B>
where
    E: Entity + Clone + Send + Sync,
    B: SearchBehavior<E>,
{
    type Filter = B::Filter;

    fn sortable_fields(&self) -> &[&'static str] {
        self.behavior.sortable_fields()
    }

    fn search(&self, params: &SearchParams<Self::Filter>) -> DomainResult<SearchResult<E>> {
        // One read guard for the whole pipeline: items and total share a snapshot.
        let snapshot = self.store.read()?;

        let filtered = self
            .behavior
            .apply_filter(snapshot.iter().collect(), params.filter());
        let total = filtered.len();

        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir())?;

        let per_page = self
            .config
            .clamp_per_page(params.per_page_in(&self.config));
        let items: Vec<E> = paginate(sorted, params.page(), per_page)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            entity_type = E::ENTITY_TYPE,
            total,
            page = params.page(),
            per_page,
            returned = items.len(),
            "search"
        );

        Ok(SearchResult::new(items, total as u64, params.page(), per_page))
    }
}

//! Paginated search output.

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use crate::entity::Entity;

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<E> {
    /// Items on the requested page.
    pub items: Vec<E>,
    /// Number of items matching the filter (across all pages).
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    /// `ceil(total / per_page)`; 0 when nothing matched.
    pub last_page: u32,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, current_page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let last_page = u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    /// Convert the items while keeping the pagination metadata.
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_page
    }
}

impl<E: Entity> SearchResult<E> {
    /// Projection with every item rendered through [`Entity::to_json`].
    pub fn to_json(&self) -> JsonValue {
        json!({
            "items": self.items.iter().map(Entity::to_json).collect::<Vec<_>>(),
            "total": self.total,
            "current_page": self.current_page,
            "per_page": self.per_page,
            "last_page": self.last_page,
        })
    }
}

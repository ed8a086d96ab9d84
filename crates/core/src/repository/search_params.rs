//! Search input: page, page size, filter and sort.

use serde::{Deserialize, Serialize};

use super::config::SearchConfig;

/// Sort direction for an explicit sort field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `asc` / `desc`; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl core::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter values that can be "blank" (treated as no filter at all).
pub trait SearchFilter {
    fn is_blank(&self) -> bool {
        false
    }
}

impl SearchFilter for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Untyped search input, e.g. deserialized from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
}

/// Normalised search parameters.
///
/// `page >= 1` and `per_page >= 1` always hold: every setter normalises its
/// input instead of failing. A page size that was never set is left to the
/// repository's [`SearchConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F = String> {
    page: u32,
    per_page: Option<u32>,
    filter: Option<F>,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: None,
            filter: None,
            sort: None,
            sort_dir: None,
        }
    }
}

impl<F: SearchFilter> SearchParams<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-positive pages become 1.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = normalize_page(Some(page));
        self
    }

    /// Page size under the default [`SearchConfig`].
    pub fn with_per_page(self, per_page: i64) -> Self {
        self.with_per_page_in(per_page, &SearchConfig::default())
    }

    /// Non-positive sizes become `config.default_per_page`; oversized ones are clamped.
    pub fn with_per_page_in(mut self, per_page: i64, config: &SearchConfig) -> Self {
        self.per_page = Some(normalize_per_page(Some(per_page), config));
        self
    }

    /// Blank filters are dropped.
    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = Some(filter).filter(|f| !f.is_blank());
        self
    }

    /// Empty field names are treated as "no sort".
    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.sort = if field.is_empty() { None } else { Some(field) };
        self
    }

    pub fn with_sort_dir(mut self, dir: SortDirection) -> Self {
        self.sort_dir = Some(dir);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size, falling back to the default [`SearchConfig`] when unset.
    pub fn per_page(&self) -> u32 {
        self.per_page_in(&SearchConfig::default())
    }

    /// Page size, falling back to `config.default_per_page` when unset.
    pub fn per_page_in(&self, config: &SearchConfig) -> u32 {
        self.per_page.unwrap_or(config.default_per_page)
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Always `None` when no sort field is set.
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort.as_ref().and(self.sort_dir)
    }
}

impl SearchParams<String> {
    /// Normalise raw input under `config`.
    pub fn from_input(input: &SearchInput, config: &SearchConfig) -> Self {
        let page = normalize_page(input.page.as_deref().and_then(parse_int));
        let per_page = Some(normalize_per_page(
            input.per_page.as_deref().and_then(parse_int),
            config,
        ));
        let sort = input
            .sort
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let sort_dir = input.sort_dir.as_deref().and_then(SortDirection::parse);

        Self {
            page,
            per_page,
            filter: input.filter.clone().filter(|f| !f.is_blank()),
            sort,
            sort_dir,
        }
    }
}

/// Whole integers only: `"5"` parses, `"5.5"`, `"a"` and `""` don't.
fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn normalize_page(page: Option<i64>) -> u32 {
    match page {
        Some(p) if p > 0 => u32::try_from(p).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn normalize_per_page(per_page: Option<i64>, config: &SearchConfig) -> u32 {
    match per_page {
        Some(p) if p > 0 => config.clamp_per_page(u32::try_from(p).unwrap_or(u32::MAX)),
        _ => config.default_per_page,
    }
}

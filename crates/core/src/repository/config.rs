//! Search configuration (page-size defaults and limits).

const DEFAULT_PER_PAGE: u32 = 15;
const MAX_PER_PAGE: u32 = 100;

const DEFAULT_PER_PAGE_VAR: &str = "CATALOG_DEFAULT_PER_PAGE";
const MAX_PER_PAGE_VAR: &str = "CATALOG_MAX_PER_PAGE";

/// Page-size policy applied when normalising [`SearchParams`](super::SearchParams).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Used when `per_page` is missing or invalid.
    pub default_per_page: u32,
    /// Upper bound for `per_page`; larger requests are clamped.
    pub max_per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

impl SearchConfig {
    /// Build a config, enforcing `1 <= default_per_page <= max_per_page`.
    pub fn new(default_per_page: u32, max_per_page: u32) -> Self {
        let default_per_page = default_per_page.max(1);
        Self {
            default_per_page,
            max_per_page: max_per_page.max(default_per_page),
        }
    }

    /// Read `CATALOG_DEFAULT_PER_PAGE` / `CATALOG_MAX_PER_PAGE`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| get(key).and_then(|raw| parse_per_page(key, &raw));
        let default_per_page = read(DEFAULT_PER_PAGE_VAR).unwrap_or(DEFAULT_PER_PAGE);
        let max_per_page = read(MAX_PER_PAGE_VAR).unwrap_or(MAX_PER_PAGE);
        Self::new(default_per_page, max_per_page)
    }

    /// Clamp a requested page size into `1..=max_per_page`.
    pub fn clamp_per_page(&self, per_page: u32) -> u32 {
        per_page.clamp(1, self.max_per_page)
    }
}

fn parse_per_page(key: &str, raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid search config value");
            None
        }
    }
}

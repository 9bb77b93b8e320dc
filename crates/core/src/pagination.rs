//! List-query construction for the catalog listing.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! and any future CLI tooling share one definition of pagination arithmetic,
//! sort-key handling, and search-pattern construction. Nothing here touches
//! storage.

use crate::error::CoreError;

/// First page number. Pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of catalog entries per page.
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Maximum number of catalog entries per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Sort order for the catalog listing, keyed on creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently created first (`created_at DESC`).
    Latest,
    /// Oldest first (`created_at ASC`).
    Oldest,
}

impl SortOrder {
    /// Resolve a user-supplied sort key.
    ///
    /// `"latest"` sorts descending; any other key, including a missing one,
    /// sorts ascending. The fallback is defined behaviour, not an error.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("latest") => SortOrder::Latest,
            _ => SortOrder::Oldest,
        }
    }

    /// SQL direction keyword for `ORDER BY created_at`.
    pub fn direction(self) -> &'static str {
        match self {
            SortOrder::Latest => "DESC",
            SortOrder::Oldest => "ASC",
        }
    }
}

/// A validated listing request: page, page size, optional title search, and
/// sort order.
///
/// Construct via [`ListQuery::new`]; a `ListQuery` in hand is guaranteed to
/// produce a non-negative offset and a bounded limit.
#[derive(Debug, Clone)]
pub struct ListQuery {
    page: i64,
    page_size: i64,
    search: Option<String>,
    sort: SortOrder,
}

impl ListQuery {
    /// Build a listing query from raw request parameters.
    ///
    /// Page defaults to 1 and must not be smaller (the skip count would go
    /// negative). Page size defaults to [`DEFAULT_PAGE_SIZE`] and is clamped
    /// to `1..=MAX_PAGE_SIZE`. Blank search text matches everything.
    pub fn new(
        page: Option<i64>,
        page_size: Option<i64>,
        search: Option<String>,
        sort_key: Option<&str>,
    ) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be 1 or greater, got {page}"
            )));
        }

        let page_size = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            page,
            page_size,
            search,
            sort: SortOrder::from_key(sort_key),
        })
    }

    /// Number of rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Number of rows to take.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Page size used for [`total_pages`] computation.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// `ILIKE` pattern for the title filter, or `None` to match all rows.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| format!("%{s}%"))
    }

    /// Resolved sort order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }
}

/// Total number of pages for a filtered count: `ceil(total_count / page_size)`,
/// 0 when nothing matched.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

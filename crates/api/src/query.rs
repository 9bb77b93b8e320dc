//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the catalog listing
/// (`?page=&limit=&search=&sort=`).
///
/// Raw and unvalidated on purpose: the handler feeds them through
/// `pantry_core::pagination::ListQuery`, which owns defaulting, clamping,
/// and the page >= 1 rule.
#[derive(Debug, Deserialize)]
pub struct ListRecipesParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

pub mod health;
pub mod measurement;
pub mod recipe;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes           list, create
/// /recipes/{id}      get, delete
///
/// /measurements      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipe::router())
        .nest("/measurements", measurement::router())
}

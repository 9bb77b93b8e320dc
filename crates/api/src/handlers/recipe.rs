//! Handlers for the `/recipes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pantry_core::pagination::ListQuery;
use pantry_core::types::DbId;
use pantry_db::models::recipe::CreateRecipe;
use pantry_db::repositories::RecipeRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListRecipesParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recipes?page=&limit=&search=&sort=
///
/// Paginated catalog listing. Search filters on the title,
/// case-insensitively; `sort=latest` gives newest-first, anything else
/// oldest-first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> AppResult<impl IntoResponse> {
    let query = ListQuery::new(
        params.page,
        params.limit,
        params.search,
        params.sort.as_deref(),
    )?;
    let page = RecipeRepo::list(&state.pool, &query).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/recipes
///
/// Create a recipe together with its ingredient line items.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRecipe>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: recipe })))
}

/// GET /api/v1/recipes/{id}
///
/// Get a single recipe with its ingredients and their measurements.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Recipe", id))?;
    Ok(Json(DataResponse { data: recipe }))
}

/// DELETE /api/v1/recipes/{id}
///
/// Remove a recipe and every ingredient it owns.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = RecipeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Recipe", id))
    }
}

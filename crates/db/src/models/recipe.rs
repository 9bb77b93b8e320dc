//! Recipe entity model and DTOs.
//!
//! A recipe is the catalog's entry type. The earlier variant of the catalog
//! stored YouTube videos, so the entry shape carries both an optional
//! ingredient list and an optional video link; nothing makes the two
//! mutually exclusive.

use pantry_core::types::{DbId, Timestamp};
use pantry_core::video::extract_video_id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ingredient::{CreateIngredient, IngredientWithMeasurement};

/// A row from the `recipes` table.
///
/// Rows are immutable after creation in this scope; `created_at` is the
/// default sort key for the listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub tips: Option<String>,
    /// Source link as submitted: a full YouTube URL or a bare video id.
    pub video_url: Option<String>,
    pub created_at: Timestamp,
}

/// A recipe enriched with its ingredients and each ingredient's measurement.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Canonical 11-character video id derived from `video_url`, when one
    /// is recognizable. Saves every UI from re-implementing the extraction.
    pub video_id: Option<String>,
    pub ingredients: Vec<IngredientWithMeasurement>,
}

impl RecipeWithIngredients {
    pub fn new(recipe: Recipe, ingredients: Vec<IngredientWithMeasurement>) -> Self {
        let video_id = recipe.video_url.as_deref().and_then(extract_video_id);
        Self {
            recipe,
            video_id,
            ingredients,
        }
    }
}

/// DTO for creating a new recipe together with its ingredient line items.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipe {
    pub title: String,
    pub description: Option<String>,
    pub tips: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<CreateIngredient>,
}

/// One page of the catalog listing plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct RecipePage {
    pub recipes: Vec<RecipeWithIngredients>,
    /// `ceil(total_count / page_size)` over the same filter as the page;
    /// 0 when nothing matched.
    pub total_pages: i64,
}

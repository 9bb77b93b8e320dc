//! Ingredient line-item model and DTOs.

use pantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::measurement::Measurement;

/// A row from the `ingredients` table. Owned exclusively by its recipe.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ingredient {
    pub id: DbId,
    pub recipe_id: DbId,
    pub name: String,
    pub quantity: f64,
    pub measurement_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// An ingredient enriched with its resolved measurement, if any.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientWithMeasurement {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub measurement: Option<Measurement>,
}

/// Ingredient line item in a recipe create request.
///
/// Quantity arrives as form text and is parsed to a number at write time;
/// text that does not parse fails validation before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredient {
    pub name: String,
    pub quantity: String,
    pub measurement_id: Option<DbId>,
}

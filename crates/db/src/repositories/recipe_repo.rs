//! Repository for the `recipes` table and the `ingredients` rows it owns.

use pantry_core::error::CoreError;
use pantry_core::pagination::{total_pages, ListQuery};
use pantry_core::quantity::parse_quantity;
use pantry_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::ingredient::{Ingredient, IngredientWithMeasurement};
use crate::models::measurement::Measurement;
use crate::models::recipe::{CreateRecipe, Recipe, RecipePage, RecipeWithIngredients};

use super::{read_err, write_err};

/// Column list for the `recipes` table.
const COLUMNS: &str = "id, title, description, tips, video_url, created_at";

/// Column list for ingredient reads, joined with the measurement lookup.
const INGREDIENT_COLUMNS: &str = "i.id, i.recipe_id, i.name, i.quantity, i.measurement_id, \
    i.created_at, m.name AS measurement_name, m.created_at AS measurement_created_at";

/// Flat row shape for the ingredient/measurement LEFT JOIN.
#[derive(FromRow)]
struct IngredientRow {
    id: DbId,
    recipe_id: DbId,
    name: String,
    quantity: f64,
    measurement_id: Option<DbId>,
    created_at: Timestamp,
    measurement_name: Option<String>,
    measurement_created_at: Option<Timestamp>,
}

impl From<IngredientRow> for IngredientWithMeasurement {
    fn from(row: IngredientRow) -> Self {
        let measurement = match (row.measurement_id, row.measurement_name, row.measurement_created_at)
        {
            (Some(id), Some(name), Some(created_at)) => Some(Measurement {
                id,
                name,
                created_at,
            }),
            _ => None,
        };
        IngredientWithMeasurement {
            ingredient: Ingredient {
                id: row.id,
                recipe_id: row.recipe_id,
                name: row.name,
                quantity: row.quantity,
                measurement_id: row.measurement_id,
                created_at: row.created_at,
            },
            measurement,
        }
    }
}

/// Provides the catalog store operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a new recipe and its ingredient line items in one transaction.
    ///
    /// All input is validated before the transaction opens: a blank title, a
    /// blank ingredient name, or quantity text that does not parse to a
    /// finite number fails with `Validation` and persists nothing. A failing
    /// insert rolls the whole recipe back.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecipe,
    ) -> Result<RecipeWithIngredients, CoreError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation(
                "recipe title is required".to_string(),
            ));
        }

        let mut quantities = Vec::with_capacity(input.ingredients.len());
        for item in &input.ingredients {
            if item.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "ingredient name is required".to_string(),
                ));
            }
            quantities.push(parse_quantity(&item.quantity)?);
        }

        let mut tx = pool.begin().await.map_err(write_err)?;

        let insert_query = format!(
            "INSERT INTO recipes (title, description, tips, video_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&insert_query)
            .bind(title)
            .bind(&input.description)
            .bind(&input.tips)
            .bind(&input.video_url)
            .fetch_one(&mut *tx)
            .await
            .map_err(write_err)?;

        for (item, quantity) in input.ingredients.iter().zip(&quantities) {
            sqlx::query(
                "INSERT INTO ingredients (recipe_id, name, quantity, measurement_id) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(recipe.id)
            .bind(item.name.trim())
            .bind(*quantity)
            .bind(item.measurement_id)
            .execute(&mut *tx)
            .await
            .map_err(write_err)?;
        }

        tx.commit().await.map_err(write_err)?;

        let ingredients = Self::ingredients_for_recipe(pool, recipe.id).await?;
        Ok(RecipeWithIngredients::new(recipe, ingredients))
    }

    /// One page of the catalog listing: filtered, sorted, and counted.
    ///
    /// The count query shares the page query's filter, so `total_pages` is
    /// consistent with what the caller is paging through. The tail page may
    /// be shorter than the page size; a page past the tail is empty.
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<RecipePage, CoreError> {
        let pattern = query.like_pattern();
        let direction = query.sort().direction();

        // `id` breaks creation-time ties so pages are deterministic.
        let list_query = format!(
            "SELECT {COLUMNS} FROM recipes \
             WHERE ($1::TEXT IS NULL OR title ILIKE $1) \
             ORDER BY created_at {direction}, id {direction} \
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Recipe>(&list_query)
            .bind(&pattern)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(pool)
            .await
            .map_err(read_err)?;

        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE ($1::TEXT IS NULL OR title ILIKE $1)")
                .bind(&pattern)
                .fetch_one(pool)
                .await
                .map_err(read_err)?;

        let mut recipes = Vec::with_capacity(rows.len());
        for recipe in rows {
            let ingredients = Self::ingredients_for_recipe(pool, recipe.id).await?;
            recipes.push(RecipeWithIngredients::new(recipe, ingredients));
        }

        Ok(RecipePage {
            recipes,
            total_pages: total_pages(total_count, query.page_size()),
        })
    }

    /// Find a recipe by ID, enriched with its ingredients and measurements.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithIngredients>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        let recipe = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(read_err)?;

        match recipe {
            Some(recipe) => {
                let ingredients = Self::ingredients_for_recipe(pool, recipe.id).await?;
                Ok(Some(RecipeWithIngredients::new(recipe, ingredients)))
            }
            None => Ok(None),
        }
    }

    /// Delete a recipe and every ingredient it owns. Returns `true` if a row
    /// was removed.
    ///
    /// Children are deleted first, in the same transaction; the schema
    /// carries no ON DELETE CASCADE, so this is the only delete path.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, CoreError> {
        let mut tx = pool.begin().await.map_err(write_err)?;

        sqlx::query("DELETE FROM ingredients WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(write_err)?;

        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(write_err)?;

        tx.commit().await.map_err(write_err)?;
        Ok(result.rows_affected() > 0)
    }

    /// All ingredients for a recipe with their measurements, in insertion
    /// order.
    pub async fn ingredients_for_recipe(
        pool: &PgPool,
        recipe_id: DbId,
    ) -> Result<Vec<IngredientWithMeasurement>, CoreError> {
        let query = format!(
            "SELECT {INGREDIENT_COLUMNS} \
             FROM ingredients i \
             LEFT JOIN measurements m ON m.id = i.measurement_id \
             WHERE i.recipe_id = $1 \
             ORDER BY i.id"
        );
        let rows = sqlx::query_as::<_, IngredientRow>(&query)
            .bind(recipe_id)
            .fetch_all(pool)
            .await
            .map_err(read_err)?;

        Ok(rows.into_iter().map(IngredientWithMeasurement::from).collect())
    }
}

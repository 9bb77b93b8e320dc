//! Repository for the `measurements` table.

use pantry_core::error::CoreError;
use pantry_core::types::DbId;
use sqlx::PgPool;

use crate::models::measurement::{CreateMeasurement, Measurement};

use super::{read_err, write_err};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides the catalog store operations for measurement units.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Insert a new measurement, returning the created row.
    ///
    /// The name is trimmed; a blank name fails with `Validation` before any
    /// statement runs. Name uniqueness is not enforced here.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMeasurement,
    ) -> Result<Measurement, CoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "measurement name is required".to_string(),
            ));
        }

        let query = format!("INSERT INTO measurements (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(write_err)
    }

    /// List all measurements in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Measurement>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM measurements ORDER BY id");
        sqlx::query_as::<_, Measurement>(&query)
            .fetch_all(pool)
            .await
            .map_err(read_err)
    }

    /// Find a measurement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Measurement>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE id = $1");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(read_err)
    }
}

//! Measurement unit model and DTO.
//!
//! Measurements ("ml", "cup", "tbsp") are a flat lookup table referenced by
//! ingredient line items. They are never owned by an ingredient and survive
//! recipe deletion.

use pantry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `measurements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeasurement {
    pub name: String,
}

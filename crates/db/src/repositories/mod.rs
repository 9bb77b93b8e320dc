//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Methods return `CoreError`:
//! validation failures are raised before any statement runs, failed writes
//! map to `Persistence`, failed reads to `Query`. Missing rows surface as
//! `Option`/`bool` and become `NotFound` at the API boundary.

pub mod measurement_repo;
pub mod recipe_repo;

pub use measurement_repo::MeasurementRepo;
pub use recipe_repo::RecipeRepo;

use pantry_core::error::CoreError;

/// Map a failed write or transaction to `Persistence`, logging the driver
/// error before it is sanitized for the caller.
pub(crate) fn write_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "catalog write failed");
    CoreError::Persistence(err.to_string())
}

/// Map a failed read to `Query`, logging the driver error first.
pub(crate) fn read_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "catalog read failed");
    CoreError::Query(err.to_string())
}

//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Enriched read shapes composing a row with its relations

pub mod ingredient;
pub mod measurement;
pub mod recipe;

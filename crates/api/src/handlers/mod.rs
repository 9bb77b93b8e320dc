//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers stay thin: build the query, delegate to the corresponding
//! repository in `pantry_db`, and map missing rows to 404 via [`crate::error::AppError`].

pub mod measurement;
pub mod recipe;

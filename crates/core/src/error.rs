use crate::types::DbId;

/// Error taxonomy for the catalog store.
///
/// `Validation` is raised before any persistence attempt; `Persistence` and
/// `Query` wrap underlying write and read failures respectively, carrying the
/// driver's message. Nothing is swallowed and nothing is retried here; retry
/// policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Write failed: {0}")]
    Persistence(String),

    #[error("Read failed: {0}")]
    Query(String),
}

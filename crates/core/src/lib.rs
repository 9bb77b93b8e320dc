//! Domain logic shared by the catalog store and the API layer.
//!
//! Everything in this crate is pure: no database handles, no I/O. The
//! repository and handler crates depend on it for the error taxonomy,
//! list-query arithmetic, and input parsing.

pub mod error;
pub mod pagination;
pub mod quantity;
pub mod types;
pub mod video;

//! Error types for savepoint-core

use thiserror::Error;

use crate::api::ApiError;
use crate::draft::ValidationError;
use crate::models::ClipId;

/// Result type alias using savepoint-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in savepoint-core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Draft rejected locally; nothing was sent to the API
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// API request failed; the in-memory collection is untouched
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A clip with this id already exists in the collection.
    ///
    /// The API guarantees unique ids, so hitting this means the in-memory
    /// view has diverged from the server. Reload instead of crashing.
    #[error("Duplicate clip id: {0}")]
    DuplicateId(ClipId),

    /// No clip with this id in the collection, e.g. it was deleted from
    /// another session. Non-fatal; reload to reconcile.
    #[error("Clip not found: {0}")]
    NotFound(ClipId),

    /// Operation requires an authenticated session
    #[error("Not authenticated")]
    Unauthenticated,
}

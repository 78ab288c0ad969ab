//! Crate-level error type.

use thiserror::Error;

use crate::storage::{CodecError, StorageError};

/// Errors surfaced by a [`crate::session::Session`].
///
/// Rotation and validation cannot fail. Malformed saved state is discarded
/// on load rather than reported, so these only come from bad input or from
/// the storage backend.
#[derive(Debug, Error)]
pub enum InsanityError {
    #[error("no cube at index {index} (puzzle has {count} cubes)")]
    UnknownCube { index: usize, count: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode game state: {0}")]
    Codec(#[from] CodecError),
}

/// Result alias for session operations.
pub type Result<T, E = InsanityError> = std::result::Result<T, E>;

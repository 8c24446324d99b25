//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `#[from]` (or by boxing, for adapter-specific sources).

use crate::id::ParseItemIdError;
use crate::resource::{ResourceName, Shape, UnknownResource};

/// Base error enum shared by services, adapters, and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// No item with the requested id exists in a sequence resource.
    #[error("no {resource} item with id {id}")]
    NotFound {
        /// Resource that was searched.
        resource: ResourceName,
        /// Requested item id.
        id: i64,
    },

    /// The path segment names no known resource.
    #[error(transparent)]
    UnknownResource(#[from] UnknownResource),

    /// The id path parameter is not a valid integer.
    #[error(transparent)]
    InvalidId(#[from] ParseItemIdError),

    /// The operation requires the other document shape.
    #[error("{resource} is not {expected}-shaped")]
    ShapeMismatch {
        /// Resource the operation targeted.
        resource: ResourceName,
        /// Shape the operation requires.
        expected: Shape,
    },

    /// An upload request carried no `file` field.
    #[error("no file uploaded")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("malformed multipart request: {0}")]
    Multipart(String),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message() {
        let err = FolioError::NotFound {
            resource: ResourceName::Skills,
            id: 42,
        };
        assert_eq!(err.to_string(), "no skills item with id 42");
    }

    #[test]
    fn should_render_shape_mismatch_message() {
        let err = FolioError::ShapeMismatch {
            resource: ResourceName::Hero,
            expected: Shape::Sequence,
        };
        assert_eq!(err.to_string(), "hero is not sequence-shaped");
    }

    #[test]
    fn should_convert_parse_error_via_from() {
        let parse_err = "nope".parse::<crate::id::ItemId>().unwrap_err();
        let err = FolioError::from(parse_err);
        assert!(matches!(err, FolioError::InvalidId(_)));
    }
}

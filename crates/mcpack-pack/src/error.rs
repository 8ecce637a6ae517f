//! Error types for data pack operations.

use std::path::PathBuf;

use mcpack_codec::CodecError;
use mcpack_types::{ItemKind, TypeError};
use thiserror::Error;

/// Errors surfaced by key parsing, item assignment, `dump` and `load`.
#[derive(Debug, Error)]
pub enum PackError {
    /// Malformed namespaced key or unsafe path segment.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// A kind name outside the closed registry.
    #[error("unsupported item kind: {0}")]
    UnsupportedKind(String),

    /// A file of a recognized kind that does not decode.
    #[error("malformed document {}: {reason}", .path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// An attribute value the kind's schema cannot represent.
    #[error("cannot encode {kind}: {reason}")]
    UnencodableValue { kind: ItemKind, reason: String },

    /// The dump target exists and overwrite was not requested.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The load target is missing or lacks root metadata.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Configuration file could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a file path to a codec failure.
    pub(crate) fn from_codec(err: CodecError, path: &std::path::Path) -> Self {
        match err {
            CodecError::Malformed { reason, .. } => Self::MalformedDocument {
                path: path.to_path_buf(),
                reason,
            },
            CodecError::Unencodable { kind, reason } => Self::UnencodableValue { kind, reason },
        }
    }
}

impl From<TypeError> for PackError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::UnsupportedKind(name) => Self::UnsupportedKind(name),
        }
    }
}

/// Result alias for data pack operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_name_converts() {
        let err: PackError = "dimension".parse::<ItemKind>().unwrap_err().into();
        assert!(matches!(err, PackError::UnsupportedKind(ref name) if name == "dimension"));
        assert_eq!(err.to_string(), "unsupported item kind: dimension");
    }

    #[test]
    fn codec_failures_keep_their_class() {
        let path = std::path::Path::new("data/ns/recipes/r.json");
        let err = PackError::from_codec(
            CodecError::Malformed {
                kind: ItemKind::Recipe,
                reason: "bad json".into(),
            },
            path,
        );
        assert!(
            matches!(err, PackError::MalformedDocument { ref path, .. } if path.ends_with("r.json"))
        );

        let err = PackError::from_codec(
            CodecError::Unencodable {
                kind: ItemKind::Structure,
                reason: "size".into(),
            },
            path,
        );
        assert!(matches!(err, PackError::UnencodableValue { kind: ItemKind::Structure, .. }));
    }
}

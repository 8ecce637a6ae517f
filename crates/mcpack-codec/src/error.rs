use mcpack_types::ItemKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Bytes for a known kind that do not decode per its encoding.
    #[error("malformed {kind} document: {reason}")]
    Malformed { kind: ItemKind, reason: String },

    /// An attribute value the kind's schema cannot represent.
    #[error("cannot encode {kind}: {reason}")]
    Unencodable { kind: ItemKind, reason: String },
}

impl CodecError {
    pub(crate) fn malformed(kind: ItemKind, reason: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn unencodable(kind: ItemKind, reason: impl Into<String>) -> Self {
        Self::Unencodable {
            kind,
            reason: reason.into(),
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

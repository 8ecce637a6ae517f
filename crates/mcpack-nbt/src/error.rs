use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("unexpected end of data at offset {offset}: needed {needed} more bytes")]
    Truncated { offset: usize, needed: usize },

    #[error("unknown tag type {type_id} at offset {offset}")]
    UnknownTagType { type_id: u8, offset: usize },

    #[error("negative length {length} at offset {offset}")]
    NegativeLength { length: i32, offset: usize },

    #[error("invalid UTF-8 string at offset {offset}")]
    InvalidString { offset: usize },

    #[error("root tag must be a compound, got {0}")]
    RootNotCompound(&'static str),

    #[error("nesting exceeds the maximum depth of {0}")]
    TooDeep(usize),

    #[error("{0} trailing bytes after the root tag")]
    TrailingBytes(usize),

    #[error("string of {0} bytes exceeds the 65535 byte limit")]
    StringTooLong(usize),

    #[error("list mixes {expected} and {actual} elements")]
    HeterogeneousList {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("value nests deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("{0} has too many elements to encode")]
    TooManyElements(&'static str),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("compression failed: {0}")]
    CompressionFailed(String),
}

impl NbtError {
    /// True for failures raised while writing a value rather than parsing bytes.
    pub fn is_encode_error(&self) -> bool {
        matches!(
            self,
            Self::StringTooLong(_)
                | Self::HeterogeneousList { .. }
                | Self::TooManyElements(_)
                | Self::NestingTooDeep(_)
                | Self::CompressionFailed(_)
        )
    }
}

pub type NbtResult<T> = Result<T, NbtError>;

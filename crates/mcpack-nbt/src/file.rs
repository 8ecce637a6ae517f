use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{NbtError, NbtResult};
use crate::reader::NbtReader;
use crate::tag::Compound;
use crate::writer::NbtWriter;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Outer framing of a binary tag document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    /// gzip with the given level (0-9).
    Gzip(u32),
}

impl Default for Compression {
    fn default() -> Self {
        Self::Gzip(6)
    }
}

/// A complete document: named root compound plus its framing.
#[derive(Clone, Debug, PartialEq)]
pub struct NbtFile {
    pub root_name: String,
    pub root: Compound,
    pub compression: Compression,
}

impl NbtFile {
    /// A gzip-framed document with an empty root name.
    pub fn new(root: Compound) -> Self {
        Self {
            root_name: String::new(),
            root,
            compression: Compression::default(),
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Encode to bytes, compressing if requested.
    pub fn to_bytes(&self) -> NbtResult<Vec<u8>> {
        let raw = NbtWriter::new().write_root(&self.root_name, &self.root)?;
        match self.compression {
            Compression::None => Ok(raw),
            Compression::Gzip(level) => {
                let mut encoder =
                    GzEncoder::new(Vec::new(), flate2::Compression::new(level.min(9)));
                encoder
                    .write_all(&raw)
                    .map_err(|e| NbtError::CompressionFailed(e.to_string()))?;
                encoder
                    .finish()
                    .map_err(|e| NbtError::CompressionFailed(e.to_string()))
            }
        }
    }

    /// Decode from bytes. gzip framing is detected from the magic bytes.
    pub fn from_bytes(data: &[u8]) -> NbtResult<Self> {
        if data.starts_with(&GZIP_MAGIC) {
            let mut raw = Vec::new();
            GzDecoder::new(data)
                .read_to_end(&mut raw)
                .map_err(|e| NbtError::DecompressionFailed(e.to_string()))?;
            let (root_name, root) = NbtReader::new(&raw).read_root()?;
            tracing::trace!(compressed = data.len(), raw = raw.len(), "decoded gzip document");
            Ok(Self {
                root_name,
                root,
                compression: Compression::default(),
            })
        } else {
            let (root_name, root) = NbtReader::new(data).read_root()?;
            Ok(Self {
                root_name,
                root,
                compression: Compression::None,
            })
        }
    }
}

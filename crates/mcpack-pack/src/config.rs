use std::path::Path;

use mcpack_codec::CodecOptions;
use mcpack_nbt::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// Settings for writing a data pack.
///
/// ```toml
/// json_indent = 4
/// compress_structures = true
/// compression_level = 6
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Spaces per indent level in JSON documents.
    pub json_indent: usize,
    /// gzip structure files. Loading accepts both forms regardless.
    pub compress_structures: bool,
    /// gzip level, 0 through 9.
    pub compression_level: u32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            json_indent: 4,
            compress_structures: true,
            compression_level: 6,
        }
    }
}

impl PackConfig {
    pub fn from_toml_str(s: &str) -> PackResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| PackError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> PackResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> PackResult<()> {
        if self.compression_level > 9 {
            return Err(PackError::Config(format!(
                "compression_level must be 0-9, got {}",
                self.compression_level
            )));
        }
        Ok(())
    }

    pub fn codec_options(&self) -> CodecOptions {
        let compression = if self.compress_structures {
            Compression::Gzip(self.compression_level.min(9))
        } else {
            Compression::None
        };
        CodecOptions {
            json_indent: self.json_indent,
            compression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = PackConfig::default();
        assert_eq!(c.json_indent, 4);
        assert!(c.compress_structures);
        assert_eq!(c.compression_level, 6);
        assert_eq!(c.codec_options(), CodecOptions::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = PackConfig::from_toml_str("json_indent = 2").unwrap();
        assert_eq!(c.json_indent, 2);
        assert!(c.compress_structures);
    }

    #[test]
    fn uncompressed_structures() {
        let c = PackConfig::from_toml_str("compress_structures = false").unwrap();
        assert_eq!(c.codec_options().compression, Compression::None);
    }

    #[test]
    fn reject_bad_level() {
        let err = PackConfig::from_toml_str("compression_level = 12").unwrap_err();
        assert!(matches!(err, PackError::Config(_)));
    }

    #[test]
    fn reject_bad_syntax() {
        assert!(PackConfig::from_toml_str("json_indent = ").is_err());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcpack.toml");
        std::fs::write(&path, "compression_level = 9\n").unwrap();
        assert_eq!(PackConfig::from_file(&path).unwrap().compression_level, 9);
    }
}

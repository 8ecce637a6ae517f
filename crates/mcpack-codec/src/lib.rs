//! Item codecs for mcpack.
//!
//! One entry point, [`ItemCodec`], switching on the kind's
//! [`Encoding`](mcpack_types::Encoding):
//!
//! - **Json**: serde-modeled attributes, `None` omitted, unknown keys kept
//! - **Text**: the file is the function body, byte for byte
//! - **BinaryTag**: gzip-framed binary tag document via [`mcpack_nbt`]

pub mod error;
pub mod json;
pub mod structure;

use mcpack_nbt::{Compression, NbtError, NbtFile};
use mcpack_types::{
    Advancement, Function, Item, ItemKind, ItemRef, LootTable, Recipe, TagItem,
};

pub use error::{CodecError, CodecResult};
pub use json::write_pretty;

/// Encoding knobs shared by every item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Spaces per indent level in JSON output.
    pub json_indent: usize,
    /// Framing of structure files.
    pub compression: Compression,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            json_indent: 4,
            compression: Compression::Gzip(6),
        }
    }
}

/// Encodes items to file bytes and decodes file bytes to items.
#[derive(Clone, Debug, Default)]
pub struct ItemCodec {
    options: CodecOptions,
}

impl ItemCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode an item into the bytes of its file.
    pub fn encode(&self, item: ItemRef<'_>) -> CodecResult<Vec<u8>> {
        let indent = self.options.json_indent;
        let kind = item.kind();
        match item {
            ItemRef::Advancement(a) => json::encode(kind, a, &a.extra, Advancement::FIELDS, indent),
            ItemRef::Function(f) => Ok(f.body.as_bytes().to_vec()),
            ItemRef::LootTable(t) => json::encode(kind, t, &t.extra, LootTable::FIELDS, indent),
            ItemRef::Recipe(r) => json::encode_recipe(r, indent),
            ItemRef::Structure(s) => {
                let root = structure::to_compound(s)?;
                NbtFile::new(root)
                    .with_compression(self.options.compression)
                    .to_bytes()
                    .map_err(|e| nbt_error(kind, e))
            }
            ItemRef::BlockTag(t)
            | ItemRef::ItemTag(t)
            | ItemRef::FluidTag(t)
            | ItemRef::FunctionTag(t) => json::encode(kind, t, &t.extra, TagItem::FIELDS, indent),
        }
    }

    /// Decode the bytes of a file holding an item of `kind`.
    pub fn decode(&self, kind: ItemKind, data: &[u8]) -> CodecResult<Item> {
        let item = match kind {
            ItemKind::Advancement => Item::Advancement(json::decode::<Advancement>(kind, data)?),
            ItemKind::Function => {
                let body = std::str::from_utf8(data)
                    .map_err(|e| CodecError::malformed(kind, e.to_string()))?;
                Item::Function(Function::new(body))
            }
            ItemKind::LootTable => Item::LootTable(json::decode::<LootTable>(kind, data)?),
            ItemKind::Recipe => Item::Recipe(json::decode::<Recipe>(kind, data)?),
            ItemKind::Structure => {
                let file = NbtFile::from_bytes(data).map_err(|e| nbt_error(kind, e))?;
                Item::Structure(structure::from_compound(file.root)?)
            }
            ItemKind::BlockTag => Item::BlockTag(json::decode(kind, data)?),
            ItemKind::ItemTag => Item::ItemTag(json::decode(kind, data)?),
            ItemKind::FluidTag => Item::FluidTag(json::decode(kind, data)?),
            ItemKind::FunctionTag => Item::FunctionTag(json::decode(kind, data)?),
        };
        Ok(item)
    }
}

fn nbt_error(kind: ItemKind, err: NbtError) -> CodecError {
    if err.is_encode_error() {
        CodecError::Unencodable {
            kind,
            reason: err.to_string(),
        }
    } else {
        CodecError::Malformed {
            kind,
            reason: err.to_string(),
        }
    }
}

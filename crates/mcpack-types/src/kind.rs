use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// How the bytes of an item file are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Structured JSON document.
    Json,
    /// The whole file is the item's text body.
    Text,
    /// gzip-framed binary tag document.
    BinaryTag,
}

/// The closed set of item kinds a namespace can hold.
///
/// This is the single registry consulted for on-disk layout: the folder under
/// a namespace root, the file extension, and the encoding strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Advancement,
    Function,
    LootTable,
    Recipe,
    Structure,
    BlockTag,
    ItemTag,
    FluidTag,
    FunctionTag,
}

impl ItemKind {
    /// Every kind, in dump order.
    pub const ALL: [ItemKind; 9] = [
        Self::Advancement,
        Self::Function,
        Self::LootTable,
        Self::Recipe,
        Self::Structure,
        Self::BlockTag,
        Self::ItemTag,
        Self::FluidTag,
        Self::FunctionTag,
    ];

    /// Folder relative to the namespace root, `/`-separated.
    pub fn folder(&self) -> &'static str {
        match self {
            Self::Advancement => "advancements",
            Self::Function => "functions",
            Self::LootTable => "loot_tables",
            Self::Recipe => "recipes",
            Self::Structure => "structures",
            Self::BlockTag => "tags/blocks",
            Self::ItemTag => "tags/items",
            Self::FluidTag => "tags/fluids",
            Self::FunctionTag => "tags/functions",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Function => ".mcfunction",
            Self::Structure => ".nbt",
            _ => ".json",
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Function => Encoding::Text,
            Self::Structure => Encoding::BinaryTag,
            _ => Encoding::Json,
        }
    }

    /// Snake-case singular name, e.g. `loot_table`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Advancement => "advancement",
            Self::Function => "function",
            Self::LootTable => "loot_table",
            Self::Recipe => "recipe",
            Self::Structure => "structure",
            Self::BlockTag => "block_tag",
            Self::ItemTag => "item_tag",
            Self::FluidTag => "fluid_tag",
            Self::FunctionTag => "function_tag",
        }
    }

    /// Name of the matching collection on a namespace, e.g. `loot_tables`.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Advancement => "advancements",
            Self::Function => "functions",
            Self::LootTable => "loot_tables",
            Self::Recipe => "recipes",
            Self::Structure => "structures",
            Self::BlockTag => "block_tags",
            Self::ItemTag => "item_tags",
            Self::FluidTag => "fluid_tags",
            Self::FunctionTag => "function_tags",
        }
    }

    /// True for the four kinds sharing the `tags/` folder.
    pub fn is_tag(&self) -> bool {
        matches!(
            self,
            Self::BlockTag | Self::ItemTag | Self::FluidTag | Self::FunctionTag
        )
    }

    /// Look a kind up by its folder, e.g. `recipes` or `tags/fluids`.
    pub fn from_folder(folder: &str) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|k| k.folder() == folder)
            .ok_or_else(|| TypeError::UnsupportedKind(folder.to_string()))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = TypeError;

    /// Accepts the singular name, the plural collection name, or the folder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s || k.plural() == s || k.folder() == s)
            .ok_or_else(|| TypeError::UnsupportedKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folders_are_unique() {
        let mut folders: Vec<&str> = ItemKind::ALL.iter().map(|k| k.folder()).collect();
        folders.sort();
        folders.dedup();
        assert_eq!(folders.len(), ItemKind::ALL.len());
    }

    #[test]
    fn extensions_follow_encoding() {
        assert_eq!(ItemKind::Function.extension(), ".mcfunction");
        assert_eq!(ItemKind::Structure.extension(), ".nbt");
        for kind in ItemKind::ALL {
            if kind.encoding() == Encoding::Json {
                assert_eq!(kind.extension(), ".json");
            }
        }
    }

    #[test]
    fn tag_kinds_share_tags_folder() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.is_tag(), kind.folder().starts_with("tags/"));
        }
    }

    #[test]
    fn from_folder_roundtrip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_folder(kind.folder()).unwrap(), kind);
        }
    }

    #[test]
    fn from_folder_unknown() {
        let err = ItemKind::from_folder("tags/entity_types").unwrap_err();
        assert_eq!(err, TypeError::UnsupportedKind("tags/entity_types".into()));
        assert!(ItemKind::from_folder("tags").is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("loot_table".parse::<ItemKind>().unwrap(), ItemKind::LootTable);
        assert_eq!("block_tags".parse::<ItemKind>().unwrap(), ItemKind::BlockTag);
        assert_eq!("tags/items".parse::<ItemKind>().unwrap(), ItemKind::ItemTag);
        assert!("dimension".parse::<ItemKind>().is_err());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(ItemKind::FunctionTag.to_string(), "function_tag");
    }
}

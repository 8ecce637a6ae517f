use std::collections::BTreeMap;

use mcpack_types::{
    Advancement, Function, Item, ItemKind, ItemRef, LootTable, Recipe, Structure, TagItem,
};

use crate::error::PackResult;
use crate::key::validate_item_path;

/// Nine kind-specific item mappings scoped to one namespace.
///
/// Keys are slash-separated relative paths. The same path may exist in
/// several mappings at once since each kind has its own folder on disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Namespace {
    pub advancements: BTreeMap<String, Advancement>,
    pub functions: BTreeMap<String, Function>,
    pub loot_tables: BTreeMap<String, LootTable>,
    pub recipes: BTreeMap<String, Recipe>,
    pub structures: BTreeMap<String, Structure>,
    pub block_tags: BTreeMap<String, TagItem>,
    pub item_tags: BTreeMap<String, TagItem>,
    pub fluid_tags: BTreeMap<String, TagItem>,
    pub function_tags: BTreeMap<String, TagItem>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item under `path` in the mapping for its kind.
    ///
    /// Returns the item previously stored at that path and kind, if any.
    pub fn insert(&mut self, path: impl Into<String>, item: impl Into<Item>) -> PackResult<Option<Item>> {
        let path = path.into();
        validate_item_path(&path)?;
        let previous = match item.into() {
            Item::Advancement(v) => self.advancements.insert(path, v).map(Item::Advancement),
            Item::Function(v) => self.functions.insert(path, v).map(Item::Function),
            Item::LootTable(v) => self.loot_tables.insert(path, v).map(Item::LootTable),
            Item::Recipe(v) => self.recipes.insert(path, v).map(Item::Recipe),
            Item::Structure(v) => self.structures.insert(path, v).map(Item::Structure),
            Item::BlockTag(v) => self.block_tags.insert(path, v).map(Item::BlockTag),
            Item::ItemTag(v) => self.item_tags.insert(path, v).map(Item::ItemTag),
            Item::FluidTag(v) => self.fluid_tags.insert(path, v).map(Item::FluidTag),
            Item::FunctionTag(v) => self.function_tags.insert(path, v).map(Item::FunctionTag),
        };
        Ok(previous)
    }

    pub fn get(&self, kind: ItemKind, path: &str) -> Option<ItemRef<'_>> {
        match kind {
            ItemKind::Advancement => self.advancements.get(path).map(ItemRef::Advancement),
            ItemKind::Function => self.functions.get(path).map(ItemRef::Function),
            ItemKind::LootTable => self.loot_tables.get(path).map(ItemRef::LootTable),
            ItemKind::Recipe => self.recipes.get(path).map(ItemRef::Recipe),
            ItemKind::Structure => self.structures.get(path).map(ItemRef::Structure),
            ItemKind::BlockTag => self.block_tags.get(path).map(ItemRef::BlockTag),
            ItemKind::ItemTag => self.item_tags.get(path).map(ItemRef::ItemTag),
            ItemKind::FluidTag => self.fluid_tags.get(path).map(ItemRef::FluidTag),
            ItemKind::FunctionTag => self.function_tags.get(path).map(ItemRef::FunctionTag),
        }
    }

    pub fn remove(&mut self, kind: ItemKind, path: &str) -> Option<Item> {
        match kind {
            ItemKind::Advancement => self.advancements.remove(path).map(Item::Advancement),
            ItemKind::Function => self.functions.remove(path).map(Item::Function),
            ItemKind::LootTable => self.loot_tables.remove(path).map(Item::LootTable),
            ItemKind::Recipe => self.recipes.remove(path).map(Item::Recipe),
            ItemKind::Structure => self.structures.remove(path).map(Item::Structure),
            ItemKind::BlockTag => self.block_tags.remove(path).map(Item::BlockTag),
            ItemKind::ItemTag => self.item_tags.remove(path).map(Item::ItemTag),
            ItemKind::FluidTag => self.fluid_tags.remove(path).map(Item::FluidTag),
            ItemKind::FunctionTag => self.function_tags.remove(path).map(Item::FunctionTag),
        }
    }

    /// Number of items of one kind.
    pub fn count(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Advancement => self.advancements.len(),
            ItemKind::Function => self.functions.len(),
            ItemKind::LootTable => self.loot_tables.len(),
            ItemKind::Recipe => self.recipes.len(),
            ItemKind::Structure => self.structures.len(),
            ItemKind::BlockTag => self.block_tags.len(),
            ItemKind::ItemTag => self.item_tags.len(),
            ItemKind::FluidTag => self.fluid_tags.len(),
            ItemKind::FunctionTag => self.function_tags.len(),
        }
    }

    /// Total number of items across all kinds.
    pub fn len(&self) -> usize {
        ItemKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item as `(kind, path, item)`, grouped by kind in registry order
    /// and sorted by path within a kind.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, &str, ItemRef<'_>)> + '_ {
        entries(&self.advancements, ItemKind::Advancement, ItemRef::Advancement)
            .chain(entries(&self.functions, ItemKind::Function, ItemRef::Function))
            .chain(entries(&self.loot_tables, ItemKind::LootTable, ItemRef::LootTable))
            .chain(entries(&self.recipes, ItemKind::Recipe, ItemRef::Recipe))
            .chain(entries(&self.structures, ItemKind::Structure, ItemRef::Structure))
            .chain(entries(&self.block_tags, ItemKind::BlockTag, ItemRef::BlockTag))
            .chain(entries(&self.item_tags, ItemKind::ItemTag, ItemRef::ItemTag))
            .chain(entries(&self.fluid_tags, ItemKind::FluidTag, ItemRef::FluidTag))
            .chain(entries(&self.function_tags, ItemKind::FunctionTag, ItemRef::FunctionTag))
    }
}

fn entries<'a, T: 'a>(
    map: &'a BTreeMap<String, T>,
    kind: ItemKind,
    wrap: fn(&'a T) -> ItemRef<'a>,
) -> impl Iterator<Item = (ItemKind, &'a str, ItemRef<'a>)> + 'a {
    map.iter().map(move |(path, v)| (kind, path.as_str(), wrap(v)))
}

use crate::items::{Advancement, Function, LootTable, Recipe, TagItem};
use crate::kind::ItemKind;
use crate::structure::Structure;

/// An owned item of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Advancement(Advancement),
    Function(Function),
    LootTable(LootTable),
    Recipe(Recipe),
    Structure(Structure),
    BlockTag(TagItem),
    ItemTag(TagItem),
    FluidTag(TagItem),
    FunctionTag(TagItem),
}

/// A borrowed item of any kind, as stored inside a namespace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemRef<'a> {
    Advancement(&'a Advancement),
    Function(&'a Function),
    LootTable(&'a LootTable),
    Recipe(&'a Recipe),
    Structure(&'a Structure),
    BlockTag(&'a TagItem),
    ItemTag(&'a TagItem),
    FluidTag(&'a TagItem),
    FunctionTag(&'a TagItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.as_item_ref().kind()
    }

    pub fn as_item_ref(&self) -> ItemRef<'_> {
        match self {
            Self::Advancement(v) => ItemRef::Advancement(v),
            Self::Function(v) => ItemRef::Function(v),
            Self::LootTable(v) => ItemRef::LootTable(v),
            Self::Recipe(v) => ItemRef::Recipe(v),
            Self::Structure(v) => ItemRef::Structure(v),
            Self::BlockTag(v) => ItemRef::BlockTag(v),
            Self::ItemTag(v) => ItemRef::ItemTag(v),
            Self::FluidTag(v) => ItemRef::FluidTag(v),
            Self::FunctionTag(v) => ItemRef::FunctionTag(v),
        }
    }

    /// Shorthand for a function item.
    pub fn function(body: impl Into<String>) -> Self {
        Self::Function(Function::new(body))
    }

    /// Wrap tag attributes as the tag kind given. Returns `None` for non-tag kinds.
    pub fn tag(kind: ItemKind, tag: TagItem) -> Option<Self> {
        match kind {
            ItemKind::BlockTag => Some(Self::BlockTag(tag)),
            ItemKind::ItemTag => Some(Self::ItemTag(tag)),
            ItemKind::FluidTag => Some(Self::FluidTag(tag)),
            ItemKind::FunctionTag => Some(Self::FunctionTag(tag)),
            _ => None,
        }
    }
}

impl ItemRef<'_> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Advancement(_) => ItemKind::Advancement,
            Self::Function(_) => ItemKind::Function,
            Self::LootTable(_) => ItemKind::LootTable,
            Self::Recipe(_) => ItemKind::Recipe,
            Self::Structure(_) => ItemKind::Structure,
            Self::BlockTag(_) => ItemKind::BlockTag,
            Self::ItemTag(_) => ItemKind::ItemTag,
            Self::FluidTag(_) => ItemKind::FluidTag,
            Self::FunctionTag(_) => ItemKind::FunctionTag,
        }
    }

    pub fn to_item(&self) -> Item {
        match *self {
            Self::Advancement(v) => Item::Advancement(v.clone()),
            Self::Function(v) => Item::Function(v.clone()),
            Self::LootTable(v) => Item::LootTable(v.clone()),
            Self::Recipe(v) => Item::Recipe(v.clone()),
            Self::Structure(v) => Item::Structure(v.clone()),
            Self::BlockTag(v) => Item::BlockTag(v.clone()),
            Self::ItemTag(v) => Item::ItemTag(v.clone()),
            Self::FluidTag(v) => Item::FluidTag(v.clone()),
            Self::FunctionTag(v) => Item::FunctionTag(v.clone()),
        }
    }
}

impl From<Advancement> for Item {
    fn from(v: Advancement) -> Self {
        Self::Advancement(v)
    }
}

impl From<Function> for Item {
    fn from(v: Function) -> Self {
        Self::Function(v)
    }
}

impl From<LootTable> for Item {
    fn from(v: LootTable) -> Self {
        Self::LootTable(v)
    }
}

impl From<Recipe> for Item {
    fn from(v: Recipe) -> Self {
        Self::Recipe(v)
    }
}

impl From<Structure> for Item {
    fn from(v: Structure) -> Self {
        Self::Structure(v)
    }
}

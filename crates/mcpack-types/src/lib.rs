//! Foundation types for mcpack.
//!
//! Every other mcpack crate depends on `mcpack-types`.
//!
//! # Key Types
//!
//! - [`ItemKind`]: the closed registry of nine item kinds with their folder,
//!   extension and [`Encoding`]
//! - [`Item`] / [`ItemRef`]: owned and borrowed tagged item variants
//! - [`Advancement`], [`Function`], [`LootTable`], [`Recipe`], [`TagItem`]:
//!   JSON and text item attributes with explicit defaults
//! - [`Structure`], [`BlockState`], [`Block`], [`Entity`]: structure templates

pub mod error;
pub mod item;
pub mod items;
pub mod kind;
pub mod structure;

pub use error::TypeError;
pub use item::{Item, ItemRef};
pub use items::{
    Advancement, Function, JsonObject, LootTable, Recipe, TagItem, DEFAULT_LOOT_TABLE_TYPE,
    DEFAULT_RECIPE_TYPE,
};
pub use kind::{Encoding, ItemKind};
pub use structure::{Block, BlockState, Entity, Structure, DATA_VERSION};

//! Data pack engine for mcpack.
//!
//! Converts between a [`DataPack`] item graph and its directory tree:
//!
//! ```text
//! <pack>/
//!   pack.mcmeta
//!   data/<namespace>/advancements/<path>.json
//!                    functions/<path>.mcfunction
//!                    loot_tables/<path>.json
//!                    recipes/<path>.json
//!                    structures/<path>.nbt
//!                    tags/{blocks,items,fluids,functions}/<path>.json
//! ```
//!
//! ```no_run
//! use mcpack_pack::DataPack;
//! use mcpack_types::Function;
//!
//! let mut pack = DataPack::new("my_pack", "An example pack");
//! pack.insert("my_pack:hello", Function::new("say hello"))?;
//! let dir = pack.dump("/tmp/packs", true)?;
//! let loaded = DataPack::load(&dir)?;
//! assert_eq!(loaded, pack);
//! # Ok::<(), mcpack_pack::PackError>(())
//! ```

pub mod config;
pub mod datapack;
pub mod error;
pub mod key;
pub mod layout;
pub mod meta;
pub mod namespace;

pub use config::PackConfig;
pub use datapack::{DataPack, DEFAULT_PACK_FORMAT};
pub use error::{PackError, PackResult};
pub use key::ItemKey;
pub use layout::{item_path, parse_item_path, ItemLocation};
pub use meta::PackMeta;
pub use namespace::Namespace;

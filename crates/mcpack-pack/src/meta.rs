//! Root metadata document (`pack.mcmeta`).
//!
//! ```json
//! {
//!     "pack": {
//!         "pack_format": 1,
//!         "description": "..."
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSection {
    pub pack_format: i32,
    #[serde(default)]
    pub description: String,
}

impl PackMeta {
    pub fn new(description: impl Into<String>, pack_format: i32) -> Self {
        Self {
            pack: PackSection {
                pack_format,
                description: description.into(),
            },
        }
    }
}

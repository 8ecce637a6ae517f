//! On-disk layout of a data pack.
//!
//! ```text
//! <pack>/
//!   pack.mcmeta
//!   data/<namespace>/<kind folder>/<path><kind extension>
//! ```
//!
//! The `tags` folder is shared by four kinds and is disambiguated by its
//! second segment (`blocks`, `items`, `fluids`, `functions`).

use std::path::{Component, Path, PathBuf};

use mcpack_types::ItemKind;

use crate::key::{validate_item_path, validate_namespace};

/// Root metadata file name.
pub const METADATA_FILE: &str = "pack.mcmeta";

/// Directory holding every namespace.
pub const DATA_DIR: &str = "data";

/// Where a file lives in the item graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemLocation {
    pub namespace: String,
    pub path: String,
    pub kind: ItemKind,
}

/// File path of an item inside the pack rooted at `root`.
pub fn item_path(root: &Path, namespace: &str, path: &str, kind: ItemKind) -> PathBuf {
    let mut out = root.join(DATA_DIR).join(namespace);
    out.extend(kind.folder().split('/'));
    let (dirs, file) = match path.rsplit_once('/') {
        Some((dirs, file)) => (Some(dirs), file),
        None => (None, path),
    };
    if let Some(dirs) = dirs {
        out.extend(dirs.split('/'));
    }
    out.push(format!("{file}{}", kind.extension()));
    out
}

/// Inverse of [`item_path`], relative to the pack's `data` directory.
///
/// Returns `None` for anything that is not an item file: files outside a
/// kind folder, unknown `tags/<sub>` folders, the wrong extension, or a
/// name that would not be a valid item path.
pub fn parse_item_path(data_dir: &Path, file: &Path) -> Option<ItemLocation> {
    let relative = file.strip_prefix(data_dir).ok()?;
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<&str>>>()?;

    let (namespace, rest) = parts.split_first()?;
    let (kind, rest) = match rest {
        ["tags", sub, rest @ ..] => (ItemKind::from_folder(&format!("tags/{sub}")).ok()?, rest),
        [folder, rest @ ..] => (ItemKind::from_folder(folder).ok()?, rest),
        [] => return None,
    };

    let (file_name, dirs) = rest.split_last()?;
    let stem = file_name.strip_suffix(kind.extension())?;
    let mut path = dirs.join("/");
    if !path.is_empty() {
        path.push('/');
    }
    path.push_str(stem);

    validate_namespace(namespace).ok()?;
    validate_item_path(&path).ok()?;
    Some(ItemLocation {
        namespace: namespace.to_string(),
        path,
        kind,
    })
}

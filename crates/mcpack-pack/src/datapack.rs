use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mcpack_codec::{write_pretty, ItemCodec};
use mcpack_types::{Item, ItemKind, ItemRef};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::key::{validate_item_path, validate_namespace, validate_pack_name, ItemKey};
use crate::layout::{self, DATA_DIR, METADATA_FILE};
use crate::meta::PackMeta;
use crate::namespace::Namespace;

/// Default `pack_format` for new packs.
pub const DEFAULT_PACK_FORMAT: i32 = 1;

/// A whole data pack as an in-memory item graph.
///
/// `dump` and `load` are synchronous and hold no handle to disk between
/// calls. A `DataPack` must not be mutated from another thread while it is
/// being dumped; the borrow checker enforces this for safe code, and callers
/// sharing a pack behind a lock must hold it for the whole call.
///
/// Filesystem writes are not transactional. A failed `dump` leaves whatever
/// it had already written in place.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPack {
    /// Directory name of the pack under the dump target.
    pub name: String,
    pub description: String,
    pub pack_format: i32,
    pub namespaces: BTreeMap<String, Namespace>,
}

impl DataPack {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            pack_format: DEFAULT_PACK_FORMAT,
            namespaces: BTreeMap::new(),
        }
    }

    pub fn with_pack_format(mut self, pack_format: i32) -> Self {
        self.pack_format = pack_format;
        self
    }

    /// Look up a namespace without creating it.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Get a namespace, creating an empty one if it is absent.
    pub fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        self.namespaces.entry(name.to_string()).or_default()
    }

    /// Replace a whole namespace, returning the previous one.
    pub fn insert_namespace(
        &mut self,
        name: impl Into<String>,
        namespace: Namespace,
    ) -> PackResult<Option<Namespace>> {
        let name = name.into();
        validate_namespace(&name)?;
        Ok(self.namespaces.insert(name, namespace))
    }

    /// Store an item under a `namespace:path` key.
    ///
    /// The namespace is created if needed; the item's own kind selects the
    /// mapping. Returns the item previously stored there, if any.
    pub fn insert(&mut self, key: &str, item: impl Into<Item>) -> PackResult<Option<Item>> {
        let key = ItemKey::parse(key)?;
        self.namespace_mut(&key.namespace).insert(key.path, item)
    }

    pub fn get(&self, key: &str, kind: ItemKind) -> PackResult<Option<ItemRef<'_>>> {
        let key = ItemKey::parse(key)?;
        Ok(self
            .namespace(&key.namespace)
            .and_then(|ns| ns.get(kind, &key.path)))
    }

    /// Remove and return the item of `kind` stored under `key`.
    pub fn remove(&mut self, key: &str, kind: ItemKind) -> PackResult<Option<Item>> {
        let key = ItemKey::parse(key)?;
        Ok(self
            .namespaces
            .get_mut(&key.namespace)
            .and_then(|ns| ns.remove(kind, &key.path)))
    }

    /// Total number of items across all namespaces.
    pub fn item_count(&self) -> usize {
        self.namespaces.values().map(Namespace::len).sum()
    }

    /// Every item as `(namespace, kind, path, item)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ItemKind, &str, ItemRef<'_>)> + '_ {
        self.namespaces.iter().flat_map(|(name, ns)| {
            ns.iter()
                .map(move |(kind, path, item)| (name.as_str(), kind, path, item))
        })
    }

    // -----------------------------------------------------------------------
    // Dump
    // -----------------------------------------------------------------------

    /// Write the pack to `dir/<name>` with default settings.
    pub fn dump(&self, dir: impl AsRef<Path>, overwrite: bool) -> PackResult<PathBuf> {
        self.dump_with(dir, overwrite, &PackConfig::default())
    }

    /// Write the pack to `dir/<name>`, returning the pack directory.
    ///
    /// Fails with [`PackError::AlreadyExists`] if the pack directory exists
    /// and `overwrite` is false. With `overwrite` the existing directory is
    /// removed first, so nothing from a previous dump survives.
    pub fn dump_with(
        &self,
        dir: impl AsRef<Path>,
        overwrite: bool,
        config: &PackConfig,
    ) -> PackResult<PathBuf> {
        config.validate()?;
        self.validate_keys()?;

        let root = dir.as_ref().join(&self.name);
        info!(pack = %self.name, target = %root.display(), "dumping data pack");

        if root.exists() {
            if !overwrite {
                return Err(PackError::AlreadyExists(root));
            }
            debug!(target = %root.display(), "removing existing pack");
            if root.is_dir() {
                fs::remove_dir_all(&root)?;
            } else {
                fs::remove_file(&root)?;
            }
        }
        fs::create_dir_all(&root)?;

        let meta = PackMeta::new(self.description.clone(), self.pack_format);
        let meta_bytes = write_pretty(&meta, config.json_indent)
            .map_err(|e| PackError::Io(std::io::Error::other(e)))?;
        fs::write(root.join(METADATA_FILE), meta_bytes)?;

        let codec = ItemCodec::new(config.codec_options());
        let data_dir = root.join(DATA_DIR);
        fs::create_dir_all(&data_dir)?;

        let mut written = 0usize;
        for (ns_name, ns) in &self.namespaces {
            fs::create_dir_all(data_dir.join(ns_name))?;
            for (kind, path, item) in ns.iter() {
                let file = layout::item_path(&root, ns_name, path, kind);
                let bytes = codec
                    .encode(item)
                    .map_err(|e| PackError::from_codec(e, &file))?;
                if let Some(parent) = file.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&file, &bytes)?;
                debug!(file = %file.display(), bytes = bytes.len(), "wrote item");
                written += 1;
            }
        }

        info!(
            pack = %self.name,
            namespaces = self.namespaces.len(),
            items = written,
            "data pack dumped"
        );
        Ok(root)
    }

    /// Reject unsafe names before anything touches the disk.
    fn validate_keys(&self) -> PackResult<()> {
        validate_pack_name(&self.name)?;
        for (ns_name, ns) in &self.namespaces {
            validate_namespace(ns_name)?;
            for (_, path, _) in ns.iter() {
                validate_item_path(path)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Read a pack directory.
    ///
    /// The pack name is the directory's final component. Every directory
    /// directly under `data/` becomes a namespace. Files that do not resolve
    /// to an item are skipped; an item file that fails to decode aborts the
    /// whole load.
    pub fn load(pack_dir: impl AsRef<Path>) -> PackResult<Self> {
        let root = pack_dir.as_ref();
        info!(source = %root.display(), "loading data pack");

        let meta = read_meta(root)?;
        let mut pack = Self::new(pack_name(root)?, meta.pack.description)
            .with_pack_format(meta.pack.pack_format);

        let data_dir = root.join(DATA_DIR);
        if !data_dir.is_dir() {
            debug!(dir = %data_dir.display(), "no data directory");
            info!(pack = %pack.name, namespaces = 0, items = 0, "data pack loaded");
            return Ok(pack);
        }

        for entry in fs::read_dir(&data_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                trace!(path = %entry.path().display(), "skipping file in data directory");
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) if validate_namespace(name).is_ok() => {
                    pack.namespace_mut(name);
                }
                _ => debug!(path = %entry.path().display(), "skipping invalid namespace directory"),
            }
        }

        let codec = ItemCodec::default();
        let mut read = 0usize;
        let walker = WalkDir::new(&data_dir)
            .min_depth(2)
            .follow_links(false)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| PackError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file = entry.path();
            let Some(location) = layout::parse_item_path(&data_dir, file) else {
                debug!(path = %file.display(), "skipping stray file");
                continue;
            };
            let bytes = fs::read(file)?;
            let item = codec
                .decode(location.kind, &bytes)
                .map_err(|e| PackError::from_codec(e, file))?;
            pack.namespace_mut(&location.namespace)
                .insert(location.path, item)?;
            debug!(path = %file.display(), kind = %location.kind, "read item");
            read += 1;
        }

        info!(
            pack = %pack.name,
            namespaces = pack.namespaces.len(),
            items = read,
            "data pack loaded"
        );
        Ok(pack)
    }
}

fn read_meta(root: &Path) -> PackResult<PackMeta> {
    let path = root.join(METADATA_FILE);
    if !path.is_file() {
        return Err(PackError::NotFound(path));
    }
    let bytes = fs::read(&path)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(path = %path.display(), error = %e, "invalid pack metadata");
        PackError::NotFound(path)
    })
}

fn pack_name(root: &Path) -> PackResult<String> {
    let name = match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => fs::canonicalize(root)?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpack_types::{Function, TagItem};

    #[test]
    fn insert_by_key() {
        let mut pack = DataPack::new("demo", "");
        pack.insert("ns:foo/bar", Function::new("say hi")).unwrap();
        assert_eq!(pack.namespaces["ns"].functions["foo/bar"].body, "say hi");
    }

    #[test]
    fn insert_rejects_bad_keys() {
        let mut pack = DataPack::new("demo", "");
        for key in ["foo", "ns:../x", "ns:a/../../b"] {
            let err = pack.insert(key, Item::function("")).unwrap_err();
            assert!(matches!(err, PackError::InvalidKey { .. }), "{key}");
        }
        assert!(pack.namespaces.is_empty());
    }

    #[test]
    fn namespace_mut_creates_empty() {
        let mut pack = DataPack::new("demo", "");
        assert!(pack.namespace("fresh").is_none());
        assert!(pack.namespace_mut("fresh").is_empty());
        assert!(pack.namespace("fresh").is_some());
    }

    #[test]
    fn move_between_namespaces() {
        let mut pack = DataPack::new("demo", "");
        pack.insert("a:tick", Item::FunctionTag(TagItem::new(["a:main"])))
            .unwrap();
        let item = pack.remove("a:tick", ItemKind::FunctionTag).unwrap().unwrap();
        pack.insert("b:tick", item).unwrap();
        assert!(pack.get("a:tick", ItemKind::FunctionTag).unwrap().is_none());
        assert!(pack.get("b:tick", ItemKind::FunctionTag).unwrap().is_some());
        assert_eq!(pack.item_count(), 1);
    }

    #[test]
    fn insert_namespace_replaces() {
        let mut pack = DataPack::new("demo", "");
        pack.insert("ns:x", Item::function("")).unwrap();
        let old = pack.insert_namespace("ns", Namespace::new()).unwrap().unwrap();
        assert_eq!(old.len(), 1);
        assert!(pack.namespaces["ns"].is_empty());
        assert!(pack.insert_namespace("a/b", Namespace::new()).is_err());
    }

    #[test]
    fn dump_rejects_unsafe_names_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut pack = DataPack::new("demo", "");
        pack.namespace_mut("ns")
            .functions
            .insert("../../escape".into(), Function::new(""));
        let err = pack.dump(dir.path(), false).unwrap_err();
        assert!(matches!(err, PackError::InvalidKey { .. }));
        assert!(!dir.path().join("demo").exists());
    }

    #[test]
    fn iter_spans_namespaces() {
        let mut pack = DataPack::new("demo", "");
        pack.insert("a:x", Item::function("")).unwrap();
        pack.insert("b:y", Item::function("")).unwrap();
        let keys: Vec<_> = pack
            .iter()
            .map(|(ns, _, path, _)| format!("{ns}:{path}"))
            .collect();
        assert_eq!(keys, vec!["a:x", "b:y"]);
    }
}

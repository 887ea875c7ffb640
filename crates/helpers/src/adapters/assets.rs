//! Asset sources: a directory on disk and an in-memory table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use funchelper_ports::AssetPort;

/// Assets stored as files beneath a root directory.
///
/// Names are relative, `/`-separated paths such as `"config.json"` or
/// `"fonts/title.ttf"`. Names that would leave the root (`..`, absolute
/// paths, drive prefixes) are rejected with `InvalidInput`.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let relative = Path::new(name);
        let contained = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid asset name: {name:?}"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetPort for DirectoryAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        let path = self.resolve(name)?;
        tracing::debug!(asset = name, path = %path.display(), "Opening asset");
        Ok(Box::new(File::open(path)?))
    }
}

/// Assets held in memory, e.g. embedded with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    entries: HashMap<String, Arc<[u8]>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into().into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetPort for MemoryAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        let bytes = self.entries.get(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("asset not found: {name}"))
        })?;
        Ok(Box::new(Cursor::new(Arc::clone(bytes))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(port: &dyn AssetPort, name: &str) -> io::Result<String> {
        let mut text = String::new();
        port.open(name)?.read_to_string(&mut text)?;
        Ok(text)
    }

    #[test]
    fn memory_assets_serve_registered_bytes() {
        let assets = MemoryAssets::new().with_asset("a.txt", "alpha");
        assert_eq!(assets.len(), 1);
        assert!(!assets.is_empty());
        assert_eq!(read_all(&assets, "a.txt").unwrap(), "alpha");
        // Each open gets a fresh stream
        assert_eq!(read_all(&assets, "a.txt").unwrap(), "alpha");
    }

    #[test]
    fn memory_assets_missing_is_not_found() {
        let err = read_all(&MemoryAssets::new(), "a.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn directory_assets_reject_escaping_names() {
        let assets = DirectoryAssets::new("/srv/assets");
        for name in ["", "../secret", "a/../../b", "/etc/passwd"] {
            let err = assets.resolve(name).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{name:?}");
        }
    }

    #[test]
    fn directory_assets_resolve_nested_names() {
        let assets = DirectoryAssets::new("/srv/assets");
        assert_eq!(
            assets.resolve("fonts/title.ttf").unwrap(),
            Path::new("/srv/assets/fonts/title.ttf")
        );
        assert_eq!(
            assets.resolve("./config.json").unwrap(),
            Path::new("/srv/assets/./config.json")
        );
    }
}

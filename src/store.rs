//! Provides named acquisition of geometry assets.
//!
//! The parser itself only needs something it can read to exhaustion; this
//! module supplies the "fetch a resource by name" half, in the manner of an
//! application asset bundle. [`DirStore`] resolves names inside a root
//! directory, and [`MemoryStore`] serves embedded byte buffers (useful for
//! tests and packaged assets).

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::PathBuf;

/// A source of named readable assets.
///
/// # Examples
/// ```
/// use unweld::store::{AssetStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.insert("flag.obj", b"v 0 0 0\n".to_vec());
/// assert!(store.open("flag.obj").is_ok());
/// assert!(store.open("missing.obj").is_err());
/// ```
pub trait AssetStore {
    /// Opens the named asset for reading.
    ///
    /// # Errors
    /// Returns an IO error if the asset does not exist or cannot be opened.
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>>;
}

/// An asset store rooted at a filesystem directory.
///
/// # Examples
/// ```
/// use unweld::store::{AssetStore, DirStore};
///
/// let store = DirStore::new("/nonexistent/assets");
/// assert!(store.open("flag.obj").is_err());
/// ```
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Creates a store that resolves asset names relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirStore {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>> {
        let file = std::fs::File::open(self.root.join(name))?;
        Ok(Box::new(file))
    }
}

/// An in-memory asset store mapping names to byte buffers.
///
/// # Examples
/// ```
/// use std::io::Read;
///
/// use unweld::store::{AssetStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.insert("flag.obj", b"# placeholder\n".to_vec());
///
/// let mut text = String::new();
/// store.open("flag.obj").unwrap().read_to_string(&mut text).unwrap();
/// assert!(text.starts_with('#'));
/// ```
#[derive(Default)]
pub struct MemoryStore {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an asset under the given name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) {
        self.assets.insert(name.into(), data);
    }
}

impl AssetStore for MemoryStore {
    fn open(&self, name: &str) -> std::io::Result<Box<dyn Read + '_>> {
        match self.assets.get(name) {
            Some(data) => Ok(Box::new(Cursor::new(data.as_slice()))),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no asset named `{}`", name),
            )),
        }
    }
}

use crate::error::LoaderError;
use crate::loader::BundleLoader;
use fxhash::FxHashMap;
use lingo_domain::{BundleEntries, ResourceValue};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// A loader backed by an in-process map of locator → entries.
///
/// Useful for embedding resources in a binary and for tests. Bundles can be
/// swapped at runtime; the registry sees the new content on its next load.
///
/// # Example
/// ```rust
/// use lingo_loader::{BundleLoader, MemoryLoader};
///
/// let loader = MemoryLoader::new().with("en/strings", [("greeting", "Hello")]);
/// assert_eq!(loader.load("en/strings").unwrap()["greeting"].as_str(), Some("Hello"));
/// assert!(loader.load("fr/strings").is_err());
/// assert_eq!(loader.load_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLoader {
    bundles: RwLock<FxHashMap<String, BundleEntries>>,
    loads: AtomicUsize,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with<I, K, V>(self, path: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ResourceValue>,
    {
        self.insert(path, entries);
        self
    }

    /// Stores a bundle under `path`, returning the bundle it replaced.
    pub fn insert<I, K, V>(&self, path: impl Into<String>, entries: I) -> Option<BundleEntries>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ResourceValue>,
    {
        let entries = entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        self.bundles.write().insert(path.into(), entries)
    }

    pub fn remove(&self, path: &str) -> Option<BundleEntries> {
        self.bundles.write().remove(path)
    }

    /// Number of [`load`](BundleLoader::load) calls so far, failed ones included.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl BundleLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError> {
        self.loads.fetch_add(1, Ordering::Relaxed);

        let entries = self.bundles.read().get(path).cloned().ok_or_else(|| LoaderError::NotFound {
            message: path.to_owned().into(),
            context: Some("No in-memory bundle under this locator".into()),
        })?;

        trace!(path, entries = entries.len(), "Bundle loaded from memory");
        Ok(entries)
    }
}

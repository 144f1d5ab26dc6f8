use crate::error::{LoaderError, LoaderErrorExt};
use crate::format::Format;
use crate::loader::BundleLoader;
use lingo_domain::BundleEntries;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Optional scheme accepted in front of locators.
pub const RESOURCE_SCHEME: &str = "res://";

/// Loads `.json` and `.toml` bundles from a directory tree.
///
/// Locators are `/`-separated paths relative to the root, optionally prefixed
/// with [`RESOURCE_SCHEME`]. Locators never escape the root: absolute paths
/// and `..` segments are rejected before touching the filesystem.
///
/// # Example
/// ```rust
/// use lingo_loader::{BundleLoader, FsLoader};
///
/// # let tmp = tempfile::tempdir().unwrap();
/// std::fs::write(tmp.path().join("icons.toml"), "save = \"disk\"\n").unwrap();
///
/// let loader = FsLoader::new(tmp.path());
/// let entries = loader.load("res://icons.toml").unwrap();
/// assert_eq!(entries["save"].as_str(), Some("disk"));
/// ```
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a locator to a file below the root.
    ///
    /// # Errors
    /// Returns [`LoaderError::Malformed`] for empty, absolute or escaping locators.
    pub fn resolve(&self, locator: &str) -> Result<PathBuf, LoaderError> {
        let relative = locator.strip_prefix(RESOURCE_SCHEME).unwrap_or(locator);
        let mut resolved = PathBuf::new();

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {},
                Component::ParentDir => {
                    return Err(LoaderError::Malformed {
                        message: locator.to_owned().into(),
                        context: Some("Locator must not contain '..'".into()),
                    });
                },
                Component::RootDir | Component::Prefix(_) => {
                    return Err(LoaderError::Malformed {
                        message: locator.to_owned().into(),
                        context: Some("Locator must be relative to the resource root".into()),
                    });
                },
            }
        }

        if resolved.as_os_str().is_empty() {
            return Err(LoaderError::Malformed {
                message: locator.to_owned().into(),
                context: Some("Locator is empty".into()),
            });
        }

        Ok(self.root.join(resolved))
    }
}

impl BundleLoader for FsLoader {
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError> {
        let file = self.resolve(path)?;
        let format = Format::from_path(&file)?;

        let text = match std::fs::read_to_string(&file) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoaderError::NotFound {
                    message: path.to_owned().into(),
                    context: Some(file.display().to_string().into()),
                });
            },
            Err(e) => return Err(e).context(format!("Failed to read {}", file.display())),
        };

        let entries = format.parse(&text)?;
        debug!(path, file = %file.display(), entries = entries.len(), "Bundle loaded from disk");
        Ok(entries)
    }
}

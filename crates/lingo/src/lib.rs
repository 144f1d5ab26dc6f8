//! Facade crate for the lingo workspace.
//! Re-exports the domain, loader, notifier and registry crates and wires a
//! filesystem-backed registry from configuration.
//! Keep this crate thin: it composes other crates, it does not implement
//! registry logic.
//!
//! ## Usage
//! ```rust,no_run
//! use lingo::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config: lingo::domain::config::LingoConfig =
//!     lingo::kernel::config::load_config(Some("lingo.toml"))?;
//! let registry = lingo::open(&config, Some(std::path::Path::new(".")))?;
//!
//! registry.set_active_culture(Some(Culture::parse("en-US")?))?;
//! let title: String = registry.get_resource("title", "strings")?;
//! # Ok(())
//! # }
//! ```

pub use lingo_domain as domain;
pub use lingo_event_bus as events;
pub use lingo_kernel as kernel;
pub use lingo_loader as loader;
pub use lingo_registry as registry;

use lingo_domain::config::LingoConfig;
use lingo_loader::FsLoader;
use lingo_registry::{RegistryError, ResourceRegistry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a typical consumer needs in scope.
pub mod prelude {
    pub use lingo_domain::{
        Culture, CultureChanged, DictionaryDescriptor, FromResource, ResourceValue,
    };
    pub use lingo_event_bus::{EventReceiverExt, SubscriptionId};
    pub use lingo_loader::{BundleLoader, FsLoader, LoaderError, MemoryLoader};
    pub use lingo_registry::{RegistryError, ResolvedBundle, ResourceRegistry};
}

/// Directory the filesystem loader reads from.
///
/// A relative `resources.root` is taken relative to `base_dir` (usually the
/// directory holding the config file) when one is given.
#[must_use]
pub fn resources_root(config: &LingoConfig, base_dir: Option<&Path>) -> PathBuf {
    let root = &config.resources.root;
    match base_dir {
        Some(base) if root.is_relative() => base.join(root),
        _ => root.clone(),
    }
}

/// Builds a registry over [`FsLoader`] from a loaded configuration: the
/// configured culture becomes active and every `[[dictionaries]]` entry is
/// registered.
///
/// # Errors
/// Returns [`RegistryError::Domain`] for invalid entries and
/// [`RegistryError::BundleLoad`] when a bundle cannot be loaded.
pub fn open(config: &LingoConfig, base_dir: Option<&Path>) -> Result<ResourceRegistry, RegistryError> {
    let root = resources_root(config, base_dir);
    debug!(root = %root.display(), dictionaries = config.dictionaries.len(), "Opening resource registry");

    ResourceRegistry::builder().loader(FsLoader::new(root)).config(config)?.build()
}

use crate::error::LoaderError;
use lingo_domain::BundleEntries;
use std::fmt;
use std::sync::Arc;

/// Turns a bundle locator into key → value entries.
///
/// The registry treats locators as opaque strings; interpreting them (file
/// paths, URIs, embedded tables) is entirely up to the implementation.
/// Implementations are called from whichever thread drives the registry, with
/// no registry lock held.
pub trait BundleLoader: fmt::Debug + Send + Sync {
    /// Loads the bundle identified by `path`.
    ///
    /// # Errors
    /// Implementation defined; the registry propagates the error unchanged.
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError>;
}

impl<L: BundleLoader + ?Sized> BundleLoader for Arc<L> {
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError> {
        (**self).load(path)
    }
}

impl<L: BundleLoader + ?Sized> BundleLoader for Box<L> {
    fn load(&self, path: &str) -> Result<BundleEntries, LoaderError> {
        (**self).load(path)
    }
}

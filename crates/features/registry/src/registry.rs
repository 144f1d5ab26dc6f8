//! The registry engine: registration, culture switching and lookups.
//!
//! State is guarded by a single `RwLock` so readers observe descriptors,
//! bundles and the active culture as one consistent unit. Mutations are
//! serialised by a separate writer lock held for the whole operation,
//! notification included, which lets bundle loads run without blocking
//! readers and delivers culture changes in commit order. The writer lock is
//! reentrant so observers may mutate the registry from the notifying thread.

use crate::builder::RegistryBuilder;
use crate::bundle::ResolvedBundle;
use crate::error::{RegistryError, RegistryErrorExt};
use fxhash::FxHashMap;
use lingo_domain::{Culture, CultureChanged, DictionaryDescriptor, FromResource, ResourceValue};
use lingo_event_bus::{ChangeNotifier, SubscriptionId};
use lingo_loader::BundleLoader;
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    active_culture: Option<Culture>,
    descriptors: FxHashMap<String, Arc<DictionaryDescriptor>>,
    bundles: FxHashMap<String, Arc<ResolvedBundle>>,
}

impl RegistryState {
    pub(crate) fn with_culture(active_culture: Option<Culture>) -> Self {
        Self { active_culture, ..Self::default() }
    }
}

#[derive(Debug)]
struct RegistryInner {
    writer: ReentrantMutex<()>,
    state: RwLock<RegistryState>,
    loader: Arc<dyn BundleLoader>,
    notifier: ChangeNotifier<CultureChanged>,
}

/// A culture-aware registry of resource dictionaries.
///
/// Each logical name is bound to one [`DictionaryDescriptor`] and backed by
/// exactly one [`ResolvedBundle`] for the active culture. Changing the culture
/// reloads only the bundles whose resolved path changed, then notifies
/// observers once.
///
/// The handle is reference-counted; clones share the same state.
///
/// # Example
///
/// ```rust
/// use lingo_domain::{Culture, DictionaryDescriptor};
/// use lingo_loader::MemoryLoader;
/// use lingo_registry::{RegistryError, ResourceRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = MemoryLoader::new()
///     .with("ru.json", [("greeting", "Привет")])
///     .with("en.json", [("greeting", "Hello")]);
///
/// let ru = Culture::parse("ru-RU")?;
/// let en = Culture::parse("en-US")?;
/// let strings = DictionaryDescriptor::localized(
///     "strings",
///     ru.clone(),
///     [(ru, "ru.json"), (en.clone(), "en.json")],
/// )?;
///
/// let registry = ResourceRegistry::new(loader);
/// registry.register_dictionary(strings)?;
/// assert_eq!(registry.get_resource::<String>("greeting", "strings")?, "Привет");
///
/// registry.set_active_culture(Some(en))?;
/// assert_eq!(registry.get_resource::<String>("greeting", "strings")?, "Hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    inner: Arc<RegistryInner>,
}

impl ResourceRegistry {
    /// Creates an empty registry with no active culture.
    pub fn new(loader: impl BundleLoader + 'static) -> Self {
        Self::with_state(Arc::new(loader), RegistryState::default())
    }

    /// Starts a typed builder; see [`RegistryBuilder`].
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn with_state(loader: Arc<dyn BundleLoader>, state: RegistryState) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                writer: ReentrantMutex::new(()),
                state: RwLock::new(state),
                loader,
                notifier: ChangeNotifier::new(),
            }),
        }
    }

    /// Binds a descriptor to its name and loads the bundle for the active culture.
    ///
    /// Registering the identical `Arc` again is a no-op. A load failure leaves
    /// the name unregistered.
    ///
    /// # Errors
    /// * [`RegistryError::DuplicateName`] when a different descriptor instance
    ///   already owns the name, even if it is equal by value.
    /// * [`RegistryError::BundleLoad`] when the loader fails.
    pub fn register_dictionary(
        &self,
        descriptor: impl Into<Arc<DictionaryDescriptor>>,
    ) -> Result<(), RegistryError> {
        let descriptor = descriptor.into();
        let name = descriptor.name();
        let _writer = self.inner.writer.lock();

        let culture = {
            let state = self.inner.state.read();
            if let Some(existing) = state.descriptors.get(name) {
                if Arc::ptr_eq(existing, &descriptor) {
                    trace!(dictionary = name, "Dictionary already registered with this descriptor");
                    return Ok(());
                }
                return Err(RegistryError::DuplicateName {
                    message: name.to_owned().into(),
                    context: Some("A different descriptor is registered under this name".into()),
                });
            }
            state.active_culture.clone()
        };

        let path = descriptor.path_for(culture.as_ref());
        let bundle = self.load_bundle(&descriptor, path)?;

        {
            let mut state = self.inner.state.write();
            state.descriptors.insert(name.to_owned(), Arc::clone(&descriptor));
            state.bundles.insert(name.to_owned(), bundle);
        }

        debug!(
            dictionary = name,
            path,
            localized = descriptor.is_localized(),
            "Dictionary registered"
        );
        Ok(())
    }

    /// Registers descriptors in order, stopping at the first failure.
    ///
    /// Descriptors registered before the failure stay registered.
    ///
    /// # Errors
    /// See [`register_dictionary`](Self::register_dictionary).
    pub fn register_all<I, D>(&self, descriptors: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<DictionaryDescriptor>>,
    {
        descriptors.into_iter().try_for_each(|descriptor| self.register_dictionary(descriptor))
    }

    /// Switches the active culture and refreshes every affected bundle.
    ///
    /// Returns `Ok(false)` without side effects when `culture` equals the
    /// current one. Otherwise all changed bundles are loaded first, then the
    /// culture and the new bundles are committed together, and finally
    /// observers receive one [`CultureChanged`]. Bundles whose resolved path
    /// did not change keep their identity.
    ///
    /// Other writers wait until the observers have run, so notifications
    /// arrive in commit order.
    ///
    /// # Errors
    /// [`RegistryError::BundleLoad`] if any load fails. Nothing is committed
    /// and no notification is sent in that case.
    pub fn set_active_culture(&self, culture: Option<Culture>) -> Result<bool, RegistryError> {
        let _writer = self.inner.writer.lock();

        let (previous, mut current_bundles) = {
            let state = self.inner.state.read();
            if state.active_culture == culture {
                trace!(culture = ?culture.as_ref().map(Culture::as_str), "Active culture unchanged");
                return Ok(false);
            }

            let current: Vec<_> = state
                .descriptors
                .iter()
                .filter_map(|(name, descriptor)| {
                    state.bundles.get(name).map(|bundle| (Arc::clone(descriptor), Arc::clone(bundle)))
                })
                .collect();
            (state.active_culture.clone(), current)
        };
        current_bundles.sort_unstable_by(|a, b| a.0.name().cmp(b.0.name()));

        let mut staged = Vec::new();
        for (descriptor, bundle) in &current_bundles {
            let path = descriptor.path_for(culture.as_ref());
            if path == bundle.source_path() {
                continue;
            }

            let fresh = self.load_bundle(descriptor, path).inspect_err(|e| {
                warn!(
                    dictionary = descriptor.name(),
                    path,
                    culture = ?culture.as_ref().map(Culture::as_str),
                    error = %e,
                    "Culture refresh aborted; keeping previous culture and bundles"
                );
            })?;
            staged.push(fresh);
        }

        let swapped = staged.len();
        {
            let mut state = self.inner.state.write();
            state.active_culture.clone_from(&culture);
            for bundle in staged {
                debug!(dictionary = bundle.name(), path = bundle.source_path(), "Bundle swapped");
                state.bundles.insert(bundle.name().to_owned(), bundle);
            }
        }

        info!(
            previous = ?previous.as_ref().map(Culture::as_str),
            current = ?culture.as_ref().map(Culture::as_str),
            swapped,
            "Active culture changed"
        );

        self.inner.notifier.notify(CultureChanged { previous, current: culture });
        Ok(true)
    }

    /// The active culture, `None` when default paths are in use.
    #[must_use]
    pub fn active_culture(&self) -> Option<Culture> {
        self.inner.state.read().active_culture.clone()
    }

    /// Typed lookup of `key` in the dictionary registered as `name`.
    ///
    /// # Errors
    /// * [`RegistryError::DictionaryNotRegistered`] for an unknown name.
    /// * [`RegistryError::ResourceNotFound`] for an unknown key.
    /// * [`RegistryError::TypeMismatch`] when the value does not convert to `T`.
    pub fn get_resource<T: FromResource>(&self, key: &str, name: &str) -> Result<T, RegistryError> {
        let bundle = self.get_dictionary(name)?;
        let value = lookup(&bundle, key)?;

        T::from_resource(value).ok_or_else(|| RegistryError::TypeMismatch {
            message: format!("'{key}' is {}, expected {}", value.type_name(), T::EXPECTED).into(),
            context: Some(format!("Dictionary '{name}'").into()),
        })
    }

    /// Untyped lookup of `key` in the dictionary registered as `name`.
    ///
    /// # Errors
    /// As [`get_resource`](Self::get_resource), minus the type check.
    pub fn get_resource_value(&self, key: &str, name: &str) -> Result<ResourceValue, RegistryError> {
        let bundle = self.get_dictionary(name)?;
        lookup(&bundle, key).cloned()
    }

    /// The bundle currently backing `name`.
    ///
    /// # Errors
    /// [`RegistryError::DictionaryNotRegistered`] for an unknown name.
    pub fn get_dictionary(&self, name: &str) -> Result<Arc<ResolvedBundle>, RegistryError> {
        self.inner.state.read().bundles.get(name).cloned().ok_or_else(|| {
            RegistryError::DictionaryNotRegistered { message: name.to_owned().into(), context: None }
        })
    }

    /// Every registered name, sorted.
    #[must_use]
    pub fn dictionary_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.inner.state.read().descriptors.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<Arc<DictionaryDescriptor>> {
        self.inner.state.read().descriptors.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.state.read().descriptors.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.read().descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.state.read().descriptors.is_empty()
    }

    /// Registers a culture-change observer.
    ///
    /// Observers run synchronously on the thread that changed the culture,
    /// after the new state is committed. They may read from or write to the
    /// registry on that thread; writers on other threads block until every
    /// observer has returned.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CultureChanged) + Send + Sync + 'static,
    {
        self.inner.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.notifier.unsubscribe(id)
    }

    /// A broadcast receiver of culture changes, for async consumers.
    ///
    /// # Errors
    /// [`RegistryError::Notifier`] if the channel cannot be created.
    pub fn subscribe_channel(&self) -> Result<broadcast::Receiver<Arc<CultureChanged>>, RegistryError> {
        self.inner.notifier.subscribe_channel().context("Failed to subscribe to culture changes")
    }

    fn load_bundle(
        &self,
        descriptor: &DictionaryDescriptor,
        path: &str,
    ) -> Result<Arc<ResolvedBundle>, RegistryError> {
        let entries = self
            .inner
            .loader
            .load(path)
            .context(format!("Dictionary '{}' from '{path}'", descriptor.name()))?;

        trace!(dictionary = descriptor.name(), path, entries = entries.len(), "Bundle loaded");
        Ok(Arc::new(ResolvedBundle::new(descriptor.name(), path, entries)))
    }
}

fn lookup<'a>(bundle: &'a ResolvedBundle, key: &str) -> Result<&'a ResourceValue, RegistryError> {
    bundle.get(key).ok_or_else(|| RegistryError::ResourceNotFound {
        message: key.to_owned().into(),
        context: Some(format!("Dictionary '{}' at '{}'", bundle.name(), bundle.source_path()).into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_loader::MemoryLoader;

    fn registry_with(loader: Arc<MemoryLoader>) -> ResourceRegistry {
        ResourceRegistry::new(loader)
    }

    #[test]
    fn failed_registration_leaves_name_unbound() {
        let loader = Arc::new(MemoryLoader::new());
        let registry = registry_with(Arc::clone(&loader));

        let err = registry
            .register_dictionary(DictionaryDescriptor::new("icons", "icons.toml").unwrap())
            .unwrap_err();

        assert_eq!(err.kind(), "BundleLoad");
        assert!(err.to_string().contains("Dictionary 'icons' from 'icons.toml'"));
        assert!(!registry.contains("icons"));
        assert!(registry.get_dictionary("icons").is_err());
    }

    #[test]
    fn state_keys_stay_aligned() {
        let loader = Arc::new(MemoryLoader::new().with("a.json", [("k", 1_i64)]));
        let registry = registry_with(Arc::clone(&loader));

        registry.register_dictionary(DictionaryDescriptor::new("a", "a.json").unwrap()).unwrap();
        let _ = registry.register_dictionary(DictionaryDescriptor::new("b", "b.json").unwrap());

        let state = registry.inner.state.read();
        let mut descriptors: Vec<_> = state.descriptors.keys().collect();
        let mut bundles: Vec<_> = state.bundles.keys().collect();
        descriptors.sort();
        bundles.sort();
        assert_eq!(descriptors, bundles);
    }
}

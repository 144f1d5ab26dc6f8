use crate::error::{RegistryError, RegistryErrorExt};
use crate::registry::{RegistryState, ResourceRegistry};
use lingo_domain::config::LingoConfig;
use lingo_domain::{Culture, DictionaryDescriptor};
use lingo_loader::BundleLoader;
use private::Sealed;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoLoader;
#[derive(Debug)]
pub struct WithLoader(Arc<dyn BundleLoader>);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoLoader {}
impl Sealed for WithLoader {}

/// Typed builder for [`ResourceRegistry`].
///
/// A loader must be supplied before [`build`](RegistryBuilder::build) becomes
/// available.
///
/// ```rust
/// use lingo_domain::{Culture, DictionaryDescriptor};
/// use lingo_loader::MemoryLoader;
/// use lingo_registry::ResourceRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = ResourceRegistry::builder()
///     .loader(MemoryLoader::new().with("icons.toml", [("save", "disk")]))
///     .culture(Culture::parse("en-US")?)
///     .dictionary(DictionaryDescriptor::new("icons", "icons.toml")?)
///     .build()?;
///
/// assert_eq!(registry.dictionary_names(), ["icons"]);
/// # Ok(())
/// # }
/// ```
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct RegistryBuilder<S: Sealed = NoLoader> {
    state: S,
    culture: Option<Culture>,
    descriptors: Vec<Arc<DictionaryDescriptor>>,
}

#[allow(private_bounds)]
impl<S: Sealed> RegistryBuilder<S> {
    /// Culture active from the start; initial bundles load for it directly.
    #[must_use = "Sets the initial active culture"]
    pub fn culture(mut self, culture: impl Into<Option<Culture>>) -> Self {
        self.culture = culture.into();
        self
    }

    /// Queues a descriptor for registration at build time.
    #[must_use = "Queues a dictionary for registration"]
    pub fn dictionary(mut self, descriptor: impl Into<Arc<DictionaryDescriptor>>) -> Self {
        self.descriptors.push(descriptor.into());
        self
    }

    #[must_use = "Queues dictionaries for registration"]
    pub fn dictionaries<I, D>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<DictionaryDescriptor>>,
    {
        self.descriptors.extend(descriptors.into_iter().map(Into::into));
        self
    }

    /// Applies the configured culture (when set) and queues every
    /// `[[dictionaries]]` entry.
    ///
    /// # Errors
    /// [`RegistryError::Domain`] if an entry does not describe a valid
    /// dictionary.
    pub fn config(mut self, config: &LingoConfig) -> Result<Self, RegistryError> {
        if let Some(culture) = &config.culture {
            self.culture = Some(culture.clone());
        }
        for entry in &config.dictionaries {
            let descriptor = DictionaryDescriptor::try_from(entry)
                .context(format!("Config entry '{}'", entry.name))?;
            self.descriptors.push(Arc::new(descriptor));
        }
        Ok(self)
    }

    fn transition<N: Sealed>(self, state: N) -> RegistryBuilder<N> {
        RegistryBuilder { state, culture: self.culture, descriptors: self.descriptors }
    }
}

impl RegistryBuilder<NoLoader> {
    #[must_use = "Creates a new registry builder"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the bundle loader"]
    pub fn loader(self, loader: impl BundleLoader + 'static) -> RegistryBuilder<WithLoader> {
        self.transition(WithLoader(Arc::new(loader)))
    }
}

impl RegistryBuilder<WithLoader> {
    /// Creates the registry and registers every queued descriptor, in order,
    /// under the initial culture. No notification is sent.
    ///
    /// # Errors
    /// The first registration error; see
    /// [`ResourceRegistry::register_dictionary`].
    pub fn build(self) -> Result<ResourceRegistry, RegistryError> {
        let registry =
            ResourceRegistry::with_state(self.state.0, RegistryState::with_culture(self.culture));
        registry.register_all(self.descriptors)?;

        info!(
            dictionaries = registry.len(),
            culture = ?registry.active_culture().as_ref().map(Culture::as_str),
            "Resource registry ready"
        );
        Ok(registry)
    }
}

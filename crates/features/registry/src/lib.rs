//! # Resource Registry
//!
//! Maps logical dictionary names to culture-specific resource bundles and
//! serves typed lookups from whichever bundle is active.
//!
//! ## Flow
//!
//! 1. Register [`DictionaryDescriptor`](lingo_domain::DictionaryDescriptor)s;
//!    each gets a bundle loaded for the active culture.
//! 2. Call [`ResourceRegistry::set_active_culture`]; bundles whose resolved
//!    path changed are reloaded, the rest keep their identity.
//! 3. Observers receive one [`CultureChanged`](lingo_domain::CultureChanged)
//!    after the new state is committed.
//! 4. Look up values with [`ResourceRegistry::get_resource`].
//!
//! Loading is delegated to a [`BundleLoader`](lingo_loader::BundleLoader);
//! the registry never touches the filesystem itself.

mod builder;
mod bundle;
mod error;
mod registry;

pub use builder::{NoLoader, RegistryBuilder, WithLoader};
pub use bundle::ResolvedBundle;
pub use error::{RegistryError, RegistryErrorExt};
pub use registry::ResourceRegistry;

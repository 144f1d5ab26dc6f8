//! # Domain Models
//!
//! Pure domain types for the resource registry with minimal dependencies
//! (`serde`, `fxhash`, the workspace error derive).
//! Keep it lean: no I/O, no locking, no loaders. Just data and total functions.

pub mod config;
pub mod culture;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod resolver;
pub mod value;

pub use culture::Culture;
pub use descriptor::DictionaryDescriptor;
pub use error::{DomainError, DomainErrorExt};
pub use events::CultureChanged;
pub use resolver::CultureResolver;
pub use value::{BundleEntries, FromResource, ResourceValue};

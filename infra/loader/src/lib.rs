//! # Bundle Loaders
//!
//! The registry never reads resources itself: it hands an opaque locator to a
//! [`BundleLoader`] and stores whatever entries come back.
//!
//! * [`FsLoader`]: `.json` / `.toml` files below a root directory, sandboxed
//!   against absolute and `..` locators.
//! * [`MemoryLoader`]: an in-process map, swappable at runtime.
//!
//! Nested tables in documents flatten into dotted keys, so
//! `{"menu": {"open": "Open"}}` yields the key `menu.open`.

mod error;
mod format;
mod fs;
mod loader;
mod memory;

pub use error::{LoaderError, LoaderErrorExt};
pub use format::Format;
pub use fs::{FsLoader, RESOURCE_SCHEME};
pub use loader::BundleLoader;
pub use memory::MemoryLoader;

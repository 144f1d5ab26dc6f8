//! # Change Notifier
//!
//! Synchronous observer lists for state owners that must tell dependents
//! about a change *after* the change is fully applied.
//!
//! ## Overview
//!
//! [`ChangeNotifier`] keeps an ordered list of callbacks and invokes each one
//! on the caller's thread. Async consumers can additionally take a
//! `tokio::sync::broadcast` receiver; [`EventReceiverExt`] reads it while
//! tolerating lag.
//!
//! # Example
//!
//! ```rust
//! use lingo_event_bus::{ChangeNotifier, EventReceiverExt, NotifierError};
//!
//! #[derive(Debug, PartialEq)]
//! struct Renamed { to: &'static str }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), NotifierError> {
//!     let notifier = ChangeNotifier::new();
//!     let mut rx = notifier.subscribe_channel()?;
//!
//!     notifier.subscribe(|event: &Renamed| assert_eq!(event.to, "b"));
//!     notifier.notify(Renamed { to: "b" });
//!
//!     let event = rx.next_event().await;
//!     assert_eq!(event.as_deref(), Some(&Renamed { to: "b" }));
//!     Ok(())
//! }
//! ```

mod error;
mod notifier;
mod receiver;

pub use error::{NotifierError, NotifierErrorExt};
pub use notifier::{ChangeNotifier, Event, SubscriptionId};
pub use receiver::EventReceiverExt;

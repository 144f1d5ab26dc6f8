use crate::error::NotifierError;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// A safe default for channel buffers.
/// Culture changes are rare; 16 pending changes is plenty for a lagging reader.
const DEFAULT_CAPACITY: usize = 16;
const MIN_CAPACITY: usize = 1;

/// Marker trait for types that can be published through a [`ChangeNotifier`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Observers<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<E>)>,
}

struct Channel<E> {
    capacity: usize,
    sender: broadcast::Sender<Arc<E>>,
}

/// Synchronous multicast of events to registered callbacks.
///
/// * [`notify`](Self::notify) invokes every callback registered at the time of
///   the call exactly once, on the calling thread, in registration order.
/// * The callback list is snapshotted before dispatch: callbacks may subscribe,
///   unsubscribe or call back into their owner without deadlocking.
/// * A panicking callback is not contained; the panic unwinds through `notify`.
/// * Consumers that prefer their own schedule can take a broadcast receiver via
///   [`subscribe_channel`](Self::subscribe_channel); it receives the same events
///   after the callbacks ran.
///
/// # Examples
/// ```rust
/// use lingo_event_bus::ChangeNotifier;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let notifier = ChangeNotifier::<u32>::new();
/// let seen = Arc::new(AtomicUsize::new(0));
///
/// let counter = seen.clone();
/// let id = notifier.subscribe(move |value: &u32| {
///     counter.fetch_add(*value as usize, Ordering::SeqCst);
/// });
///
/// notifier.notify(2);
/// assert!(notifier.unsubscribe(id));
/// notifier.notify(40);
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// ```
pub struct ChangeNotifier<E: Event> {
    observers: RwLock<Observers<E>>,
    channel: Mutex<Option<Channel<E>>>,
}

impl<E: Event> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            observers: RwLock::new(Observers { next_id: 0, entries: Vec::new() }),
            channel: Mutex::new(None),
        }
    }
}

impl<E: Event> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("event", &std::any::type_name::<E>())
            .field("subscribers", &self.subscriber_count())
            .field("channel_receivers", &self.channel_receivers())
            .finish()
    }
}

impl<E: Event> ChangeNotifier<E> {
    /// Creates a notifier without observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns its subscription handle.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut observers = self.observers.write();
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(callback)));
        trace!(event = std::any::type_name::<E>(), subscription = id.0, "Observer subscribed");
        id
    }

    /// Removes a callback. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.entries.len();
        observers.entries.retain(|(existing, _)| *existing != id);
        let removed = observers.entries.len() != before;
        drop(observers);

        trace!(event = std::any::type_name::<E>(), subscription = id.0, removed, "Observer unsubscribed");
        removed
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.read().entries.len()
    }

    /// Number of live channel receivers.
    #[must_use]
    pub fn channel_receivers(&self) -> usize {
        self.channel.lock().as_ref().map_or(0, |channel| channel.sender.receiver_count())
    }

    /// Subscribes a broadcast receiver with the default capacity.
    ///
    /// # Errors
    /// See [`subscribe_channel_with_capacity`](Self::subscribe_channel_with_capacity).
    pub fn subscribe_channel(&self) -> Result<broadcast::Receiver<Arc<E>>, NotifierError> {
        self.subscribe_channel_with_capacity(DEFAULT_CAPACITY)
    }

    /// Subscribes a broadcast receiver.
    ///
    /// The channel is created on first use; later calls share it and keep the
    /// original capacity.
    ///
    /// # Errors
    /// Returns [`NotifierError::InvalidCapacity`] if `capacity` is zero.
    pub fn subscribe_channel_with_capacity(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Receiver<Arc<E>>, NotifierError> {
        let capacity = validate_capacity(capacity)?;
        let mut channel = self.channel.lock();

        if let Some(existing) = channel.as_ref() {
            if existing.capacity != capacity {
                warn!(
                    event = std::any::type_name::<E>(),
                    existing_capacity = existing.capacity,
                    requested_capacity = capacity,
                    "Broadcast channel already initialized with a different capacity"
                );
            }
            return Ok(existing.sender.subscribe());
        }

        trace!(event = std::any::type_name::<E>(), capacity, "Initializing broadcast channel");
        let (sender, receiver) = broadcast::channel(capacity);
        *channel = Some(Channel { capacity, sender });
        Ok(receiver)
    }

    /// Delivers `event` to every callback, then to the broadcast channel.
    ///
    /// Returns the number of deliveries (callbacks invoked plus channel
    /// receivers reached).
    pub fn notify(&self, event: E) -> usize {
        let event = Arc::new(event);

        let callbacks: Vec<Callback<E>> =
            self.observers.read().entries.iter().map(|(_, callback)| Arc::clone(callback)).collect();

        for callback in &callbacks {
            callback(&event);
        }

        let sender = self.channel.lock().as_ref().map(|channel| channel.sender.clone());
        let received = sender.map_or(0, |sender| {
            sender.send(event).map_or_else(
                |_| {
                    trace!(
                        event = std::any::type_name::<E>(),
                        "Channel event dropped: no active receivers"
                    );
                    0
                },
                |count| count,
            )
        });

        trace!(
            event = std::any::type_name::<E>(),
            callbacks = callbacks.len(),
            received,
            "Event dispatched"
        );
        callbacks.len() + received
    }

    /// Drops every callback and closes the broadcast channel.
    ///
    /// Returns the number of callbacks that were removed. Channel receivers
    /// observe the channel as closed.
    pub fn shutdown(&self) -> usize {
        let removed = {
            let mut observers = self.observers.write();
            let count = observers.entries.len();
            observers.entries.clear();
            count
        };
        self.channel.lock().take();
        removed
    }
}

fn validate_capacity(capacity: usize) -> Result<usize, NotifierError> {
    if capacity < MIN_CAPACITY {
        return Err(NotifierError::InvalidCapacity {
            message: format!("capacity must be >= {MIN_CAPACITY}").into(),
            context: None,
        });
    }
    Ok(capacity)
}

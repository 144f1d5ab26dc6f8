pub mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use lingo_event_bus::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn callbacks_run_once_in_registration_order() {
        let notifier = ChangeNotifier::new();
        let journal = Journal::default();
        notifier.subscribe(journal.observer("first"));
        notifier.subscribe(journal.observer("second"));

        assert_eq!(notifier.notify(Switched(7)), 2);
        assert_eq!(journal.entries(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribed_callback_is_skipped() {
        let notifier = ChangeNotifier::new();
        let journal = Journal::default();
        let first = notifier.subscribe(journal.observer("first"));
        notifier.subscribe(journal.observer("second"));

        assert!(notifier.unsubscribe(first));
        notifier.notify(Switched(1));

        assert_eq!(journal.entries(), vec![("second", 1)]);
        assert_eq!(notifier.subscriber_count(), 1);
    }

    #[test]
    fn callback_subscribing_during_dispatch_joins_next_round() {
        let notifier = Arc::new(ChangeNotifier::<Switched>::new());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let (weak, late) = (Arc::downgrade(&notifier), late_calls.clone());
        notifier.subscribe(move |_| {
            if let Some(notifier) = weak.upgrade() {
                let late = late.clone();
                notifier.subscribe(move |_| {
                    late.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        assert_eq!(notifier.notify(Switched(1)), 1);
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        notifier.notify(Switched(2));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn notify_without_observers_is_a_no_op() {
        let notifier = ChangeNotifier::<Switched>::new();
        assert_eq!(notifier.notify(Switched(0)), 0);
    }

    #[tokio::test]
    async fn channel_receives_after_callbacks() {
        let notifier = ChangeNotifier::new();
        let journal = Journal::default();
        notifier.subscribe(journal.observer("cb"));
        let mut rx = notifier.subscribe_channel().unwrap();

        assert_eq!(notifier.notify(Switched(5)), 2);

        let event = rx.next_event().await.unwrap();
        assert_eq!(*event, Switched(5));
        assert_eq!(journal.entries(), vec![("cb", 5)]);
    }

    #[tokio::test]
    async fn channel_receivers_share_one_stream() {
        let notifier = ChangeNotifier::new();
        let mut a = notifier.subscribe_channel_with_capacity(4).unwrap();
        let mut b = notifier.subscribe_channel_with_capacity(8).unwrap();
        assert_eq!(notifier.channel_receivers(), 2);

        notifier.notify(Switched(3));

        assert_eq!(a.next_event().await.as_deref(), Some(&Switched(3)));
        assert_eq!(b.next_event().await.as_deref(), Some(&Switched(3)));
    }

    #[tokio::test]
    async fn lagging_receiver_recovers() {
        let notifier = ChangeNotifier::new();
        let capacity = 2;
        let mut rx = notifier.subscribe_channel_with_capacity(capacity).unwrap();

        let total = 50u32;
        for i in 0..total {
            notifier.notify(Switched(i));
        }

        let first = rx.next_event().await.unwrap();
        assert!(
            first.0 >= total - u32::try_from(capacity).unwrap(),
            "expected the retained tail, got {}",
            first.0
        );

        let second = rx.next_event().await.unwrap();
        assert_eq!(second.0, first.0 + 1);
    }

    #[tokio::test]
    async fn shutdown_closes_channel() {
        let notifier = ChangeNotifier::<Switched>::new();
        let mut rx = notifier.subscribe_channel().unwrap();

        notifier.shutdown();

        assert!(rx.next_event().await.is_none());
    }

    #[test]
    fn invalid_capacity_error_message() {
        let notifier = ChangeNotifier::<Switched>::new();
        let err = notifier.subscribe_channel_with_capacity(0).unwrap_err();
        assert_eq!(err.kind(), "InvalidCapacity");
        assert!(err.to_string().contains("capacity must be >= 1"));
    }
}

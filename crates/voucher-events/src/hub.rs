use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tokio::sync::broadcast;
use tracing::debug;

use voucher_types::VoucherId;

use crate::event::{EventKind, EventPayload, LedgerEvent};

/// Filter for subscribing to a subset of ledger events.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    /// If set, only events of these kinds are delivered.
    pub kinds: Option<Vec<EventKind>>,
    /// If set, only events about these voucher ids are delivered.
    pub vouchers: Option<Vec<VoucherId>>,
}

impl EventFilter {
    /// Returns `true` if the given event matches this filter.
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        if let Some(ref kinds) = self.kinds {
            if !kinds.contains(&event.kind) {
                return false;
            }
        }
        if let Some(ref ids) = self.vouchers {
            if !ids.contains(&event.payload.voucher_id()) {
                return false;
            }
        }
        true
    }
}

/// A broadcast channel receiver for ledger events.
pub type EventStream = broadcast::Receiver<LedgerEvent>;

/// Internal subscriber: a filter paired with a broadcast sender.
struct Subscriber {
    filter: EventFilter,
    sender: broadcast::Sender<LedgerEvent>,
}

/// Configuration for the [`EventHub`].
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Capacity of per-subscriber broadcast channels.
    pub channel_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}

/// Fan-out hub the ledger publishes to after each committed mutation.
///
/// Stamps every event with a monotonically increasing emission sequence and
/// routes it to all subscribers whose filter matches. Subscribers whose
/// channels are closed are pruned during routing.
pub struct EventHub {
    seq: AtomicU64,
    subscribers: RwLock<Vec<Subscriber>>,
    config: HubConfig,
}

impl EventHub {
    pub fn new(config: HubConfig) -> Self {
        Self {
            seq: AtomicU64::new(0),
            subscribers: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Register a new subscriber with the given filter.
    /// Returns a broadcast receiver for the matching events.
    pub fn subscribe(&self, filter: EventFilter) -> EventStream {
        let (tx, rx) = broadcast::channel(self.config.channel_capacity);
        self.subscribers
            .write()
            .expect("hub lock poisoned")
            .push(Subscriber { filter, sender: tx });
        rx
    }

    /// Stamp a payload with the next sequence number and deliver it to all
    /// matching subscribers. Returns the stamped event.
    pub fn emit(&self, payload: EventPayload) -> LedgerEvent {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let event = LedgerEvent::new(seq, payload);
        self.route(&event);
        debug!(id = %event.id, kind = %event.kind, seq, "event emitted");
        event
    }

    /// Number of events emitted so far.
    pub fn emitted(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().expect("hub lock poisoned").len()
    }

    fn route(&self, event: &LedgerEvent) {
        let mut subs = self.subscribers.write().expect("hub lock poisoned");
        subs.retain(|sub| {
            if sub.filter.matches(event) {
                // If send fails (no receivers), the subscriber is stale.
                sub.sender.send(event.clone()).is_ok()
            } else {
                // Keep non-matching subscribers; they may match future
                // events. Only prune if the channel itself is closed.
                sub.sender.receiver_count() > 0
            }
        });
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voucher_types::{PartyId, Voucher, VoucherStatus};

    fn minted(id: u64) -> EventPayload {
        EventPayload::Minted {
            id: VoucherId::new(id),
            voucher: Voucher::new(
                50,
                "USD",
                "wiiqare_admin",
                "hospitalA",
                "pacientA",
                VoucherStatus::Unclaimed,
            ),
        }
    }

    fn transferred(id: u64) -> EventPayload {
        EventPayload::Transferred {
            id: VoucherId::new(id),
            new_owner: PartyId::new("pacientA"),
        }
    }

    #[test]
    fn sequence_increases_per_emission() {
        let hub = EventHub::default();
        let e1 = hub.emit(minted(0));
        let e2 = hub.emit(minted(1));
        assert_eq!(e1.seq, 1);
        assert_eq!(e2.seq, 2);
        assert_eq!(hub.emitted(), 2);
    }

    #[test]
    fn subscriber_receives_matching_kinds_only() {
        let hub = EventHub::default();
        let filter = EventFilter {
            kinds: Some(vec![EventKind::Minted]),
            ..Default::default()
        };
        let mut stream = hub.subscribe(filter);
        assert_eq!(hub.subscriber_count(), 1);

        hub.emit(minted(0));
        hub.emit(transferred(0));

        let received = stream.try_recv().unwrap();
        assert_eq!(received.kind, EventKind::Minted);
        assert!(stream.try_recv().is_err());
    }

    #[test]
    fn subscriber_voucher_filter() {
        let hub = EventHub::default();
        let filter = EventFilter {
            vouchers: Some(vec![VoucherId::new(1)]),
            ..Default::default()
        };
        let mut stream = hub.subscribe(filter);

        hub.emit(minted(0));
        hub.emit(minted(1));

        let received = stream.try_recv().unwrap();
        assert_eq!(received.payload.voucher_id(), VoucherId::new(1));
        assert!(stream.try_recv().is_err());
    }

    #[test]
    fn default_filter_matches_everything() {
        let hub = EventHub::default();
        let mut stream = hub.subscribe(EventFilter::default());

        hub.emit(minted(0));
        hub.emit(transferred(0));

        assert!(stream.try_recv().is_ok());
        assert!(stream.try_recv().is_ok());
    }

    #[test]
    fn stale_subscribers_are_pruned() {
        let hub = EventHub::default();
        let stream = hub.subscribe(EventFilter::default());
        assert_eq!(hub.subscriber_count(), 1);

        drop(stream);
        hub.emit(minted(0));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn emit_without_subscribers_is_fine() {
        let hub = EventHub::default();
        let event = hub.emit(minted(0));
        assert!(event.verify_id());
    }
}

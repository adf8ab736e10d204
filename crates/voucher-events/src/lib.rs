//! Notification channel for the voucher ledger.
//!
//! Mutating ledger operations return nothing on success; events are the
//! only external signal that a mutation happened. This crate
//! provides the typed events and the hub the ledger publishes them through,
//! strictly after each mutation commits. Subscribers attach with an
//! [`EventFilter`] and receive matching events over a broadcast channel.

pub mod event;
pub mod hub;

pub use event::{EventId, EventKind, EventPayload, LedgerEvent};
pub use hub::{EventFilter, EventHub, EventStream, HubConfig};

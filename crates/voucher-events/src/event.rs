use serde::{Deserialize, Serialize};

use voucher_types::{PartyId, Voucher, VoucherId};

/// Unique identifier for a ledger event.
///
/// A BLAKE3 hash over the event's sequence number and content, making event
/// ids content-addressable: replaying the same mutation stream yields the
/// same ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    /// Content hash of the event (BLAKE3).
    pub hash: [u8; 32],
}

impl EventId {
    /// Create an `EventId` from a raw hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self { hash }
    }

    /// Short hex representation (first 8 hex chars).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.hash[..4])
    }

    /// Full hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evt:{}", self.short_hex())
    }
}

/// Classification of ledger events.
///
/// Burn emits no event, and neither do the admin transitions (pause,
/// unpause, ownership transfer); only these four mutations announce
/// themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A new voucher was stored at a freshly assigned id.
    Minted,
    /// A voucher's holder changed.
    Transferred,
    /// A voucher's fields were wholesale replaced.
    Altered,
    /// A voucher was retired and two children minted in its place.
    Split,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Minted => "Minted",
            Self::Transferred => "Transferred",
            Self::Altered => "Altered",
            Self::Split => "Split",
        };
        write!(f, "{s}")
    }
}

/// Payload data carried by a ledger event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    /// A voucher was minted: the assigned id and the stored fields.
    Minted { id: VoucherId, voucher: Voucher },
    /// Only the holder changed; every other field is untouched.
    Transferred { id: VoucherId, new_owner: PartyId },
    /// The record at `id` now holds exactly these fields.
    Altered { id: VoucherId, voucher: Voucher },
    /// `id` is the ORIGINAL voucher, now the burned sentinel. The two
    /// children were minted at the next two counter values; subscribers
    /// learn those ids by reading the mint counter around the call.
    Split {
        id: VoucherId,
        first: Voucher,
        second: Voucher,
    },
}

impl EventPayload {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Minted { .. } => EventKind::Minted,
            Self::Transferred { .. } => EventKind::Transferred,
            Self::Altered { .. } => EventKind::Altered,
            Self::Split { .. } => EventKind::Split,
        }
    }

    /// The voucher id this event is about.
    pub fn voucher_id(&self) -> VoucherId {
        match self {
            Self::Minted { id, .. }
            | Self::Transferred { id, .. }
            | Self::Altered { id, .. }
            | Self::Split { id, .. } => *id,
        }
    }
}

/// A single notification published by the ledger.
///
/// Events are emitted strictly after the corresponding mutation has been
/// committed; a failed or denied operation emits nothing. `seq` is the
/// hub's emission sequence, increasing by one per event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Content-addressed event identifier.
    pub id: EventId,
    /// Emission sequence number, starting at 1.
    pub seq: u64,
    /// Classification of this event.
    pub kind: EventKind,
    /// Event-specific payload data.
    pub payload: EventPayload,
}

impl LedgerEvent {
    /// Build a new `LedgerEvent`, deriving its kind and content hash.
    pub fn new(seq: u64, payload: EventPayload) -> Self {
        let kind = payload.kind();
        let hash = Self::compute_hash(seq, &kind, &payload);
        Self {
            id: EventId::from_hash(hash),
            seq,
            kind,
            payload,
        }
    }

    /// Verify the event's id matches its content.
    pub fn verify_id(&self) -> bool {
        self.id.hash == Self::compute_hash(self.seq, &self.kind, &self.payload)
    }

    fn compute_hash(seq: u64, kind: &EventKind, payload: &EventPayload) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"voucher-event-v1:");
        hasher.update(&seq.to_le_bytes());
        if let Ok(kind_bytes) = bincode::serialize(kind) {
            hasher.update(&kind_bytes);
        }
        if let Ok(payload_bytes) = bincode::serialize(payload) {
            hasher.update(&payload_bytes);
        }
        *hasher.finalize().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voucher_types::VoucherStatus;

    fn sample_voucher() -> Voucher {
        Voucher::new(
            50,
            "USD",
            "wiiqare_admin",
            "hospitalA",
            "pacientA",
            VoucherStatus::Unclaimed,
        )
    }

    #[test]
    fn event_id_is_deterministic() {
        let payload = EventPayload::Minted {
            id: VoucherId::new(0),
            voucher: sample_voucher(),
        };
        let e1 = LedgerEvent::new(1, payload.clone());
        let e2 = LedgerEvent::new(1, payload);
        assert_eq!(e1.id, e2.id);
        assert!(e1.verify_id());
    }

    #[test]
    fn different_payloads_produce_different_ids() {
        let minted = LedgerEvent::new(
            1,
            EventPayload::Minted {
                id: VoucherId::new(0),
                voucher: sample_voucher(),
            },
        );
        let transferred = LedgerEvent::new(
            1,
            EventPayload::Transferred {
                id: VoucherId::new(0),
                new_owner: PartyId::new("pacientA"),
            },
        );
        assert_ne!(minted.id, transferred.id);
    }

    #[test]
    fn kind_is_derived_from_payload() {
        let event = LedgerEvent::new(
            3,
            EventPayload::Split {
                id: VoucherId::new(0),
                first: sample_voucher(),
                second: sample_voucher(),
            },
        );
        assert_eq!(event.kind, EventKind::Split);
        assert_eq!(event.payload.voucher_id(), VoucherId::new(0));
    }

    #[test]
    fn event_id_display() {
        let id = EventId::from_hash([0xab; 32]);
        assert_eq!(format!("{id}"), "evt:abababab");
    }

    #[test]
    fn serde_roundtrip() {
        let event = LedgerEvent::new(
            7,
            EventPayload::Altered {
                id: VoucherId::new(2),
                voucher: sample_voucher(),
            },
        );
        let json = serde_json::to_string(&event).unwrap();
        let decoded: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, decoded);
        assert!(decoded.verify_id());
    }
}

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use voucher_events::{EventFilter, EventHub, EventPayload, EventStream, HubConfig};
use voucher_gate::{AccessGate, MutationKind, MutationRequest};
use voucher_types::{PartyId, Voucher, VoucherId};

use crate::error::LedgerError;
use crate::traits::{LedgerReader, LedgerWriter};

/// Configuration for an in-memory ledger instance.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// The administrator the ledger starts with.
    pub initial_owner: PartyId,
    /// Event hub configuration.
    pub events: HubConfig,
}

/// Ledger state: the mint counter and the voucher map.
///
/// Both live behind one lock so every mutation is an indivisible unit
/// relative to every other operation. Ids are never removed from the map;
/// burning replaces the record with the sentinel, so the map holds exactly
/// the ids in `0..next_id`.
struct LedgerState {
    next_id: u64,
    vouchers: HashMap<u64, Voucher>,
}

/// In-memory voucher ledger for embedding and tests.
///
/// The access gate and the event hub are explicit fields of the instance;
/// there is no process-global state. A persistent backend would implement
/// the same [`LedgerReader`] / [`LedgerWriter`] boundaries against its own
/// store.
pub struct InMemoryVoucherLedger {
    gate: AccessGate,
    events: EventHub,
    inner: RwLock<LedgerState>,
}

impl InMemoryVoucherLedger {
    /// Create a ledger administered by `initial_owner`, unpaused, with the
    /// default gate pipeline and event hub.
    pub fn new(initial_owner: impl Into<PartyId>) -> Self {
        Self::with_config(LedgerConfig {
            initial_owner: initial_owner.into(),
            events: HubConfig::default(),
        })
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self::from_parts(
            AccessGate::with_default_stages(config.initial_owner),
            EventHub::new(config.events),
        )
    }

    /// Assemble a ledger from an explicitly built gate and hub, e.g. to add
    /// custom gate stages.
    pub fn from_parts(gate: AccessGate, events: EventHub) -> Self {
        Self {
            gate,
            events,
            inner: RwLock::new(LedgerState {
                next_id: 0,
                vouchers: HashMap::new(),
            }),
        }
    }

    /// Subscribe to mutation events. Works for any caller, paused or not.
    pub fn subscribe(&self, filter: EventFilter) -> EventStream {
        self.events.subscribe(filter)
    }

    /// Engage the emergency stop. Owner-gated.
    pub fn pause(&self, caller: &PartyId) -> Result<(), LedgerError> {
        self.gate.pause(caller)?;
        Ok(())
    }

    /// Release the emergency stop. Owner-gated.
    pub fn unpause(&self, caller: &PartyId) -> Result<(), LedgerError> {
        self.gate.unpause(caller)?;
        Ok(())
    }

    /// Hand the ledger to a new administrator. Owner-gated.
    pub fn transfer_ownership(
        &self,
        caller: &PartyId,
        new_owner: PartyId,
    ) -> Result<(), LedgerError> {
        self.gate.transfer_ownership(caller, new_owner)?;
        Ok(())
    }

    /// The current administrator.
    pub fn owner(&self) -> PartyId {
        self.gate.owner()
    }

    /// Whether the emergency stop is engaged.
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, LedgerState>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, LedgerState>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }

    fn authorize(&self, caller: &PartyId, operation: MutationKind) -> Result<(), LedgerError> {
        self.gate
            .authorize(&MutationRequest::new(caller.clone(), operation))?;
        Ok(())
    }
}

impl LedgerReader for InMemoryVoucherLedger {
    fn current_voucher_id(&self) -> Result<VoucherId, LedgerError> {
        Ok(VoucherId::new(self.read_state()?.next_id))
    }

    fn voucher(&self, id: VoucherId) -> Result<Voucher, LedgerError> {
        Ok(self
            .read_state()?
            .vouchers
            .get(&id.as_u64())
            .cloned()
            .unwrap_or_else(Voucher::sentinel))
    }
}

impl LedgerWriter for InMemoryVoucherLedger {
    fn mint(&self, caller: &PartyId, voucher: Voucher) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        self.authorize(caller, MutationKind::Mint)?;

        let id = VoucherId::new(state.next_id);
        state.vouchers.insert(id.as_u64(), voucher.clone());
        state.next_id += 1;
        drop(state);

        info!(%id, caller = %caller, value = voucher.value, "voucher minted");
        self.events.emit(EventPayload::Minted { id, voucher });
        Ok(())
    }

    fn burn(&self, caller: &PartyId, id: VoucherId) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        self.authorize(caller, MutationKind::Burn)?;

        if !state.vouchers.contains_key(&id.as_u64()) {
            return Err(LedgerError::NotFound { id });
        }
        state.vouchers.insert(id.as_u64(), Voucher::sentinel());
        drop(state);

        info!(%id, caller = %caller, "voucher burned");
        Ok(())
    }

    fn transfer_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        new_owner: PartyId,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        self.authorize(caller, MutationKind::Transfer)?;

        let record = state
            .vouchers
            .get_mut(&id.as_u64())
            .ok_or(LedgerError::NotFound { id })?;
        record.owner = new_owner.clone();
        drop(state);

        info!(%id, caller = %caller, to = %new_owner, "voucher transferred");
        self.events.emit(EventPayload::Transferred { id, new_owner });
        Ok(())
    }

    fn alter_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        voucher: Voucher,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        self.authorize(caller, MutationKind::Alter)?;

        if !state.vouchers.contains_key(&id.as_u64()) {
            return Err(LedgerError::NotFound { id });
        }
        state.vouchers.insert(id.as_u64(), voucher.clone());
        drop(state);

        info!(%id, caller = %caller, "voucher altered");
        self.events.emit(EventPayload::Altered { id, voucher });
        Ok(())
    }

    fn split_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        first: Voucher,
        second: Voucher,
    ) -> Result<(), LedgerError> {
        let mut state = self.write_state()?;
        self.authorize(caller, MutationKind::Split)?;

        let original = state
            .vouchers
            .get(&id.as_u64())
            .ok_or(LedgerError::NotFound { id })?;
        if first.value.checked_add(second.value) != Some(original.value) {
            return Err(LedgerError::SplitValueMismatch {
                original: original.value,
                first: first.value,
                second: second.value,
            });
        }

        // The original is retired without a burn event; the split event
        // below is the single signal for the whole operation.
        state.vouchers.insert(id.as_u64(), Voucher::sentinel());
        let first_id = VoucherId::new(state.next_id);
        state.vouchers.insert(first_id.as_u64(), first.clone());
        let second_id = VoucherId::new(state.next_id + 1);
        state.vouchers.insert(second_id.as_u64(), second.clone());
        state.next_id += 2;
        drop(state);

        info!(
            %id,
            caller = %caller,
            %first_id,
            %second_id,
            "voucher split"
        );
        self.events.emit(EventPayload::Split { id, first, second });
        Ok(())
    }
}

use voucher_types::{PartyId, Voucher, VoucherId};

use crate::error::LedgerError;

/// Read boundary for voucher ledger queries.
///
/// Reads never consult the access gate: they succeed while the ledger is
/// paused and for any caller.
pub trait LedgerReader: Send + Sync {
    /// The id the NEXT mint will receive, i.e. the number of mints
    /// performed so far (split children included).
    fn current_voucher_id(&self) -> Result<VoucherId, LedgerError>;

    /// The record stored at `id`, or [`Voucher::sentinel`] if `id` was
    /// never minted or has been burned. The read path does not distinguish
    /// the two.
    fn voucher(&self, id: VoucherId) -> Result<Voucher, LedgerError>;
}

/// Write boundary for voucher ledger mutations.
///
/// Every method takes the caller's identity explicitly; the gate decides
/// whether that caller may mutate. Mutations return no data on success.
/// The only external signal of a committed mutation is the event the
/// ledger publishes afterwards.
pub trait LedgerWriter: Send + Sync {
    /// Store `voucher` at the next id and advance the counter by one.
    fn mint(&self, caller: &PartyId, voucher: Voucher) -> Result<(), LedgerError>;

    /// Replace the record at `id` with the burned sentinel. The id stays
    /// mapped forever; burning an already-burned id succeeds again.
    /// Emits no event.
    fn burn(&self, caller: &PartyId, id: VoucherId) -> Result<(), LedgerError>;

    /// Replace only the holder of the record at `id`; every other field is
    /// left untouched. `new_owner` is not validated.
    fn transfer_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        new_owner: PartyId,
    ) -> Result<(), LedgerError>;

    /// Wholesale replace all fields of the record at `id`. The counter does
    /// not move.
    fn alter_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        voucher: Voucher,
    ) -> Result<(), LedgerError>;

    /// Retire the record at `id` (sentinel, no burn event) and mint `first`
    /// then `second` at the next two ids. The children must conserve the
    /// original value. Emits one event referencing the ORIGINAL id.
    fn split_voucher(
        &self,
        caller: &PartyId,
        id: VoucherId,
        first: Voucher,
        second: Voucher,
    ) -> Result<(), LedgerError>;
}

use voucher_types::PartyId;

/// Errors produced by gate checks and admin transitions.
///
/// `PartialEq` is derived so callers and tests can match on the exact
/// denial they received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The caller is not the current ledger administrator.
    #[error("caller '{caller}' is not the ledger owner")]
    NotOwner { caller: PartyId },

    /// A mutation was attempted while the ledger is paused.
    #[error("ledger is paused")]
    Paused,

    /// `pause` was called while already paused.
    #[error("ledger is already paused")]
    AlreadyPaused,

    /// `unpause` was called while already active.
    #[error("ledger is not paused")]
    NotPaused,
}

use voucher_gate::GateError;
use voucher_types::VoucherId;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The target id has never been minted.
    #[error("voucher {id} does not exist")]
    NotFound { id: VoucherId },

    /// Split children do not sum to the original voucher's value.
    #[error("split children ({first} + {second}) do not conserve original value {original}")]
    SplitValueMismatch {
        original: u64,
        first: u64,
        second: u64,
    },

    /// The mutation was denied by the access gate.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// A writer panicked while holding the state lock.
    #[error("ledger state lock poisoned")]
    LockPoisoned,
}

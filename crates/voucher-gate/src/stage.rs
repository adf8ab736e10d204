use std::fmt;

use serde::{Deserialize, Serialize};
use voucher_types::PartyId;

use crate::error::GateError;

/// The mutating ledger operation a caller is attempting.
///
/// Carried in the request so stages, denial logs, and error context can name
/// the operation that was blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    Mint,
    Burn,
    Transfer,
    Alter,
    Split,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mint => "mint",
            Self::Burn => "burn",
            Self::Transfer => "transfer",
            Self::Alter => "alter",
            Self::Split => "split",
        };
        write!(f, "{s}")
    }
}

/// A request to perform a mutating ledger operation, evaluated by the gate
/// pipeline before the ledger touches any state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRequest {
    /// Who is attempting the operation.
    pub caller: PartyId,
    /// Which operation is being attempted.
    pub operation: MutationKind,
}

impl MutationRequest {
    pub fn new(caller: impl Into<PartyId>, operation: MutationKind) -> Self {
        Self {
            caller: caller.into(),
            operation,
        }
    }
}

/// A consistent view of the gate's state taken at evaluation time.
///
/// Every stage in one pipeline run sees the same snapshot, so a concurrent
/// pause or ownership transfer is observed either by all stages or by none.
#[derive(Clone, Debug)]
pub struct GateSnapshot {
    /// The current administrator.
    pub owner: PartyId,
    /// Whether the emergency stop is engaged.
    pub paused: bool,
}

/// A single check in the gate pipeline.
///
/// Stages are evaluated in order and the pipeline is fail-fast: the first
/// stage that returns an error decides the denial. The trait is object-safe
/// and `Send + Sync` so stages can be stored in a `Vec<Box<dyn GateStage>>`.
pub trait GateStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "ownership", "pause").
    fn name(&self) -> &str;

    /// Check the request against the snapshot; `Err` denies the mutation.
    fn check(&self, request: &MutationRequest, snapshot: &GateSnapshot) -> Result<(), GateError>;
}

use crate::error::GateError;
use crate::stage::{GateSnapshot, GateStage, MutationRequest};

/// Administrator check.
///
/// Exactly one party is the ledger owner at any time; every mutating
/// operation requires the caller to be that party.
pub struct OwnershipStage;

impl GateStage for OwnershipStage {
    fn name(&self) -> &str {
        "ownership"
    }

    fn check(&self, request: &MutationRequest, snapshot: &GateSnapshot) -> Result<(), GateError> {
        if request.caller != snapshot.owner {
            return Err(GateError::NotOwner {
                caller: request.caller.clone(),
            });
        }
        Ok(())
    }
}

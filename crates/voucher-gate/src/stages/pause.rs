use crate::error::GateError;
use crate::stage::{GateSnapshot, GateStage, MutationRequest};

/// Emergency-stop check.
///
/// While the pause switch is engaged every mutating operation is denied,
/// regardless of who the caller is. Read operations never pass through the
/// gate and are unaffected.
pub struct PauseStage;

impl GateStage for PauseStage {
    fn name(&self) -> &str {
        "pause"
    }

    fn check(&self, _request: &MutationRequest, snapshot: &GateSnapshot) -> Result<(), GateError> {
        if snapshot.paused {
            return Err(GateError::Paused);
        }
        Ok(())
    }
}

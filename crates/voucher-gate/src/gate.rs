use std::sync::RwLock;

use tracing::{debug, info, warn};
use voucher_types::PartyId;

use crate::error::GateError;
use crate::stage::{GateSnapshot, GateStage, MutationRequest};
use crate::stages::{OwnershipStage, PauseStage};

/// Mutable authorization state: the administrator identity and the pause
/// switch. Constructed with an initial owner and `paused = false`; there is
/// no ambient or process-global copy of this state.
struct GateState {
    owner: PartyId,
    paused: bool,
}

/// The access gate: a fail-fast pipeline of checks that every mutating
/// ledger operation must pass before any state is touched.
///
/// The gate is the ONLY path to a mutation -- the ledger consults it at the
/// top of every write, and a denial leaves the ledger untouched with no
/// event emitted.
pub struct AccessGate {
    stages: Vec<Box<dyn GateStage>>,
    state: RwLock<GateState>,
}

impl AccessGate {
    /// Create a gate with the given initial administrator and an empty
    /// pipeline. Use [`Self::add_stage`] to add checks, or
    /// [`Self::with_default_stages`] for the standard pipeline.
    pub fn new(initial_owner: impl Into<PartyId>) -> Self {
        Self {
            stages: Vec::new(),
            state: RwLock::new(GateState {
                owner: initial_owner.into(),
                paused: false,
            }),
        }
    }

    /// Create a gate with the default pipeline: Ownership -> Pause.
    pub fn with_default_stages(initial_owner: impl Into<PartyId>) -> Self {
        let mut gate = Self::new(initial_owner);
        gate.add_stage(Box::new(OwnershipStage));
        gate.add_stage(Box::new(PauseStage));
        gate
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn GateStage>) {
        self.stages.push(stage);
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Evaluate a mutation request through the full pipeline.
    ///
    /// All stages in one run see the same snapshot of the gate state. The
    /// pipeline is **fail-fast**: the first stage that denies decides the
    /// error, and later stages do not run.
    pub fn authorize(&self, request: &MutationRequest) -> Result<(), GateError> {
        let snapshot = self.snapshot();

        for stage in &self.stages {
            if let Err(denial) = stage.check(request, &snapshot) {
                warn!(
                    stage = stage.name(),
                    caller = %request.caller,
                    operation = %request.operation,
                    %denial,
                    "mutation denied"
                );
                return Err(denial);
            }
            debug!(
                stage = stage.name(),
                operation = %request.operation,
                "stage passed"
            );
        }

        Ok(())
    }

    /// Engage the emergency stop. Owner-gated; fails if already paused.
    pub fn pause(&self, caller: &PartyId) -> Result<(), GateError> {
        let mut state = self.state.write().expect("gate lock poisoned");
        Self::require_owner(&state, caller)?;
        if state.paused {
            return Err(GateError::AlreadyPaused);
        }
        state.paused = true;
        info!(caller = %caller, "ledger paused");
        Ok(())
    }

    /// Release the emergency stop. Owner-gated; fails if not paused.
    pub fn unpause(&self, caller: &PartyId) -> Result<(), GateError> {
        let mut state = self.state.write().expect("gate lock poisoned");
        Self::require_owner(&state, caller)?;
        if !state.paused {
            return Err(GateError::NotPaused);
        }
        state.paused = false;
        info!(caller = %caller, "ledger unpaused");
        Ok(())
    }

    /// Atomically replace the administrator identity. Owner-gated.
    pub fn transfer_ownership(
        &self,
        caller: &PartyId,
        new_owner: impl Into<PartyId>,
    ) -> Result<(), GateError> {
        let mut state = self.state.write().expect("gate lock poisoned");
        Self::require_owner(&state, caller)?;
        let new_owner = new_owner.into();
        info!(from = %state.owner, to = %new_owner, "ownership transferred");
        state.owner = new_owner;
        Ok(())
    }

    /// The current administrator. Never fails; unaffected by pause.
    pub fn owner(&self) -> PartyId {
        self.state.read().expect("gate lock poisoned").owner.clone()
    }

    /// Whether the emergency stop is engaged. Never fails.
    pub fn is_paused(&self) -> bool {
        self.state.read().expect("gate lock poisoned").paused
    }

    fn snapshot(&self) -> GateSnapshot {
        let state = self.state.read().expect("gate lock poisoned");
        GateSnapshot {
            owner: state.owner.clone(),
            paused: state.paused,
        }
    }

    fn require_owner(state: &GateState, caller: &PartyId) -> Result<(), GateError> {
        if *caller != state.owner {
            return Err(GateError::NotOwner {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}

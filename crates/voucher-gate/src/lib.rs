//! Authorization gate for the voucher ledger.
//!
//! Every mutating ledger operation must pass through the gate before it can
//! touch the voucher map. The gate runs a fail-fast pipeline of stages
//! (ownership, pause, plus any custom checks) and owns the administrator /
//! pause state machine: {Active, Paused}, starting Active, with owner-gated
//! transitions in both directions.
//!
//! # Quick Start
//!
//! ```rust
//! use voucher_gate::{AccessGate, GateError, MutationKind, MutationRequest};
//!
//! let gate = AccessGate::with_default_stages("admin");
//! let request = MutationRequest::new("admin", MutationKind::Mint);
//! assert!(gate.authorize(&request).is_ok());
//!
//! let stranger = MutationRequest::new("mallory", MutationKind::Burn);
//! assert!(matches!(
//!     gate.authorize(&stranger),
//!     Err(GateError::NotOwner { .. })
//! ));
//! ```

pub mod error;
pub mod gate;
pub mod stage;
pub mod stages;

// Re-exports for convenience.
pub use error::GateError;
pub use gate::AccessGate;
pub use stage::{GateSnapshot, GateStage, MutationKind, MutationRequest};
pub use stages::{OwnershipStage, PauseStage};

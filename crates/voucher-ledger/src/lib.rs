//! Core voucher ledger for the voucher platform.
//!
//! This crate is the heart of the system. It provides:
//! - `LedgerReader` / `LedgerWriter` trait boundaries
//! - `InMemoryVoucherLedger` implementation for embedding and tests
//! - Mint / burn / transfer / alter / split state transitions over a
//!   monotonically increasing id space
//! - Authorization through the access gate on every mutation
//! - Event emission strictly after each committed mutation
//!
//! # Quick Start
//!
//! ```rust
//! use voucher_ledger::{InMemoryVoucherLedger, LedgerReader, LedgerWriter};
//! use voucher_types::{PartyId, Voucher, VoucherId, VoucherStatus};
//!
//! let admin = PartyId::new("wiiqare_admin");
//! let ledger = InMemoryVoucherLedger::new(admin.clone());
//!
//! let voucher = Voucher::new(
//!     50,
//!     "USD",
//!     "wiiqare_admin",
//!     "hospitalA",
//!     "pacientA",
//!     VoucherStatus::Unclaimed,
//! );
//! ledger.mint(&admin, voucher.clone()).unwrap();
//!
//! assert_eq!(ledger.current_voucher_id().unwrap(), VoucherId::new(1));
//! assert_eq!(ledger.voucher(VoucherId::new(0)).unwrap(), voucher);
//! ```

pub mod error;
pub mod memory;
pub mod traits;

pub use error::LedgerError;
pub use memory::{InMemoryVoucherLedger, LedgerConfig};
pub use traits::{LedgerReader, LedgerWriter};

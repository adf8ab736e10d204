//! Foundation types for the voucher ledger.
//!
//! This crate provides the record and identifier types used throughout the
//! system. Every other crate in the workspace depends on `voucher-types`.
//!
//! # Key Types
//!
//! - [`VoucherId`] - Ledger-assigned integer identifier, never reused
//! - [`PartyId`] - String identity of a platform participant
//! - [`CurrencyCode`] - Short currency code ("USD")
//! - [`VoucherStatus`] - Closed lifecycle enumeration
//! - [`Voucher`] - The six-field voucher record and its burned sentinel

pub mod error;
pub mod id;
pub mod party;
pub mod voucher;

pub use error::TypeError;
pub use id::VoucherId;
pub use party::PartyId;
pub use voucher::{CurrencyCode, Voucher, VoucherStatus};

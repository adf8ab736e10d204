use std::fmt;

use serde::{Deserialize, Serialize};

/// Ledger-assigned voucher identifier.
///
/// Ids are handed out by the ledger at mint time from a strictly increasing
/// counter and are never reclaimed or reassigned, so a `VoucherId` remains a
/// stable reference to the same record for the lifetime of the ledger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoucherId(u64);

impl VoucherId {
    /// Wrap a raw counter value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The underlying integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VoucherId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<VoucherId> for u64 {
    fn from(id: VoucherId) -> Self {
        id.0
    }
}

impl fmt::Debug for VoucherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoucherId({})", self.0)
    }
}

impl fmt::Display for VoucherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(VoucherId::new(7).to_string(), "v:7");
    }

    #[test]
    fn u64_roundtrip() {
        let id = VoucherId::from(42u64);
        assert_eq!(u64::from(id), 42);
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn ordering_follows_counter() {
        assert!(VoucherId::new(1) < VoucherId::new(2));
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&VoucherId::new(9)).unwrap();
        assert_eq!(json, "9");
        let parsed: VoucherId = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, VoucherId::new(9));
    }
}

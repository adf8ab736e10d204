use std::fmt;

use serde::{Deserialize, Serialize};

/// String identity of a platform participant.
///
/// Parties are the administrator, issuing providers, voucher holders, and
/// beneficiaries. The ledger does not validate the format or uniqueness of
/// party identifiers; they are opaque labels supplied by the caller. The
/// empty identifier is reserved for the burned sentinel record.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

impl PartyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The empty identifier carried by burned records.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PartyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PartyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Debug for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId({})", self.0)
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert!(PartyId::empty().is_empty());
        assert!(!PartyId::new("hospitalA").is_empty());
    }

    #[test]
    fn display_is_bare_identifier() {
        assert_eq!(PartyId::new("wiiqare_admin").to_string(), "wiiqare_admin");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&PartyId::new("pacientA")).unwrap();
        assert_eq!(json, "\"pacientA\"");
    }
}

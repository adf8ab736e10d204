use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::party::PartyId;

/// Short currency code denominating a voucher ("USD", "EUR", ...).
///
/// The code is not validated against any registry; like party identifiers
/// it is an opaque caller-supplied label. The empty code is reserved for
/// the burned sentinel.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The empty code carried by burned records.
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

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a voucher record.
///
/// Active records are `Unclaimed` or `Claimed`; `Burned` is carried only by
/// the zero sentinel that replaces a retired record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherStatus {
    /// Issued but not yet redeemed by the beneficiary.
    Unclaimed,
    /// Redeemed by the beneficiary.
    Claimed,
    /// Retired; the record at this id is the zero sentinel.
    Burned,
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unclaimed => "unclaimed",
            Self::Claimed => "claimed",
            Self::Burned => "burned",
        };
        write!(f, "{s}")
    }
}

impl FromStr for VoucherStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unclaimed" => Ok(Self::Unclaimed),
            "claimed" => Ok(Self::Claimed),
            "burned" => Ok(Self::Burned),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

/// A voucher record: a fixed-value claim denominated in a currency.
///
/// The id is not part of the record; it is the key under which the ledger
/// stores it. Minting, altering, and splitting all take a full `Voucher`
/// as the caller-supplied field set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    /// Non-negative claim amount in minor units of `currency`.
    pub value: u64,
    /// Currency the value is denominated in.
    pub currency: CurrencyCode,
    /// Current holder.
    pub owner: PartyId,
    /// Issuing / servicing party.
    pub provider: PartyId,
    /// Intended redeemer.
    pub beneficiary: PartyId,
    /// Lifecycle status.
    pub status: VoucherStatus,
}

impl Voucher {
    pub fn new(
        value: u64,
        currency: impl Into<CurrencyCode>,
        owner: impl Into<PartyId>,
        provider: impl Into<PartyId>,
        beneficiary: impl Into<PartyId>,
        status: VoucherStatus,
    ) -> Self {
        Self {
            value,
            currency: currency.into(),
            owner: owner.into(),
            provider: provider.into(),
            beneficiary: beneficiary.into(),
            status,
        }
    }

    /// The canonical burned record: zero value, empty parties, `Burned`.
    ///
    /// Burning and splitting replace records with this sentinel rather than
    /// removing them, so ids stay mapped forever.
    pub fn sentinel() -> Self {
        Self {
            value: 0,
            currency: CurrencyCode::empty(),
            owner: PartyId::empty(),
            provider: PartyId::empty(),
            beneficiary: PartyId::empty(),
            status: VoucherStatus::Burned,
        }
    }

    /// Returns `true` iff this record is the burned sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Voucher {
        Voucher::new(
            50,
            "USD",
            "wiiqare_admin",
            "hospitalA",
            "pacientA",
            VoucherStatus::Unclaimed,
        )
    }

    #[test]
    fn status_display_roundtrip() {
        for status in [
            VoucherStatus::Unclaimed,
            VoucherStatus::Claimed,
            VoucherStatus::Burned,
        ] {
            let parsed: VoucherStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_rejects_unknown_string() {
        let err = "redeemed".parse::<VoucherStatus>().unwrap_err();
        assert_eq!(err, TypeError::UnknownStatus("redeemed".into()));
    }

    #[test]
    fn sentinel_is_zeroed() {
        let sentinel = Voucher::sentinel();
        assert_eq!(sentinel.value, 0);
        assert!(sentinel.currency.is_empty());
        assert!(sentinel.owner.is_empty());
        assert!(sentinel.provider.is_empty());
        assert!(sentinel.beneficiary.is_empty());
        assert_eq!(sentinel.status, VoucherStatus::Burned);
        assert!(sentinel.is_sentinel());
    }

    #[test]
    fn live_record_is_not_sentinel() {
        assert!(!sample().is_sentinel());
    }

    #[test]
    fn serde_roundtrip() {
        let voucher = sample();
        let json = serde_json::to_string(&voucher).unwrap();
        let parsed: Voucher = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, voucher);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&VoucherStatus::Unclaimed).unwrap();
        assert_eq!(json, "\"unclaimed\"");
    }
}

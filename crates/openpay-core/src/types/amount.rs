use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with caller-controlled precision.
///
/// The scale is kept exactly as supplied: `"10.00"` is written to the wire as `10.00`,
/// never as `10` or `10.0`. Callers are responsible for currency-correct precision.
///
/// ```
/// use openpay_core::types::Amount;
///
/// let amount: Amount = "10.00".parse().unwrap();
/// assert_eq!(amount.to_string(), "10.00");
///
/// let json = serde_json::to_string(&amount).unwrap();
/// assert_eq!(json, "10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(pub Decimal);

impl Amount {
    /// Builds an amount from an integer mantissa and a decimal scale, e.g. `(1000, 2)` is `10.00`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds 28. Use [`Amount::try_new`] for untrusted scales.
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Amount(Decimal::new(mantissa, scale))
    }

    /// Like [`Amount::new`], but fails instead of panicking when `scale` exceeds 28.
    pub fn try_new(mantissa: i64, scale: u32) -> Result<Self, rust_decimal::Error> {
        Decimal::try_new(mantissa, scale).map(Amount)
    }

    pub fn as_decimal(&self) -> &Decimal {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Amount)
            .map_err(|source| ParseAmountError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(Decimal::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Relies on serde_json's arbitrary precision numbers to keep the scale verbatim.
        let number =
            serde_json::Number::from_str(&self.0.to_string()).map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let number = serde_json::Number::deserialize(deserializer)?;
        Amount::from_str(&number.to_string()).map_err(serde::de::Error::custom)
    }
}

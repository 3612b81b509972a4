//! Miscellaneous common types used throughout the Openpay codebase.

use bon::Builder;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Free-form caller metadata. Insertion order is preserved on the wire.
pub type Metadata = indexmap::IndexMap<String, String>;

/// A timestamp as exchanged with the API. The UTC offset supplied by the caller
/// (or returned by the server) is kept as is.
pub type Timestamp = DateTime<FixedOffset>;

/// A postal address, used both in requests and in returned entities.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub line1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub line2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub line3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Mxn,
    Usd,
    Cop,
}

/// How a charge or payout moves funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    BankAccount,
    Store,
    Bank,
}

/// Whether a charge is paid with card reward points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UseCardPoints {
    None,
    Mixed,
    Only,
}

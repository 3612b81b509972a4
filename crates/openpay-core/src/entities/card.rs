use serde::{Deserialize, Serialize};

use crate::types::{Address, Amount, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// Masked card number, e.g. `424242XXXXXX4242`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_charges: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_payouts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_card: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_type: Option<String>,
}

/// Reward points available on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsBalance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_points: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_mxn: Option<Amount>,
}

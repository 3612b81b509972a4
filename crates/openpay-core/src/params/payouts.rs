use bon::Builder;
use serde::Serialize;

use crate::{
    params::{CreateCardParams, RequestParams},
    types::{Amount, PaymentMethod},
};

/// Bank account data for payouts to an unregistered account.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountParams {
    #[builder(into)]
    pub clabe: String,

    #[builder(into)]
    pub holder_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub alias: Option<String>,
}

/// Parameters to send funds from the merchant (or a customer) balance.
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
pub struct CreatePayoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,

    /// Id of a registered card or bank account.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub destination_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CreateCardParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_id: Option<String>,
}

impl RequestParams for CreatePayoutParams {
    const REQUIRED: &'static [&'static str] = &["method", "amount", "description"];
}

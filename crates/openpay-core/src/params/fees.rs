use bon::Builder;
use serde::Serialize;

use crate::{params::RequestParams, types::Amount};

/// Parameters to charge a fee to a customer's balance.
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
pub struct CreateFeeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_id: Option<String>,
}

impl RequestParams for CreateFeeParams {
    const REQUIRED: &'static [&'static str] = &["customer_id", "amount", "description"];
}

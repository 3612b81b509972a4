use bon::Builder;
use serde::Serialize;

use crate::{params::RequestParams, types::Address};

/// Customer data, used both to create and to update a customer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Creates the customer with its own balance account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_account: Option<bool>,
}

impl RequestParams for CustomerParams {
    const REQUIRED: &'static [&'static str] = &["name"];
}

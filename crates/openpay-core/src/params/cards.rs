use bon::Builder;
use serde::Serialize;

use crate::{params::RequestParams, types::Address};

/// Card data to register a card, either in clear or as a previously created token.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cvv2: Option<String>,

    /// Two digit month, e.g. `"09"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub expiration_month: Option<String>,

    /// Two digit year, e.g. `"20"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub expiration_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub token_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub device_session_id: Option<String>,
}

impl RequestParams for CreateCardParams {}

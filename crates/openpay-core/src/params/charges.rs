use bon::Builder;
use serde::Serialize;

use crate::{
    params::{CreateCardParams, CustomerParams, RequestParams},
    types::{Amount, Currency, Metadata, PaymentMethod, Timestamp, UseCardPoints},
};

/// Parameters to create a charge against a stored card, a card token, a bank or a store.
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
pub struct CreateChargeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,

    /// Id of a stored card or of a card token.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub source_id: Option<String>,

    /// Card data, for charges without a stored card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CreateCardParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub device_session_id: Option<String>,

    /// `false` only authorizes the amount; it must later be confirmed with a capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_card_points: Option<UseCardPoints>,

    /// New customer data for merchant charges that should register the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_phone_order: Option<bool>,
}

impl RequestParams for CreateChargeParams {
    const REQUIRED: &'static [&'static str] = &["method", "amount", "description"];
}

/// Parameters to refund a completed charge.
///
/// `charge_id` and `customer_id` select the resource path and are not part of the body.
/// Without a customer id the refund is issued against the merchant's charge.
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
pub struct RefundParams {
    #[serde(skip)]
    #[builder(into)]
    pub charge_id: Option<String>,

    #[serde(skip)]
    #[builder(into)]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    /// Partial refund amount; the whole charge is refunded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl RequestParams for RefundParams {}

/// Parameters to confirm a charge created with `capture: false`.
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmCaptureParams {
    #[serde(skip)]
    #[builder(into)]
    pub charge_id: Option<String>,

    #[serde(skip)]
    #[builder(into)]
    pub customer_id: Option<String>,

    /// Amount to capture, at most the authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl RequestParams for ConfirmCaptureParams {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_path_fields_stay_out_of_the_body() {
        let params = RefundParams::builder()
            .charge_id("tr6cxbcefzatd10guvvw")
            .customer_id("a9ualumwnrcxkl42l6mh")
            .description("cancelacion")
            .build();

        let encoded = params.encode().unwrap();
        let keys: Vec<&str> = encoded.keys().collect();
        assert_eq!(keys, vec!["description"]);
    }

    #[test]
    fn capture_without_amount_encodes_empty_body() {
        let params = ConfirmCaptureParams::builder()
            .charge_id("tr6cxbcefzatd10guvvw")
            .build();
        assert!(params.encode().unwrap().is_empty());
    }

    #[test]
    fn charge_with_card_data() {
        let params = CreateChargeParams::builder()
            .method(PaymentMethod::Card)
            .card(
                CreateCardParams::builder()
                    .card_number("5555555555554444")
                    .holder_name("Juanito Pérez Nuñez")
                    .cvv2("111")
                    .expiration_month("09")
                    .expiration_year("20")
                    .build(),
            )
            .amount(Amount::new(1000, 2))
            .description("Pago de taxi")
            .is_phone_order(true)
            .build();

        let encoded = params.encode().unwrap();
        assert_eq!(
            encoded.get("card"),
            Some(&serde_json::json!({
                "card_number": "5555555555554444",
                "holder_name": "Juanito Pérez Nuñez",
                "cvv2": "111",
                "expiration_month": "09",
                "expiration_year": "20"
            }))
        );
        assert_eq!(encoded.get("is_phone_order"), Some(&serde_json::json!(true)));
    }
}

#![cfg(feature = "reqwest-transport")]

use std::time::Duration;

use base64::{Engine, prelude::BASE64_STANDARD};
use openpay_kit::{
    api::DefaultOpenpayApi,
    config::ClientConfig,
    errors::ErrorCategory,
    params::{CreateChargeParams, SearchParams},
    types::PaymentMethod,
};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

const MERCHANT_ID: &str = "mzdtln0bmtms6o3kck8f";
const PRIVATE_KEY: &str = "sk_e568c42a6c384b7ab02cd47d2e407cab";

fn config_for(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(Url::parse(base_url).unwrap())
        .merchant_id(MERCHANT_ID)
        .private_key(PRIVATE_KEY)
        .build()
}

const CHARGE: &str = r#"{
    "id": "tr6cxbcefzatd10guvvw",
    "amount": 10.00,
    "authorization": "801585",
    "method": "card",
    "operation_type": "in",
    "transaction_type": "charge",
    "status": "completed",
    "currency": "MXN",
    "description": "Pago de taxi",
    "order_id": "ord-1",
    "creation_date": "2014-05-26T11:56:25-05:00",
    "operation_date": "2014-05-26T11:56:25-05:00",
    "metadata": {"ride": "1234", "driver": "juan"}
}"#;

#[tokio::test]
async fn posts_json_with_basic_auth() {
    let server = MockServer::start().await;
    let authorization = format!("Basic {}", BASE64_STANDARD.encode(format!("{PRIVATE_KEY}:")));

    Mock::given(method("POST"))
        .and(path(format!("/v1/{MERCHANT_ID}/charges")))
        .and(header("authorization", authorization.as_str()))
        .and(header("content-type", "application/json"))
        .and(body_string_contains(r#""amount":10.00"#))
        .and(body_string_contains(r#""description":"Pago de taxi""#))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CHARGE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let api = DefaultOpenpayApi::new(config_for(&server.uri())).unwrap();
    let params = CreateChargeParams::builder()
        .method(PaymentMethod::Card)
        .source_id("kqgykn96i7bcs1wwhvgw")
        .amount("10.00".parse().unwrap())
        .description("Pago de taxi")
        .order_id("ord-1")
        .build();

    let charge = api.charges().create(&params).await.unwrap();
    assert_eq!(charge.id, "tr6cxbcefzatd10guvvw");
    assert_eq!(charge.amount.unwrap().to_string(), "10.00");
    let metadata = charge.metadata.unwrap();
    assert_eq!(
        metadata.keys().collect::<Vec<_>>(),
        vec!["ride", "driver"]
    );
}

#[tokio::test]
async fn list_filters_become_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/v1/{MERCHANT_ID}/customers/ag4nktpdzebjiye1tlze/charges"
        )))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "2"))
        .and(query_param("amount[gte]", "100.50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(format!("[{CHARGE}]"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = DefaultOpenpayApi::new(config_for(&server.uri())).unwrap();
    let filter = SearchParams::new()
        .limit(2)
        .offset(2)
        .amount_gte("100.50".parse().unwrap());

    let charges = api
        .charges()
        .customer("ag4nktpdzebjiye1tlze")
        .list(Some(&filter))
        .await
        .unwrap();
    assert_eq!(charges.len(), 1);
}

#[tokio::test]
async fn gateway_error_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{MERCHANT_ID}/cards/kfaq5dm5pq1qefzev3nz")))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"category":"request","description":"The requested resource doesn't exist","http_code":404,"error_code":1005,"request_id":"1981cdb8-19cb-4bad-8256-e95d58bc035c"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let api = DefaultOpenpayApi::new(config_for(&server.uri())).unwrap();
    let err = api.cards().get("kfaq5dm5pq1qefzev3nz").await.unwrap_err();

    let classified = err.as_classified().unwrap();
    assert_eq!(classified.category, ErrorCategory::NotFound);
    assert_eq!(classified.http_status, Some(404));
    assert_eq!(classified.gateway_error_code, Some(1005));
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/{MERCHANT_ID}/customers/a9ualumwnrcxkl42l6mh")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = DefaultOpenpayApi::new(config_for(&server.uri())).unwrap();
    api.customers().delete("a9ualumwnrcxkl42l6mh").await.unwrap();
}

#[tokio::test]
async fn slow_gateway_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{MERCHANT_ID}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"id":"mzdtln0bmtms6o3kck8f"}"#, "application/json")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let api = DefaultOpenpayApi::new(config_for(&server.uri()))
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let err = api.merchant().get().await.unwrap_err();

    assert_eq!(err.category(), Some(ErrorCategory::ServiceUnavailable));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unreachable_gateway_is_service_unavailable() {
    let api = DefaultOpenpayApi::new(config_for("http://127.0.0.1:1")).unwrap();
    let err = api.merchant().get().await.unwrap_err();

    let classified = err.as_classified().unwrap();
    assert_eq!(classified.category, ErrorCategory::ServiceUnavailable);
    assert_eq!(classified.http_status, None);
}

use openpay_kit::{
    OpenpayApi,
    config::ClientConfig,
    params::{CreateChargeParams, RefundParams, SearchParams},
    types::{Currency, Metadata, PaymentMethod},
};

/// Charges a stored card, refunds half of it and lists the latest charges.
///
/// Needs `OPENPAY_MERCHANT_ID`, `OPENPAY_PRIVATE_KEY` and `OPENPAY_SOURCE_ID` (a card or
/// token id); talks to the sandbox unless `OPENPAY_BASE_URL` says otherwise.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env().expect("Openpay configuration not set");
    let source_id = std::env::var("OPENPAY_SOURCE_ID").expect("OPENPAY_SOURCE_ID not set");

    tracing::info!("Using Openpay at {}", config.base_url);
    let api = OpenpayApi::new(config).expect("Failed to build Openpay client");

    let mut metadata = Metadata::new();
    metadata.insert("ride".to_string(), "1234".to_string());

    let charge = api
        .charges()
        .create(
            &CreateChargeParams::builder()
                .method(PaymentMethod::Card)
                .source_id(source_id)
                .amount("100.00".parse().expect("valid amount"))
                .currency(Currency::Mxn)
                .description("Pago de taxi")
                .metadata(metadata)
                .build(),
        )
        .await;

    let charge = match charge {
        Ok(charge) => charge,
        Err(err) if err.is_retryable() => {
            tracing::warn!("Openpay unavailable, try again later: {}", err);
            return;
        }
        Err(err) => {
            tracing::error!("Charge rejected: {}", err);
            return;
        }
    };
    tracing::info!("Created charge {} ({:?})", charge.id, charge.status);

    match api
        .charges()
        .refund(
            &RefundParams::builder()
                .charge_id(charge.id.clone())
                .amount("50.00".parse().expect("valid amount"))
                .description("Reembolso parcial")
                .build(),
        )
        .await
    {
        Ok(refunded) => tracing::info!("Refunded: {:?}", refunded.refund),
        // The charge stays created: the two calls are independent.
        Err(err) => tracing::error!("Refund of {} failed: {}", charge.id, err),
    }

    let latest = api
        .charges()
        .list(Some(&SearchParams::new().limit(5)))
        .await
        .expect("Failed to list charges");
    for charge in latest {
        tracing::info!("{} {:?} {:?}", charge.id, charge.amount, charge.status);
    }
}

use openpay_core::{
    entities::Charge,
    errors::{EncodingError, Result},
    params::{ConfirmCaptureParams, CreateChargeParams, RefundParams, SearchParams},
};

use crate::{
    client::JsonServiceClient,
    operations::ResourceOperations,
    path::{CHARGES_PATH, CUSTOMER_CHARGES_PATH, CUSTOMER_ID},
    transport::Transport,
};

/// Charges, at merchant level or for one customer.
///
/// Refunds and capture confirmations are actions on an existing charge. Their parameters
/// carry the charge id, and optionally the customer id, which select the path.
#[derive(Debug, Clone)]
pub struct ChargeOperations<'a, T> {
    ops: ResourceOperations<'a, T, Charge>,
}

impl<'a, T: Transport> ChargeOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        ChargeOperations {
            ops: ResourceOperations::new(client, CHARGES_PATH),
        }
    }

    /// Scopes every call to the charges of `customer_id`.
    pub fn customer(self, customer_id: impl Into<String>) -> Self {
        ChargeOperations {
            ops: self.ops.rescope(CUSTOMER_CHARGES_PATH).bind(CUSTOMER_ID, customer_id),
        }
    }

    pub async fn create(&self, params: &CreateChargeParams) -> Result<Charge> {
        self.ops.create(params).await
    }

    pub async fn get(&self, charge_id: &str) -> Result<Charge> {
        self.ops.fetch(charge_id).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<Charge>> {
        self.ops.list(filter).await
    }

    /// Refunds a completed charge, fully or partially. Returns the updated charge.
    pub async fn refund(&self, params: &RefundParams) -> Result<Charge> {
        let charge_id = params
            .charge_id
            .as_deref()
            .ok_or(EncodingError::MissingField {
                params: "RefundParams",
                field: "charge_id",
            })?;

        self.scoped_to(params.customer_id.as_deref())
            .action(charge_id, "refund", params)
            .await
    }

    /// Captures an amount previously authorized with `capture: false`.
    pub async fn confirm_capture(&self, params: &ConfirmCaptureParams) -> Result<Charge> {
        let charge_id = params
            .charge_id
            .as_deref()
            .ok_or(EncodingError::MissingField {
                params: "ConfirmCaptureParams",
                field: "charge_id",
            })?;

        self.scoped_to(params.customer_id.as_deref())
            .action(charge_id, "capture", params)
            .await
    }

    fn scoped_to(&self, customer_id: Option<&str>) -> ResourceOperations<'a, T, Charge> {
        match customer_id {
            Some(customer_id) => self
                .ops
                .clone()
                .rescope(CUSTOMER_CHARGES_PATH)
                .bind(CUSTOMER_ID, customer_id),
            None => self.ops.clone(),
        }
    }
}

use openpay_core::{
    entities::Payout,
    errors::Result,
    params::{CreatePayoutParams, SearchParams},
};

use crate::{
    client::JsonServiceClient,
    operations::ResourceOperations,
    path::{CUSTOMER_ID, CUSTOMER_PAYOUTS_PATH, PAYOUTS_PATH},
    transport::Transport,
};

/// Payouts to bank accounts or cards, from the merchant or from a customer balance.
#[derive(Debug, Clone)]
pub struct PayoutOperations<'a, T> {
    ops: ResourceOperations<'a, T, Payout>,
}

impl<'a, T: Transport> PayoutOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        PayoutOperations {
            ops: ResourceOperations::new(client, PAYOUTS_PATH),
        }
    }

    /// Scopes every call to the payouts of `customer_id`.
    pub fn customer(self, customer_id: impl Into<String>) -> Self {
        PayoutOperations {
            ops: self.ops.rescope(CUSTOMER_PAYOUTS_PATH).bind(CUSTOMER_ID, customer_id),
        }
    }

    pub async fn create(&self, params: &CreatePayoutParams) -> Result<Payout> {
        self.ops.create(params).await
    }

    pub async fn get(&self, payout_id: &str) -> Result<Payout> {
        self.ops.fetch(payout_id).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<Payout>> {
        self.ops.list(filter).await
    }
}

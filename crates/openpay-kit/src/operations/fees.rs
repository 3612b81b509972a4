use openpay_core::{
    entities::Fee,
    errors::Result,
    params::{CreateFeeParams, SearchParams},
};

use crate::{
    client::JsonServiceClient, operations::ResourceOperations, path::FEES_PATH,
    transport::Transport,
};

/// Fees charged to customer balances. Fees cannot be fetched individually or deleted.
#[derive(Debug, Clone)]
pub struct FeeOperations<'a, T> {
    ops: ResourceOperations<'a, T, Fee>,
}

impl<'a, T: Transport> FeeOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        FeeOperations {
            ops: ResourceOperations::new(client, FEES_PATH),
        }
    }

    pub async fn create(&self, params: &CreateFeeParams) -> Result<Fee> {
        self.ops.create(params).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<Fee>> {
        self.ops.list(filter).await
    }
}

use openpay_core::{entities::Merchant, errors::Result};

use crate::{
    client::JsonServiceClient, operations::ResourceOperations, path::MERCHANT_PATH,
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct MerchantOperations<'a, T> {
    ops: ResourceOperations<'a, T, Merchant>,
}

impl<'a, T: Transport> MerchantOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        MerchantOperations {
            ops: ResourceOperations::new(client, MERCHANT_PATH),
        }
    }

    /// The merchant account the client is configured for.
    pub async fn get(&self) -> Result<Merchant> {
        self.ops.retrieve().await
    }
}

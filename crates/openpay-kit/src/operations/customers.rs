use openpay_core::{
    entities::Customer,
    errors::Result,
    params::{CustomerParams, SearchParams},
};

use crate::{
    client::JsonServiceClient, operations::ResourceOperations, path::CUSTOMERS_PATH,
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct CustomerOperations<'a, T> {
    ops: ResourceOperations<'a, T, Customer>,
}

impl<'a, T: Transport> CustomerOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        CustomerOperations {
            ops: ResourceOperations::new(client, CUSTOMERS_PATH),
        }
    }

    pub async fn create(&self, params: &CustomerParams) -> Result<Customer> {
        self.ops.create(params).await
    }

    pub async fn get(&self, customer_id: &str) -> Result<Customer> {
        self.ops.fetch(customer_id).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<Customer>> {
        self.ops.list(filter).await
    }

    /// Replaces the customer's attributes.
    pub async fn update(&self, customer_id: &str, params: &CustomerParams) -> Result<Customer> {
        self.ops.update(customer_id, params).await
    }

    pub async fn delete(&self, customer_id: &str) -> Result<()> {
        self.ops.delete(customer_id).await
    }
}

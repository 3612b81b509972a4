use openpay_core::{
    entities::{Card, PointsBalance},
    errors::Result,
    params::{CreateCardParams, SearchParams},
};

use crate::{
    client::JsonServiceClient,
    operations::ResourceOperations,
    path::{CARDS_PATH, CUSTOMER_CARDS_PATH, CUSTOMER_ID},
    transport::Transport,
};

/// Stored cards, at merchant level or for one customer.
#[derive(Debug, Clone)]
pub struct CardOperations<'a, T> {
    ops: ResourceOperations<'a, T, Card>,
}

impl<'a, T: Transport> CardOperations<'a, T> {
    pub fn new(client: &'a JsonServiceClient<T>) -> Self {
        CardOperations {
            ops: ResourceOperations::new(client, CARDS_PATH),
        }
    }

    /// Scopes every call to the cards of `customer_id`.
    pub fn customer(self, customer_id: impl Into<String>) -> Self {
        CardOperations {
            ops: self
                .ops
                .rescope(CUSTOMER_CARDS_PATH)
                .bind(CUSTOMER_ID, customer_id),
        }
    }

    pub async fn create(&self, params: &CreateCardParams) -> Result<Card> {
        self.ops.create(params).await
    }

    pub async fn get(&self, card_id: &str) -> Result<Card> {
        self.ops.fetch(card_id).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<Card>> {
        self.ops.list(filter).await
    }

    pub async fn delete(&self, card_id: &str) -> Result<()> {
        self.ops.delete(card_id).await
    }

    /// Reward points balance of a points-enabled card.
    pub async fn points(&self, card_id: &str) -> Result<PointsBalance> {
        self.ops.fetch_related(card_id, "points").await
    }
}

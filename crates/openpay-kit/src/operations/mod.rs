//! Typed operations over one resource collection.
//!
//! A [`ResourceOperations`] pairs a path template with the values bound to its placeholders
//! and maps the generic verbs onto [`JsonServiceClient`] calls. Resource views such as
//! [`ChargeOperations`] expose only the verbs their resource supports.

mod cards;
mod charges;
mod customers;
mod fees;
mod merchant;
mod payouts;

pub use cards::*;
pub use charges::*;
pub use customers::*;
pub use fees::*;
pub use merchant::*;
pub use payouts::*;

use std::marker::PhantomData;

use openpay_core::{
    entities::Entity,
    errors::Result,
    params::{RequestParams, SearchParams},
};
use serde::de::DeserializeOwned;

use crate::{
    client::JsonServiceClient,
    path::{MERCHANT_ID, PathTemplate, encode_segment},
    transport::Transport,
};

pub struct ResourceOperations<'a, T, E> {
    client: &'a JsonServiceClient<T>,
    template: PathTemplate,
    bindings: Vec<(&'static str, String)>,
    _entity: PhantomData<fn() -> E>,
}

impl<T, E> Clone for ResourceOperations<'_, T, E> {
    fn clone(&self) -> Self {
        ResourceOperations {
            client: self.client,
            template: self.template,
            bindings: self.bindings.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T, E> std::fmt::Debug for ResourceOperations<'_, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceOperations")
            .field("template", &self.template)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl<'a, T: Transport, E: Entity> ResourceOperations<'a, T, E> {
    /// Operations on `template`, scoped to the client's merchant.
    pub fn new(client: &'a JsonServiceClient<T>, template: &'static str) -> Self {
        ResourceOperations {
            client,
            template: PathTemplate::new(template),
            bindings: vec![(MERCHANT_ID, client.config().merchant_id.clone())],
            _entity: PhantomData,
        }
    }

    /// Binds `value` to the `{name}` placeholder, replacing any previous binding.
    ///
    /// The value is used verbatim, an empty string included.
    pub fn bind(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.bindings.retain(|(key, _)| *key != name);
        self.bindings.push((name, value.into()));
        self
    }

    /// Switches to another collection of the same entity, e.g. from merchant level to
    /// customer level, keeping the existing bindings.
    pub fn rescope(mut self, template: &'static str) -> Self {
        self.template = PathTemplate::new(template);
        self
    }

    pub fn template(&self) -> &'static str {
        self.template.as_str()
    }

    pub fn collection_path(&self) -> Result<String> {
        let bindings: Vec<(&str, &str)> = self
            .bindings
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        Ok(self.template.resolve(&bindings)?)
    }

    pub fn item_path(&self, id: &str) -> Result<String> {
        Ok(format!("{}/{}", self.collection_path()?, encode_segment(id)?))
    }

    pub async fn create<P: RequestParams>(&self, params: &P) -> Result<E> {
        let params = params.encode()?;
        let path = self.collection_path()?;
        self.client.create(&path, &params).await
    }

    pub async fn fetch(&self, id: &str) -> Result<E> {
        let path = self.item_path(id)?;
        self.client.fetch(&path).await
    }

    /// Fetches the collection path itself, for singleton resources.
    pub async fn retrieve(&self) -> Result<E> {
        let path = self.collection_path()?;
        self.client.fetch(&path).await
    }

    pub async fn list(&self, filter: Option<&SearchParams>) -> Result<Vec<E>> {
        let path = self.collection_path()?;
        self.client.list(&path, filter).await
    }

    pub async fn update<P: RequestParams>(&self, id: &str, params: &P) -> Result<E> {
        let params = params.encode()?;
        let path = self.item_path(id)?;
        self.client.update(&path, &params).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = self.item_path(id)?;
        self.client.delete(&path).await
    }

    /// POSTs `params` to `{item}/{action}`, e.g. `charges/{id}/refund`.
    pub async fn action<P, R>(&self, id: &str, action: &str, params: &P) -> Result<R>
    where
        P: RequestParams,
        R: DeserializeOwned,
    {
        let params = params.encode()?;
        let path = format!("{}/{}", self.item_path(id)?, action);
        self.client.create(&path, &params).await
    }

    /// GETs a sub-resource of an item, e.g. `cards/{id}/points`.
    pub async fn fetch_related<R: DeserializeOwned>(&self, id: &str, related: &str) -> Result<R> {
        let path = format!("{}/{}", self.item_path(id)?, related);
        self.client.fetch(&path).await
    }
}

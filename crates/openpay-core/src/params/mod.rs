//! Request parameters and their wire encoding.
//!
//! Every request body starts life as a typed parameter value (for example
//! [`CreateChargeParams`]) and is turned into an immutable [`ParameterSet`] by
//! [`RequestParams::encode`] before it reaches the transport. Unset optional fields are
//! omitted entirely; an explicitly empty value is kept, since the API distinguishes the two.

mod cards;
mod charges;
mod customers;
mod fees;
mod payouts;
mod search;

pub use cards::*;
pub use charges::*;
pub use customers::*;
pub use fees::*;
pub use payouts::*;
pub use search::*;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::EncodingError;

/// A typed set of request parameters.
///
/// Which fields are mandatory is a property of each parameter type, declared through
/// [`RequestParams::REQUIRED`] as wire field names.
pub trait RequestParams: Serialize {
    /// Wire names of the fields that must be present before the request is sent.
    const REQUIRED: &'static [&'static str] = &[];

    /// Encodes these parameters into their wire form.
    fn encode(&self) -> Result<ParameterSet, EncodingError>
    where
        Self: Sized,
    {
        ParameterSet::encode(self)
    }
}

/// The encoded, immutable form of a request's fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ParameterSet(Map<String, Value>);

impl ParameterSet {
    /// An empty body, for calls whose parameters are all optional and unset.
    pub fn empty() -> Self {
        ParameterSet(Map::new())
    }

    pub fn encode<P: RequestParams>(params: &P) -> Result<Self, EncodingError> {
        let name = short_type_name::<P>();
        let Value::Object(mut fields) = serde_json::to_value(params)? else {
            return Err(EncodingError::NotAnObject { params: name });
        };
        strip_nulls(&mut fields);

        if let Some(missing) = P::REQUIRED.iter().copied().find(|f| !fields.contains_key(*f)) {
            return Err(EncodingError::MissingField {
                params: name,
                field: missing,
            });
        }

        Ok(ParameterSet(fields))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(serde_json::to_vec(&self.0)?)
    }
}

fn strip_nulls(fields: &mut Map<String, Value>) {
    fields.retain(|_, value| !value.is_null());
    for value in fields.values_mut() {
        if let Value::Object(nested) = value {
            strip_nulls(nested);
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

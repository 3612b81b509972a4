use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::types::Amount;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters for list queries, encoded as URL query parameters.
///
/// Only the filters that were set are sent; an empty filter leaves paging and
/// filtering to the server defaults. Setting the same filter twice keeps the last value.
/// No consistency checks are made between filters (for instance `creation` together with
/// `creation[gte]`): the server is the judge and answers with a bad request.
///
/// ```
/// use openpay_core::params::SearchParams;
///
/// let search = SearchParams::new().limit(2).offset(2).order_id("ord-1");
/// let pairs: Vec<(&str, &str)> = search.iter().collect();
/// assert_eq!(pairs, vec![("limit", "2"), ("offset", "2"), ("order_id", "ord-1")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: IndexMap<&'static str, String>,
}

impl SearchParams {
    pub const LIMIT: &'static str = "limit";
    pub const OFFSET: &'static str = "offset";
    pub const CREATION: &'static str = "creation";
    pub const CREATION_GTE: &'static str = "creation[gte]";
    pub const CREATION_LTE: &'static str = "creation[lte]";
    pub const AMOUNT: &'static str = "amount";
    pub const AMOUNT_GTE: &'static str = "amount[gte]";
    pub const AMOUNT_LTE: &'static str = "amount[lte]";
    pub const ORDER_ID: &'static str = "order_id";
    pub const STATUS: &'static str = "status";

    pub fn new() -> Self {
        SearchParams::default()
    }

    /// Maximum number of results. The server applies its own default and upper bound.
    pub fn limit(self, limit: u32) -> Self {
        self.set(Self::LIMIT, limit.to_string())
    }

    /// Number of results to skip.
    pub fn offset(self, offset: u32) -> Self {
        self.set(Self::OFFSET, offset.to_string())
    }

    /// Results created on exactly this day.
    pub fn creation(self, date: NaiveDate) -> Self {
        self.set(Self::CREATION, date.format(DATE_FORMAT).to_string())
    }

    /// Results created on or after this day.
    pub fn creation_gte(self, date: NaiveDate) -> Self {
        self.set(Self::CREATION_GTE, date.format(DATE_FORMAT).to_string())
    }

    /// Results created on or before this day.
    pub fn creation_lte(self, date: NaiveDate) -> Self {
        self.set(Self::CREATION_LTE, date.format(DATE_FORMAT).to_string())
    }

    pub fn amount(self, amount: Amount) -> Self {
        self.set(Self::AMOUNT, amount.to_string())
    }

    pub fn amount_gte(self, amount: Amount) -> Self {
        self.set(Self::AMOUNT_GTE, amount.to_string())
    }

    pub fn amount_lte(self, amount: Amount) -> Self {
        self.set(Self::AMOUNT_LTE, amount.to_string())
    }

    pub fn order_id(self, order_id: impl Into<String>) -> Self {
        self.set(Self::ORDER_ID, order_id.into())
    }

    pub fn status(self, status: impl Into<String>) -> Self {
        self.set(Self::STATUS, status.into())
    }

    fn set(mut self, key: &'static str, value: String) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The filters as a string-keyed, string-valued map, in the order they were first set.
    pub fn as_map(&self) -> IndexMap<String, String> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}
